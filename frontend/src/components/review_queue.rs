use shared::{Application, ReviewDecision};
use yew::prelude::*;

use crate::components::application_modal::ApplicationModal;
use crate::components::application_review_modal::ApplicationReviewModal;
use crate::components::confirmation_modal::ConfirmationModal;
use crate::services::date_utils::format_submitted_at;

#[derive(Properties, PartialEq)]
pub struct ReviewQueueProps {
    pub applications: Vec<Application>,
}

/// Pending applications with View/Review entry points into the dialogs
#[function_component(ReviewQueue)]
pub fn review_queue(props: &ReviewQueueProps) -> Html {
    let pending = use_state(|| props.applications.clone());
    let viewing = use_state(|| Option::<Application>::None);
    let reviewing = use_state(|| Option::<Application>::None);
    let confirmation = use_state(|| Option::<String>::None);

    // Parent supplied a new batch
    use_effect_with(props.applications.clone(), {
        let pending = pending.clone();
        move |applications| {
            pending.set(applications.clone());
            || ()
        }
    });

    let on_close_view = {
        let viewing = viewing.clone();
        Callback::from(move |_: ()| viewing.set(None))
    };

    let on_close_review = {
        let reviewing = reviewing.clone();
        Callback::from(move |_: ()| reviewing.set(None))
    };

    let on_decided = {
        let pending = pending.clone();
        let confirmation = confirmation.clone();
        Callback::from(move |(id, decision): (String, ReviewDecision)| {
            let name = pending
                .iter()
                .find(|application| application.id() == Some(id.as_str()))
                .map(|application| application.display_name().to_string())
                .unwrap_or_else(|| "The application".to_string());
            let remaining: Vec<Application> = pending
                .iter()
                .filter(|application| application.id() != Some(id.as_str()))
                .cloned()
                .collect();
            pending.set(remaining);
            confirmation.set(Some(format!("{} has been {}.", name, decision.past_tense())));
        })
    };

    let on_close_confirmation = {
        let confirmation = confirmation.clone();
        Callback::from(move |_: ()| confirmation.set(None))
    };

    html! {
        <section class="review-queue">
            <h2>{"Pending Verification Applications"}</h2>

            {if pending.is_empty() {
                html! { <div class="review-queue-empty">{"No applications waiting for review."}</div> }
            } else {
                html! {
                    <table class="review-queue-table">
                        <thead>
                            <tr>
                                <th>{"Applicant"}</th>
                                <th>{"Type"}</th>
                                <th>{"Submitted"}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {for pending.iter().enumerate().map(|(index, application)| {
                                let on_view = {
                                    let viewing = viewing.clone();
                                    let application = application.clone();
                                    Callback::from(move |_: MouseEvent| viewing.set(Some(application.clone())))
                                };
                                let on_review = {
                                    let reviewing = reviewing.clone();
                                    let application = application.clone();
                                    Callback::from(move |_: MouseEvent| reviewing.set(Some(application.clone())))
                                };
                                html! {
                                    <tr key={row_key(application, index)}>
                                        <td>{application.display_name()}</td>
                                        <td>{application.kind_label()}</td>
                                        <td>{format_submitted_at(application.created_at())}</td>
                                        <td class="review-queue-actions">
                                            <button type="button" class="btn btn-secondary" onclick={on_view}>
                                                {"View"}
                                            </button>
                                            <button type="button" class="btn btn-primary" onclick={on_review}>
                                                {"Review"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                }
            }}

            <ApplicationModal
                is_open={viewing.is_some()}
                application={(*viewing).clone()}
                on_close={on_close_view}
            />
            <ApplicationReviewModal
                is_open={reviewing.is_some()}
                application={(*reviewing).clone()}
                on_close={on_close_review}
                on_decided={Some(on_decided)}
            />
            <ConfirmationModal
                is_open={confirmation.is_some()}
                message={(*confirmation).clone().unwrap_or_default()}
                on_close={on_close_confirmation}
            />
        </section>
    }
}

/// Rows are keyed by application id; records without one fall back to their position
fn row_key(application: &Application, index: usize) -> String {
    match application.id() {
        Some(id) if !id.trim().is_empty() => format!("id-{}", id),
        _ => format!("row-{}", index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use shared::{OwnerApplication, ShelterApplication};
    use wasm_bindgen::JsCast;
    use web_sys::HtmlElement;
    use wasm_bindgen_test::*;

    use crate::components::toast::ToastProvider;

    wasm_bindgen_test_configure!(run_in_browser);

    #[function_component(Harness)]
    fn harness() -> Html {
        let applications = vec![
            Application::Owner(OwnerApplication {
                id: Some("owner-1".to_string()),
                full_name: Some("Dana Reyes".to_string()),
                ..OwnerApplication::default()
            }),
            Application::Shelter(ShelterApplication {
                id: Some("shelter-1".to_string()),
                organization_name: Some("Happy Tails Rescue".to_string()),
                ..ShelterApplication::default()
            }),
        ];
        html! {
            <ToastProvider>
                <ReviewQueue {applications} />
            </ToastProvider>
        }
    }

    #[function_component(UnnamedHarness)]
    fn unnamed_harness() -> Html {
        let applications = vec![
            Application::Owner(OwnerApplication::default()),
            Application::Owner(OwnerApplication::default()),
        ];
        html! {
            <ToastProvider>
                <ReviewQueue {applications} />
            </ToastProvider>
        }
    }

    fn click(root: &web_sys::Element, selector: &str) {
        root.query_selector(selector)
            .unwrap()
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
            .click();
    }

    #[test]
    fn test_row_keys_are_unique_without_ids() {
        let unnamed = Application::Owner(OwnerApplication::default());
        let keyed = Application::Owner(OwnerApplication {
            id: Some("owner-1".to_string()),
            ..OwnerApplication::default()
        });
        assert_eq!(row_key(&unnamed, 0), "row-0");
        assert_eq!(row_key(&unnamed, 1), "row-1");
        assert_eq!(row_key(&keyed, 2), "id-owner-1");
    }

    #[wasm_bindgen_test]
    async fn test_records_without_ids_each_get_a_row() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<UnnamedHarness>::with_root(root.clone()).render();
        TimeoutFuture::new(10).await;

        assert_eq!(root.query_selector_all("tbody tr").unwrap().length(), 2);
    }

    #[wasm_bindgen_test]
    async fn test_decision_removes_application_and_confirms() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<Harness>::with_root(root.clone()).render();
        TimeoutFuture::new(10).await;

        assert_eq!(root.query_selector_all("tbody tr").unwrap().length(), 2);

        click(&root, "tbody tr .btn-primary");
        TimeoutFuture::new(10).await;
        click(&root, ".review-approve");
        TimeoutFuture::new(10).await;

        assert_eq!(root.query_selector_all("tbody tr").unwrap().length(), 1);
        assert!(root.query_selector(".review-modal").unwrap().is_none());
        let confirmation = root
            .query_selector(".confirmation-message")
            .unwrap()
            .unwrap()
            .text_content()
            .unwrap_or_default();
        assert_eq!(confirmation, "Dana Reyes has been approved.");

        click(&root, ".confirmation-buttons button");
        TimeoutFuture::new(10).await;
        assert!(root.query_selector(".confirmation-modal").unwrap().is_none());
    }
}
