use shared::{
    document_label, facility_photo_summary, Application, DocumentRef, OwnerApplication,
    ReviewDecision, Severity, ShelterApplication, SubmittedAt,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::detail_field::{DetailField, DocumentImage};
use crate::components::image_viewer_modal::ImageViewerModal;
use crate::config::use_app_config;
use crate::hooks::use_notifier::use_notifier;
use crate::services::date_utils::format_submitted_at;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct ApplicationReviewModalProps {
    pub is_open: bool,
    #[prop_or_default]
    pub application: Option<Application>,
    pub on_close: Callback<()>,
    /// Told `(application id, decision)` once a decision has been recorded
    #[prop_or_default]
    pub on_decided: Option<Callback<(String, ReviewDecision)>>,
}

/// Full application details with Approve/Reject actions.
///
/// Without a configured review API a decision is only announced (toast) and the
/// dialog closes; nothing is persisted. With one, the decision is submitted first
/// and the dialog stays open if the submission fails.
#[function_component(ApplicationReviewModal)]
pub fn application_review_modal(props: &ApplicationReviewModalProps) -> Html {
    let config = use_app_config();
    let notify = use_notifier();
    let submitting = use_state(|| false);
    let selected_image = use_state(|| Option::<AttrValue>::None);

    // Reset state when modal opens
    use_effect_with(props.is_open, {
        let submitting = submitting.clone();
        let selected_image = selected_image.clone();
        move |_| {
            submitting.set(false);
            selected_image.set(None);
            || ()
        }
    });

    let on_decision = {
        let application_id = props
            .application
            .as_ref()
            .and_then(|application| application.id())
            .map(str::to_string);
        let review_client = config.review_client();
        let is_submitting = *submitting;
        let submitting = submitting.clone();
        let notify = notify.clone();
        let on_close = props.on_close.clone();
        let on_decided = props.on_decided.clone();

        Callback::from(move |decision: ReviewDecision| {
            if is_submitting {
                return;
            }

            let Some(client) = review_client.clone() else {
                Logger::info_with_component(
                    "review-modal",
                    &format!("Application {} (not submitted, no review API configured)", decision.past_tense()),
                );
                notify.emit((decision.severity(), decision.notification_message().to_string()));
                if let (Some(on_decided), Some(id)) = (&on_decided, &application_id) {
                    on_decided.emit((id.clone(), decision));
                }
                on_close.emit(());
                return;
            };

            let Some(id) = application_id.clone() else {
                notify.emit((
                    Severity::Error,
                    "Failed to submit review: application has no id".to_string(),
                ));
                return;
            };

            submitting.set(true);
            let submitting = submitting.clone();
            let notify = notify.clone();
            let on_close = on_close.clone();
            let on_decided = on_decided.clone();

            spawn_local(async move {
                Logger::debug_with_component("review-modal", &format!("Submitting {:?} for {}", decision, id));
                match client.submit_review(&id, decision).await {
                    Ok(response) => {
                        let message = response
                            .success_message
                            .unwrap_or_else(|| decision.notification_message().to_string());
                        notify.emit((decision.severity(), message));
                        submitting.set(false);
                        if let Some(on_decided) = on_decided {
                            on_decided.emit((id, decision));
                        }
                        on_close.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component("review-modal", &format!("Review submission failed: {}", e));
                        notify.emit((Severity::Error, format!("Failed to submit review: {}", e)));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    let on_approve = {
        let on_decision = on_decision.clone();
        Callback::from(move |_: MouseEvent| on_decision.emit(ReviewDecision::Approve))
    };

    let on_reject = {
        let on_decision = on_decision.clone();
        Callback::from(move |_: MouseEvent| on_decision.emit(ReviewDecision::Reject))
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let is_submitting = *submitting;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if !is_submitting {
                on_close.emit(());
            }
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_open_document = {
        let selected_image = selected_image.clone();
        let uploads = config.uploads.clone();
        Callback::from(move |document: DocumentRef| {
            selected_image.set(Some(AttrValue::from(uploads.document_url(&document))));
        })
    };

    let on_close_preview = {
        let selected_image = selected_image.clone();
        Callback::from(move |_: ()| selected_image.set(None))
    };

    let application = match (&props.application, props.is_open) {
        (Some(application), true) => application,
        _ => return html! {},
    };

    let details = match application {
        Application::Shelter(shelter) => shelter_review(shelter),
        Application::Owner(owner) => owner_review(owner, &on_open_document),
    };

    html! {
        <div class="review-modal-backdrop" onclick={on_backdrop_click}>
            <div class="review-modal" onclick={on_modal_click}>
                <div class="review-modal-header">
                    <h3 class="review-title">{format!("Review {} Application", application.kind_label())}</h3>
                    <span class="review-subtitle">{application.display_name()}</span>
                </div>

                <div class="review-modal-content">
                    {details}
                </div>

                <div class="review-buttons">
                    <button
                        type="button"
                        class="btn btn-success review-approve"
                        disabled={*submitting}
                        onclick={on_approve}
                    >
                        {if *submitting { "Submitting..." } else { "Approve" }}
                    </button>
                    <button
                        type="button"
                        class="btn btn-danger review-reject"
                        disabled={*submitting}
                        onclick={on_reject}
                    >
                        {"Reject"}
                    </button>
                    <button
                        type="button"
                        class="btn btn-secondary"
                        disabled={*submitting}
                        onclick={on_cancel}
                    >
                        {"Cancel"}
                    </button>
                </div>

                <ImageViewerModal
                    image_url={(*selected_image).clone()}
                    on_close={on_close_preview}
                />
            </div>
        </div>
    }
}

fn shelter_review(shelter: &ShelterApplication) -> Html {
    html! {
        <>
            <section class="review-section">
                <h4>{"Organization Information"}</h4>
                <DetailField label="Organization Name" value={shelter.organization_name.clone()} />
                <DetailField label="Registration Number" value={shelter.registration_number.clone()} />
                <DetailField label="Contact Person" value={shelter.contact_person.clone()} />
                <DetailField label="Email" value={shelter.email.clone()} />
                <DetailField label="Phone" value={shelter.phone.clone()} />
                <DetailField label="Address" value={shelter.address.clone()} />
                <DetailField label="Website" value={shelter.website.clone()} />
            </section>
            <section class="review-section">
                <h4>{"Documents"}</h4>
                <DetailField
                    label="Registration Document"
                    value={Some(document_label(shelter.registration_document.as_ref()).to_string())}
                />
                <DetailField
                    label="Tax Document"
                    value={Some(document_label(shelter.tax_document.as_ref()).to_string())}
                />
                <DetailField
                    label="Facility Photos"
                    value={Some(facility_photo_summary(&shelter.facility_photos))}
                />
            </section>
            <section class="review-section">
                <h4>{"Background"}</h4>
                <p class="review-free-text">{shelter.background.clone().unwrap_or_default()}</p>
            </section>
            {submitted_row(shelter.created_at.as_deref())}
        </>
    }
}

fn owner_review(owner: &OwnerApplication, on_open: &Callback<DocumentRef>) -> Html {
    html! {
        <>
            <section class="review-section">
                <h4>{"Personal Information"}</h4>
                <DetailField label="Full Name" value={owner.full_name.clone()} />
                <DetailField label="Email" value={owner.email.clone()} />
                <DetailField label="Phone" value={owner.phone.clone()} />
                <DetailField label="Address" value={owner.address.clone()} />
                <DetailField label="City" value={owner.city.clone()} />
                <DetailField label="State" value={owner.state.clone()} />
                <DetailField label="Zip Code" value={owner.zip_code.clone()} />
            </section>
            <section class="review-section">
                <h4>{"Emergency Contact"}</h4>
                <DetailField label="Name" value={owner.emergency_contact_name.clone()} />
                <DetailField label="Phone" value={owner.emergency_contact_phone.clone()} />
                <DetailField label="Relationship" value={owner.emergency_contact_relationship.clone()} />
            </section>
            <section class="review-section review-documents">
                <h4>{"Documents"}</h4>
                <DocumentImage
                    label="Government ID"
                    document={owner.government_id.clone()}
                    on_open={on_open.clone()}
                />
                <DocumentImage
                    label="Proof of Residence"
                    document={owner.proof_of_residence.clone()}
                    on_open={on_open.clone()}
                />
            </section>
            <section class="review-section">
                <h4>{"Pet Experience"}</h4>
                <p class="review-free-text">{owner.pet_experience.clone().unwrap_or_default()}</p>
            </section>
            {submitted_row(owner.created_at.as_deref())}
        </>
    }
}

fn submitted_row(created_at: Option<&str>) -> Html {
    let machine = created_at
        .and_then(|raw| SubmittedAt::parse(raw).ok())
        .map(|submitted| submitted.to_rfc3339());

    html! {
        <div class="review-submitted">
            <span class="detail-label">{"Submitted"}</span>
            <time class="detail-value" datetime={machine}>
                {format_submitted_at(created_at)}
            </time>
        </div>
    }
}
