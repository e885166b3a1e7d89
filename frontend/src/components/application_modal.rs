use shared::{facility_photo_summary, Application, DocumentRef, OwnerApplication, ShelterApplication};
use yew::prelude::*;

use crate::components::detail_field::{DetailField, DocumentLink};
use crate::components::image_viewer_modal::ImageViewerModal;
use crate::config::use_app_config;

#[derive(Properties, PartialEq)]
pub struct ApplicationModalProps {
    pub is_open: bool,
    #[prop_or_default]
    pub application: Option<Application>,
    pub on_close: Callback<()>,
}

/// Read-only view of an application with document previews.
///
/// Approve/Reject are shown disabled here; decisions are made in `ApplicationReviewModal`.
#[function_component(ApplicationModal)]
pub fn application_modal(props: &ApplicationModalProps) -> Html {
    let config = use_app_config();
    let selected_image = use_state(|| Option::<AttrValue>::None);

    // Never reopen with a stale preview
    use_effect_with(props.is_open, {
        let selected_image = selected_image.clone();
        move |_| {
            selected_image.set(None);
            || ()
        }
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

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    let application = match (&props.application, props.is_open) {
        (Some(application), true) => application,
        _ => return html! {},
    };

    let body = match application {
        Application::Owner(owner) => owner_details(owner, &on_open_document),
        Application::Shelter(shelter) => shelter_details(shelter, &on_open_document),
    };

    html! {
        <div class="application-modal-backdrop" onclick={on_backdrop_click}>
            <div class="application-modal" onclick={on_modal_click}>
                <div class="application-modal-header">
                    <h3 class="application-title">
                        {format!("{} Verification", application.kind_label())}
                    </h3>
                    <span class="application-subtitle">{application.display_name()}</span>
                </div>

                {body}

                <div class="application-actions">
                    <button
                        type="button"
                        class="btn btn-success"
                        disabled=true
                        title="Decisions are recorded from the review dialog"
                    >
                        {"Approve"}
                    </button>
                    <button
                        type="button"
                        class="btn btn-danger"
                        disabled=true
                        title="Decisions are recorded from the review dialog"
                    >
                        {"Reject"}
                    </button>
                    <button type="button" class="btn btn-secondary" onclick={on_close_click}>
                        {"Close"}
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

fn owner_details(owner: &OwnerApplication, on_open: &Callback<DocumentRef>) -> Html {
    html! {
        <>
            <div class="application-columns">
                <section class="application-panel">
                    <h4>{"Personal Information"}</h4>
                    <DetailField label="Full Name" value={owner.full_name.clone()} />
                    <DetailField label="Email" value={owner.email.clone()} />
                    <DetailField label="Phone" value={owner.phone.clone()} />
                    <DetailField label="Address" value={owner.address.clone()} />
                    <DetailField label="City" value={owner.city.clone()} />
                    <DetailField label="State" value={owner.state.clone()} />
                    <DetailField label="Zip Code" value={owner.zip_code.clone()} />
                </section>
                <section class="application-panel">
                    <h4>{"Emergency Contact"}</h4>
                    <DetailField label="Name" value={owner.emergency_contact_name.clone()} />
                    <DetailField label="Phone" value={owner.emergency_contact_phone.clone()} />
                    <DetailField label="Relationship" value={owner.emergency_contact_relationship.clone()} />
                </section>
            </div>
            <section class="application-documents">
                <h4>{"Documents"}</h4>
                <DocumentLink
                    label="Government ID"
                    document={owner.government_id.clone()}
                    on_open={on_open.clone()}
                />
                <DocumentLink
                    label="Proof of Residence"
                    document={owner.proof_of_residence.clone()}
                    on_open={on_open.clone()}
                />
            </section>
        </>
    }
}

fn shelter_details(shelter: &ShelterApplication, on_open: &Callback<DocumentRef>) -> Html {
    html! {
        <>
            <div class="application-columns">
                <section class="application-panel">
                    <h4>{"Organization"}</h4>
                    <DetailField label="Organization Name" value={shelter.organization_name.clone()} />
                    <DetailField label="Registration Number" value={shelter.registration_number.clone()} />
                    <DetailField label="Website" value={shelter.website.clone()} />
                </section>
                <section class="application-panel">
                    <h4>{"Contact"}</h4>
                    <DetailField label="Contact Person" value={shelter.contact_person.clone()} />
                    <DetailField label="Email" value={shelter.email.clone()} />
                    <DetailField label="Phone" value={shelter.phone.clone()} />
                    <DetailField label="Address" value={shelter.address.clone()} />
                </section>
            </div>
            <section class="application-documents">
                <h4>{"Documents"}</h4>
                <DocumentLink
                    label="Registration Document"
                    document={shelter.registration_document.clone()}
                    on_open={on_open.clone()}
                />
                <DocumentLink
                    label="Tax Document"
                    document={shelter.tax_document.clone()}
                    on_open={on_open.clone()}
                />
                <DetailField
                    label="Facility Photos"
                    value={Some(facility_photo_summary(&shelter.facility_photos))}
                />
            </section>
        </>
    }
}
