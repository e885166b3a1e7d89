use shared::{document_label, DocumentRef, NO_FILE_CHOSEN};
use yew::prelude::*;

use crate::components::image_viewer_modal::fallback_to_placeholder;
use crate::config::use_app_config;

#[derive(Properties, PartialEq)]
pub struct DetailFieldProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub value: Option<String>,
}

/// One labelled value in an application panel; missing values render empty
#[function_component(DetailField)]
pub fn detail_field(props: &DetailFieldProps) -> Html {
    html! {
        <div class="detail-field">
            <label class="detail-label">{&props.label}</label>
            <div class="detail-value">{props.value.clone().unwrap_or_default()}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DocumentLinkProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub document: Option<DocumentRef>,
    pub on_open: Callback<DocumentRef>,
}

/// Document row showing the file name; activating it asks the parent to preview the file
#[function_component(DocumentLink)]
pub fn document_link(props: &DocumentLinkProps) -> Html {
    let document = props.document.clone().filter(|doc| !doc.is_empty());

    let onclick = {
        let document = document.clone();
        let on_open = props.on_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(document) = document.clone() {
                on_open.emit(document);
            }
        })
    };

    html! {
        <div class="document-row">
            <span class="document-kind">{&props.label}</span>
            <button
                type="button"
                class="document-link"
                disabled={document.is_none()}
                {onclick}
            >
                {document_label(document.as_ref())}
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DocumentImageProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub document: Option<DocumentRef>,
    pub on_open: Callback<DocumentRef>,
}

/// Document rendered inline as an image; clicking it opens the full-screen preview
#[function_component(DocumentImage)]
pub fn document_image(props: &DocumentImageProps) -> Html {
    let config = use_app_config();
    let document = props.document.clone().filter(|doc| !doc.is_empty());

    let Some(document) = document else {
        return html! {
            <div class="document-image empty">
                <span class="document-kind">{&props.label}</span>
                <span class="document-missing">{NO_FILE_CHOSEN}</span>
            </div>
        };
    };

    let onclick = {
        let document = document.clone();
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(document.clone()))
    };
    let src = config.uploads.document_url(&document);

    html! {
        <figure class="document-image">
            <img
                key={src.clone()}
                {src}
                alt={props.label.clone()}
                {onclick}
                onerror={fallback_to_placeholder(config.placeholder_image.clone(), "document-image")}
            />
            <figcaption>
                <span class="document-kind">{&props.label}</span>
                <span class="document-name">{document.label().to_string()}</span>
            </figcaption>
        </figure>
    }
}
