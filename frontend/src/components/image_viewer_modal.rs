use web_sys::HtmlImageElement;
use yew::prelude::*;

use crate::config::use_app_config;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct ImageViewerModalProps {
    /// `None` keeps the overlay closed
    #[prop_or_default]
    pub image_url: Option<AttrValue>,
    pub on_close: Callback<()>,
}

/// Full-screen image overlay. Used by every dialog that previews a document.
#[function_component(ImageViewerModal)]
pub fn image_viewer_modal(props: &ImageViewerModalProps) -> Html {
    let config = use_app_config();

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_image_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_link_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_image_error = fallback_to_placeholder(config.placeholder_image.clone(), "image-viewer");

    let Some(image_url) = props.image_url.clone() else {
        return html! {};
    };

    html! {
        <div class="image-viewer-backdrop" onclick={on_backdrop_click}>
            <button
                type="button"
                class="image-viewer-close"
                aria-label="Close preview"
                onclick={on_close_click}
            >
                {"✕"}
            </button>
            <a
                class="image-viewer-original"
                href={image_url.clone()}
                target="_blank"
                rel="noopener noreferrer"
                onclick={on_link_click}
            >
                {"Open original"}
            </a>
            <img
                key={image_url.to_string()}
                class="image-viewer-image"
                src={image_url}
                alt="Document preview"
                onclick={on_image_click}
                onerror={on_image_error}
            />
        </div>
    }
}

/// `onerror` handler that swaps a broken image for the placeholder and logs it
pub fn fallback_to_placeholder(placeholder: AttrValue, component: &'static str) -> Callback<Event> {
    Callback::from(move |e: Event| {
        let image: HtmlImageElement = e.target_unchecked_into();
        // Swap only once so a broken placeholder cannot loop
        if image.has_attribute("data-fallback") {
            return;
        }
        Logger::warn_with_component(
            component,
            &format!("Failed to load {}, showing placeholder", image.src()),
        );
        if let Err(e) = image.set_attribute("data-fallback", "true") {
            Logger::warn_with_component(
                component,
                &format!("Cannot mark image as replaced ({:?}), keeping original source", e),
            );
            return;
        }
        image.set_src(&placeholder);
    })
}
