use gloo::timers::callback::Timeout;
use shared::Severity;
use yew::prelude::*;

use crate::config::use_app_config;
use crate::hooks::use_notifier::{Notifier, Toast, ToastAction, ToastQueue};

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Html,
}

/// Owns the toast queue and renders it above the page content
#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let config = use_app_config();
    let queue = use_reducer(ToastQueue::default);
    let notifier = Notifier::new(queue.dispatcher());

    html! {
        <ContextProvider<Notifier> context={notifier.clone()}>
            {props.children.clone()}
            <div class="toast-stack" aria-live="polite">
                {for queue.toasts().iter().map(|toast| {
                    let on_dismiss = {
                        let notifier = notifier.clone();
                        let id = toast.id;
                        Callback::from(move |_: ()| notifier.dismiss(id))
                    };
                    html! {
                        <ToastItem
                            key={toast.id}
                            toast={toast.clone()}
                            timeout_ms={config.toast_timeout_ms}
                            {on_dismiss}
                        />
                    }
                })}
            </div>
        </ContextProvider<Notifier>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    timeout_ms: u32,
    on_dismiss: Callback<()>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    // Timer is dropped (and cancelled) when the toast unmounts
    use_effect_with(props.toast.id, {
        let on_dismiss = props.on_dismiss.clone();
        let timeout_ms = props.timeout_ms;
        move |_| {
            let timeout = Timeout::new(timeout_ms, move || on_dismiss.emit(()));
            move || drop(timeout)
        }
    });

    let on_click = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    let icon = match props.toast.severity {
        Severity::Success => "✅",
        Severity::Error => "❌",
        Severity::Info => "ℹ️",
    };

    html! {
        <div class={props.toast.severity.css_class()} role="status" onclick={on_click}>
            <span class="toast-icon">{icon}</span>
            <span class="toast-message">{&props.toast.message}</span>
        </div>
    }
}
