use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmationModalProps {
    pub is_open: bool,
    pub message: AttrValue,
    pub on_close: Callback<()>,
}

#[function_component(ConfirmationModal)]
pub fn confirmation_modal(props: &ConfirmationModalProps) -> Html {
    let on_ok_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="confirmation-modal-backdrop">
            <div class="confirmation-modal" role="alertdialog">
                <p class="confirmation-message">{&props.message}</p>
                <div class="confirmation-buttons">
                    <button type="button" class="btn btn-primary" onclick={on_ok_click}>
                        {"OK"}
                    </button>
                </div>
            </div>
        </div>
    }
}
