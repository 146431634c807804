use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct ModalProps {
    pub is_open: bool,
    pub on_close: EventHandler<()>,
    pub children: Element,
}

/// Centered overlay. Clicking the backdrop or the close button closes it.
#[component]
pub fn Modal(props: ModalProps) -> Element {
    if !props.is_open {
        return rsx! {};
    }

    let on_close = props.on_close;

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-content",
                role: "dialog",
                onclick: move |evt| evt.stop_propagation(),
                button {
                    class: "modal-close",
                    r#type: "button",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
                div {
                    class: "modal-body",
                    {props.children}
                }
            }
        }
    }
}
