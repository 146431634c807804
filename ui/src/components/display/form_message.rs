use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct FormMessageProps {
    /// Nothing is rendered for an empty message
    pub message: String,
}

#[component]
pub fn FormSuccess(props: FormMessageProps) -> Element {
    if props.message.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "form-message success",
            style: "color: #047857; background-color: #d1fae5; border: 1px solid #10b981; padding: 8px 12px; border-radius: 6px;",
            "✓ {props.message}"
        }
    }
}

#[component]
pub fn FormErrorMessage(props: FormMessageProps) -> Element {
    if props.message.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "form-message error",
            style: "color: #b91c1c; background-color: #fef2f2; border: 1px solid #ef4444; padding: 8px 12px; border-radius: 6px;",
            "⚠ {props.message}"
        }
    }
}
