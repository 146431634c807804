use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct PendingIndicatorProps {
    pub pending: bool,
    pub message: String,
}

/// Shown under a form while its action is in flight
#[component]
pub fn PendingIndicator(props: PendingIndicatorProps) -> Element {
    if !props.pending {
        return rsx! {};
    }

    rsx! {
        div {
            class: "pending-indicator",
            role: "status",
            "⏳ {props.message}"
        }
    }
}
