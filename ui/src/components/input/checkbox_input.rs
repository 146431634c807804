use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct CheckboxInputProps {
    pub id: String,
    pub label: String,
    pub checked: bool,
    pub disabled: bool,
    pub on_change: EventHandler<bool>,
}

#[component]
pub fn CheckboxInput(props: CheckboxInputProps) -> Element {
    let checked = props.checked;
    let on_change = props.on_change;

    rsx! {
        div {
            class: "checkbox-row",
            input {
                id: "{props.id}",
                r#type: "checkbox",
                checked: checked,
                disabled: props.disabled,
                onchange: move |evt| on_change.call(evt.checked())
            }
            label {
                class: "checkbox-label",
                r#for: "{props.id}",
                "{props.label}"
            }
        }
    }
}
