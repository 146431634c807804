use dioxus::prelude::*;

use super::validated_input::FieldErrorText;
use crate::utils::validation::{field_class, field_style};

#[derive(Props, PartialEq, Clone)]
pub struct SelectInputProps {
    pub name: String,
    pub label: String,
    pub options: Vec<String>,
    pub selected: String,
    pub placeholder: String,
    pub disabled: bool,
    pub error: String,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn SelectInput(props: SelectInputProps) -> Element {
    let selected = props.selected.clone();
    let on_change = props.on_change;

    rsx! {
        div {
            class: "input-section",
            label {
                class: "input-label",
                r#for: "{props.name}",
                "{props.label}"
            }
            select {
                id: "{props.name}",
                name: "{props.name}",
                class: field_class(&props.error),
                style: field_style(&props.error),
                value: "{selected}",
                disabled: props.disabled,
                onchange: move |evt| {
                    on_change.call(evt.value());
                },
                option {
                    value: "",
                    disabled: true,
                    selected: selected.is_empty(),
                    "{props.placeholder}"
                }
                for choice in props.options.iter() {
                    option {
                        key: "{choice}",
                        value: "{choice}",
                        selected: *choice == selected,
                        "{choice}"
                    }
                }
            }
            FieldErrorText { message: props.error.clone() }
        }
    }
}
