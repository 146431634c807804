use dioxus::prelude::*;

use crate::utils::validation::{field_class, field_style};

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Password,
    Tel,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Tel => "tel",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub name: String,
    pub label: String,
    pub value: String,
    #[props(default)]
    pub placeholder: String,
    #[props(default = InputType::Text)]
    pub input_type: InputType,
    pub disabled: bool,
    /// Empty when the field is valid
    pub error: String,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    rsx! {
        div {
            class: "input-section",
            label {
                class: "input-label",
                r#for: "{props.name}",
                "{props.label}"
            }
            input {
                id: "{props.name}",
                name: "{props.name}",
                class: field_class(&props.error),
                style: field_style(&props.error),
                r#type: "{props.input_type.as_str()}",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                autocomplete: "off",
                disabled: props.disabled,
                oninput: move |event| props.on_change.call(event.value())
            }
            FieldErrorText { message: props.error.clone() }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FieldErrorTextProps {
    pub message: String,
}

#[component]
pub fn FieldErrorText(props: FieldErrorTextProps) -> Element {
    if props.message.is_empty() {
        return rsx! {};
    }

    rsx! {
        p {
            class: "field-error",
            style: "color: #ef4444; font-size: 0.85rem; margin-top: 4px;",
            "{props.message}"
        }
    }
}
