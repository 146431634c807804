use dioxus::prelude::*;

use crate::components::input::{CheckboxInput, FieldErrorText};
use crate::features::registration::{RiderType, RiderTypes};

#[derive(Props, PartialEq, Clone)]
pub struct RiderTypeSelectorProps {
    /// Prefix for checkbox ids, so two selectors can share a page
    pub id_prefix: String,
    pub selected: RiderTypes,
    pub disabled: bool,
    pub error: String,
    pub on_toggle: EventHandler<(RiderType, bool)>,
}

#[component]
pub fn RiderTypeSelector(props: RiderTypeSelectorProps) -> Element {
    let on_toggle = props.on_toggle;

    rsx! {
        div {
            class: "input-section",
            span {
                class: "input-label",
                "Mwenye Pikipiki/Mwendeshaji/Mechanic"
            }
            div {
                class: "rider-type-grid",
                for rider_type in RiderType::ALL {
                    CheckboxInput {
                        key: "{rider_type.id()}",
                        id: format!("{}-{}", props.id_prefix, rider_type.id()),
                        label: rider_type.label().to_string(),
                        checked: props.selected.contains(rider_type),
                        disabled: props.disabled,
                        on_change: move |checked: bool| on_toggle.call((rider_type, checked)),
                    }
                }
            }
            FieldErrorText { message: props.error.clone() }
        }
    }
}
