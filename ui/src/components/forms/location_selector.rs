use dioxus::prelude::*;

use crate::components::input::SelectInput;
use crate::features::location::{LocationHierarchy, LocationLevel, LocationSelection};
use crate::features::registration::RiderField;
use crate::utils::validation::{FieldErrors, FormField};

#[derive(Props, PartialEq, Clone)]
pub struct LocationSelectorProps {
    pub selection: LocationSelection,
    pub errors: FieldErrors<RiderField>,
    pub disabled: bool,
    pub on_select: EventHandler<(LocationLevel, String)>,
}

/// County, sub-county, ward and stage dropdowns. Each one stays disabled
/// until the level above it holds a known value.
#[component]
pub fn LocationSelector(props: LocationSelectorProps) -> Element {
    let hierarchy = LocationHierarchy::embedded();
    let on_select = props.on_select;

    rsx! {
        div {
            class: "location-grid",
            for level in LocationLevel::ALL {
                SelectInput {
                    key: "{level.placeholder()}",
                    name: RiderField::from(level).name().to_string(),
                    label: level.label().to_string(),
                    options: hierarchy.options(&props.selection, level),
                    selected: props.selection.get(level).to_string(),
                    placeholder: level.placeholder().to_string(),
                    disabled: props.disabled || !hierarchy.is_selectable(&props.selection, level),
                    error: props.errors.message(RiderField::from(level)),
                    on_change: move |value: String| on_select.call((level, value)),
                }
            }
        }
    }
}
