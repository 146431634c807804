use dioxus::prelude::*;

use crate::components::display::{FormErrorMessage, FormSuccess, Modal, PendingIndicator};
use crate::components::forms::AddMemberForm;
use crate::components::input::ValidatedInput;
use crate::features::stage::*;
use crate::services::actions::HttpFormActions;
use crate::services::config::AppConfig;
use crate::utils::validation::FormField;

#[cfg(feature = "web")]
use crate::services::geolocation::BrowserGeolocation;
#[cfg(not(feature = "web"))]
use crate::services::geolocation::UnsupportedGeolocation;

#[component]
pub fn AddStageForm() -> Element {
    let actions = use_context::<HttpFormActions>();
    let config = use_context::<AppConfig>();
    let nav = navigator();

    let mut state = use_signal(StageFormState::default);

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: StageAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    let form = state();
    let disabled = form.fields_disabled();
    let coordinates_locked = form.coordinates_locked();

    rsx! {
        div {
            class: "boda-form stage-form",

            h2 {
                class: "form-title",
                "Add Stage & Members"
            }

            ValidatedInput {
                name: StageField::StageName.name().to_string(),
                label: "Stage Name".to_string(),
                value: form.draft.stage_name.clone(),
                disabled: disabled,
                error: form.errors.message(StageField::StageName),
                on_change: move |v: String| dispatch.call(StageAction::SetStageName(v)),
            }

            div {
                class: "field-grid",
                ValidatedInput {
                    name: StageField::County.name().to_string(),
                    label: "County".to_string(),
                    value: form.draft.county.clone(),
                    disabled: disabled,
                    error: form.errors.message(StageField::County),
                    on_change: move |v: String| dispatch.call(StageAction::SetCounty(v)),
                }
                ValidatedInput {
                    name: StageField::SubCounty.name().to_string(),
                    label: "Sub County".to_string(),
                    value: form.draft.sub_county.clone(),
                    disabled: disabled,
                    error: form.errors.message(StageField::SubCounty),
                    on_change: move |v: String| dispatch.call(StageAction::SetSubCounty(v)),
                }
            }

            ValidatedInput {
                name: StageField::Ward.name().to_string(),
                label: "Ward".to_string(),
                value: form.draft.ward.clone(),
                disabled: disabled,
                error: form.errors.message(StageField::Ward),
                on_change: move |v: String| dispatch.call(StageAction::SetWard(v)),
            }

            button {
                class: "location-button",
                r#type: "button",
                disabled: form.location_button_disabled() || disabled,
                onclick: move |_| {
                    spawn(async move {
                        #[cfg(feature = "web")]
                        let provider = BrowserGeolocation;
                        #[cfg(not(feature = "web"))]
                        let provider = UnsupportedGeolocation;

                        capture_stage_location(&provider, |action| dispatch.call(action)).await;
                    });
                },
                "{form.location_button_label()}"
            }

            div {
                class: "field-grid",
                ValidatedInput {
                    name: StageField::Longitude.name().to_string(),
                    label: "Longitude".to_string(),
                    value: form.draft.longitude.clone(),
                    disabled: coordinates_locked,
                    error: form.errors.message(StageField::Longitude),
                    on_change: move |v: String| dispatch.call(StageAction::SetLongitude(v)),
                }
                ValidatedInput {
                    name: StageField::Latitude.name().to_string(),
                    label: "Latitude".to_string(),
                    value: form.draft.latitude.clone(),
                    disabled: coordinates_locked,
                    error: form.errors.message(StageField::Latitude),
                    on_change: move |v: String| dispatch.call(StageAction::SetLatitude(v)),
                }
            }

            if !form.errors.is_empty() {
                if let Some(summary) = get_stage_validation_message(&form.draft) {
                    p { class: "validation-summary", "{summary}" }
                }
            }

            FormSuccess { message: form.submission.success_message() }
            FormErrorMessage { message: form.submission.error_message() }
            PendingIndicator { pending: disabled, message: "Saving your stage...".to_string() }

            div {
                class: "button-section",
                button {
                    class: "submit-button",
                    r#type: "button",
                    disabled: disabled,
                    onclick: move |_| {
                        let draft = state().draft;
                        let actions = actions.clone();
                        let destination = config.routes.profile.clone();
                        spawn(async move {
                            submit_stage(
                                draft,
                                &actions,
                                &nav,
                                &destination,
                                move || state.peek().submission.is_pending(),
                                |action| dispatch.call(action),
                            )
                            .await;
                        });
                    },
                    "Add your Stage"
                }
            }
        }

        div {
            class: "button-section members-entry",
            button {
                class: "secondary-button",
                r#type: "button",
                onclick: move |_| dispatch.call(StageAction::SetMemberModalOpen(true)),
                "Add Stage Members"
            }
        }

        Modal {
            is_open: form.member_modal_open,
            on_close: move |_: ()| dispatch.call(StageAction::SetMemberModalOpen(false)),
            AddMemberForm {}
        }
    }
}
