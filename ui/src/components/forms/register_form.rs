use dioxus::prelude::*;

use crate::components::display::{FormErrorMessage, FormSuccess, PendingIndicator};
use crate::components::forms::{LocationSelector, RiderTypeSelector};
use crate::components::input::{CheckboxInput, FieldErrorText, InputType, ValidatedInput};
use crate::features::location::{LocationHierarchy, LocationLevel};
use crate::features::registration::*;
use crate::services::actions::HttpFormActions;
use crate::services::config::AppConfig;
use crate::utils::validation::FormField;

/// Rider sign-up with the cascading location picker. Routes to the login
/// page once the account exists.
#[component]
pub fn RegisterForm() -> Element {
    let actions = use_context::<HttpFormActions>();
    let config = use_context::<AppConfig>();
    let nav = navigator();

    let mut state = use_signal(RegisterFormState::default);

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: RegisterAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    let form = state();
    let disabled = form.fields_disabled();

    rsx! {
        div {
            class: "boda-form register-form",

            div {
                class: "field-grid",
                ValidatedInput {
                    name: RiderField::FirstName.name().to_string(),
                    label: "Jina la kwanza".to_string(),
                    value: form.draft.first_name.clone(),
                    placeholder: "John".to_string(),
                    disabled: disabled,
                    error: form.errors.message(RiderField::FirstName),
                    on_change: move |v: String| dispatch.call(RegisterAction::SetFirstName(v)),
                }
                ValidatedInput {
                    name: RiderField::LastName.name().to_string(),
                    label: "Jina la Pili".to_string(),
                    value: form.draft.last_name.clone(),
                    placeholder: "Doe".to_string(),
                    disabled: disabled,
                    error: form.errors.message(RiderField::LastName),
                    on_change: move |v: String| dispatch.call(RegisterAction::SetLastName(v)),
                }
                ValidatedInput {
                    name: RiderField::Username.name().to_string(),
                    label: "Username".to_string(),
                    value: form.draft.username.clone(),
                    placeholder: "johndoe".to_string(),
                    disabled: disabled,
                    error: form.errors.message(RiderField::Username),
                    on_change: move |v: String| dispatch.call(RegisterAction::SetUsername(v)),
                }
                ValidatedInput {
                    name: RiderField::PhoneNumber.name().to_string(),
                    label: "Nambari ya Simu".to_string(),
                    value: form.draft.phone_number.clone(),
                    placeholder: "0712345678".to_string(),
                    input_type: InputType::Tel,
                    disabled: disabled,
                    error: form.errors.message(RiderField::PhoneNumber),
                    on_change: move |v: String| dispatch.call(RegisterAction::SetPhoneNumber(v)),
                }
            }

            div {
                class: "field-grid",
                ValidatedInput {
                    name: RiderField::IdNumber.name().to_string(),
                    label: "Nambari ya Kipande".to_string(),
                    value: form.draft.id_number.clone(),
                    placeholder: "12345678".to_string(),
                    disabled: disabled,
                    error: form.errors.message(RiderField::IdNumber),
                    on_change: move |v: String| dispatch.call(RegisterAction::SetIdNumber(v)),
                }
                ValidatedInput {
                    name: RiderField::BikeNumber.name().to_string(),
                    label: "Nambari ya PikiPiki".to_string(),
                    value: form.draft.bike_number.clone(),
                    placeholder: "KMWT1234".to_string(),
                    disabled: disabled,
                    error: form.errors.message(RiderField::BikeNumber),
                    on_change: move |v: String| dispatch.call(RegisterAction::SetBikeNumber(v)),
                }
            }

            hr { class: "form-separator" }

            LocationSelector {
                selection: form.draft.location.clone(),
                errors: form.errors.clone(),
                disabled: disabled,
                on_select: move |(level, value): (LocationLevel, String)| {
                    dispatch.call(RegisterAction::SelectLocation(level, value))
                },
            }

            RiderTypeSelector {
                id_prefix: "register".to_string(),
                selected: form.draft.rider_type.clone(),
                disabled: disabled,
                error: form.errors.message(RiderField::RiderType),
                on_toggle: move |(rider_type, checked): (RiderType, bool)| {
                    dispatch.call(RegisterAction::ToggleRiderType(rider_type, checked))
                },
            }

            ValidatedInput {
                name: RiderField::Password.name().to_string(),
                label: "Password".to_string(),
                value: form.draft.password.clone(),
                placeholder: "******".to_string(),
                input_type: InputType::Password,
                disabled: disabled,
                error: form.errors.message(RiderField::Password),
                on_change: move |v: String| dispatch.call(RegisterAction::SetPassword(v)),
            }

            div {
                class: "input-section",
                CheckboxInput {
                    id: "terms".to_string(),
                    label: "Nakubaliana na Terms and Conditions".to_string(),
                    checked: form.draft.terms,
                    disabled: disabled,
                    on_change: move |accepted: bool| dispatch.call(RegisterAction::SetTerms(accepted)),
                }
                FieldErrorText { message: form.errors.message(RiderField::Terms) }
            }

            FormSuccess { message: form.submission.success_message() }
            FormErrorMessage { message: form.submission.error_message() }
            PendingIndicator { pending: disabled, message: "Creating your account...".to_string() }

            div {
                class: "button-section",
                button {
                    class: "submit-button",
                    r#type: "button",
                    disabled: disabled,
                    onclick: move |_| {
                        let draft = state().draft;
                        let actions = actions.clone();
                        let destination = config.routes.login.clone();
                        spawn(async move {
                            submit_registration(
                                draft,
                                LocationHierarchy::embedded(),
                                &actions,
                                &nav,
                                &destination,
                                move || state.peek().submission.is_pending(),
                                |action| dispatch.call(action),
                            )
                            .await;
                        });
                    },
                    "Tengeneza Akaunti Yangu"
                }
            }
        }
    }
}
