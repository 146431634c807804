use dioxus::prelude::*;

use crate::components::display::{FormErrorMessage, FormSuccess, PendingIndicator};
use crate::components::forms::RiderTypeSelector;
use crate::components::input::{InputType, ValidatedInput};
use crate::features::member::*;
use crate::features::registration::RiderType;
use crate::services::actions::HttpFormActions;
use crate::utils::validation::FormField;

/// Adds members to a stage from inside the stage form's modal.
/// The form clears after each successful add.
#[component]
pub fn AddMemberForm() -> Element {
    let actions = use_context::<HttpFormActions>();
    let mut state = use_signal(MemberFormState::default);

    let dispatch = EventHandler::new(move |action: MemberAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    let form = state();
    let disabled = form.fields_disabled();

    rsx! {
        div {
            class: "boda-form member-form",

            h3 { class: "form-title", "Add Stage Member" }

            div {
                class: "field-grid",
                ValidatedInput {
                    name: format!("member-{}", MemberField::FirstName.name()),
                    label: "First Name".to_string(),
                    value: form.draft.first_name.clone(),
                    disabled: disabled,
                    error: form.errors.message(MemberField::FirstName),
                    on_change: move |v: String| dispatch.call(MemberAction::SetFirstName(v)),
                }
                ValidatedInput {
                    name: format!("member-{}", MemberField::LastName.name()),
                    label: "Last Name".to_string(),
                    value: form.draft.last_name.clone(),
                    disabled: disabled,
                    error: form.errors.message(MemberField::LastName),
                    on_change: move |v: String| dispatch.call(MemberAction::SetLastName(v)),
                }
            }

            ValidatedInput {
                name: format!("member-{}", MemberField::PhoneNumber.name()),
                label: "Phone Number".to_string(),
                value: form.draft.phone_number.clone(),
                placeholder: "0712345678".to_string(),
                input_type: InputType::Tel,
                disabled: disabled,
                error: form.errors.message(MemberField::PhoneNumber),
                on_change: move |v: String| dispatch.call(MemberAction::SetPhoneNumber(v)),
            }
            ValidatedInput {
                name: format!("member-{}", MemberField::IdNumber.name()),
                label: "ID Number".to_string(),
                value: form.draft.id_number.clone(),
                placeholder: "12345678".to_string(),
                disabled: disabled,
                error: form.errors.message(MemberField::IdNumber),
                on_change: move |v: String| dispatch.call(MemberAction::SetIdNumber(v)),
            }

            RiderTypeSelector {
                id_prefix: "member".to_string(),
                selected: form.draft.rider_type.clone(),
                disabled: disabled,
                error: form.errors.message(MemberField::RiderType),
                on_toggle: move |(rider_type, checked): (RiderType, bool)| {
                    dispatch.call(MemberAction::ToggleRiderType(rider_type, checked))
                },
            }

            FormSuccess { message: form.submission.success_message() }
            FormErrorMessage { message: form.submission.error_message() }
            PendingIndicator { pending: disabled, message: "Adding member...".to_string() }

            button {
                class: "submit-button",
                r#type: "button",
                disabled: disabled,
                onclick: move |_| {
                    let draft = state().draft;
                    let actions = actions.clone();
                    spawn(async move {
                        submit_member(
                            draft,
                            &actions,
                            move || state.peek().submission.is_pending(),
                            |action| dispatch.call(action),
                        )
                        .await;
                    });
                },
                "Add Member"
            }
        }
    }
}
