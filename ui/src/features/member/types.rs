use serde::{Deserialize, Serialize};

use crate::features::registration::{RiderType, RiderTypes};
use crate::features::submission::Submission;
use crate::services::actions::ActionOutcome;
use crate::utils::validation::{FieldErrors, FormField};
use crate::console_warn;

/// A stage member entered from the stage form's modal
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MemberDraft {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub id_number: String,
    pub rider_type: RiderTypes,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum MemberField {
    FirstName,
    LastName,
    PhoneNumber,
    IdNumber,
    RiderType,
}

impl FormField for MemberField {
    fn name(&self) -> &'static str {
        match self {
            MemberField::FirstName => "firstName",
            MemberField::LastName => "lastName",
            MemberField::PhoneNumber => "phoneNumber",
            MemberField::IdNumber => "idNumber",
            MemberField::RiderType => "riderType",
        }
    }
}

#[derive(Clone, Debug)]
pub enum MemberAction {
    SetFirstName(String),
    SetLastName(String),
    SetPhoneNumber(String),
    SetIdNumber(String),
    ToggleRiderType(RiderType, bool),
    SetFieldErrors(FieldErrors<MemberField>),
    SubmitStarted,
    SubmitFinished(Option<ActionOutcome>),
    ClearOutcome,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemberFormState {
    pub draft: MemberDraft,
    pub errors: FieldErrors<MemberField>,
    pub submission: Submission,
}

impl MemberFormState {
    pub fn reduce_in_place(&mut self, action: MemberAction) {
        match action {
            MemberAction::SetFirstName(value) => {
                self.draft.first_name = value;
                self.errors.clear(MemberField::FirstName);
            }
            MemberAction::SetLastName(value) => {
                self.draft.last_name = value;
                self.errors.clear(MemberField::LastName);
            }
            MemberAction::SetPhoneNumber(value) => {
                self.draft.phone_number = value;
                self.errors.clear(MemberField::PhoneNumber);
            }
            MemberAction::SetIdNumber(value) => {
                self.draft.id_number = value;
                self.errors.clear(MemberField::IdNumber);
            }
            MemberAction::ToggleRiderType(rider_type, checked) => {
                self.draft.rider_type.toggle(rider_type, checked);
                self.errors.clear(MemberField::RiderType);
            }
            MemberAction::SetFieldErrors(errors) => {
                self.errors = errors;
            }
            MemberAction::SubmitStarted => {
                if !self.submission.begin() {
                    console_warn!("[MEMBER] Submit ignored, one is already pending");
                }
            }
            MemberAction::SubmitFinished(outcome) => {
                // Clear the draft so the next member can be entered
                if matches!(outcome, Some(ActionOutcome::Success(_))) {
                    self.draft = MemberDraft::default();
                }
                self.submission.finish(outcome);
            }
            MemberAction::ClearOutcome => {
                self.submission.clear_outcome();
            }
        }
    }

    pub fn fields_disabled(&self) -> bool {
        self.submission.is_pending()
    }
}
