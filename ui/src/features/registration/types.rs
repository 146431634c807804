// Core types for rider registration - no dioxus imports needed here
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::features::location::{LocationLevel, LocationSelection};
use crate::features::submission::Submission;
use crate::services::actions::ActionOutcome;
use crate::utils::validation::{FieldErrors, FormField};
use crate::console_warn;

/// Roles a rider can register under
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RiderType {
    MwenyePikipiki,
    Mwendeshaji,
    Mechanic,
}

impl RiderType {
    pub const ALL: [RiderType; 3] = [
        RiderType::MwenyePikipiki,
        RiderType::Mwendeshaji,
        RiderType::Mechanic,
    ];

    pub fn id(self) -> &'static str {
        match self {
            RiderType::MwenyePikipiki => "mwenyepikipiki",
            RiderType::Mwendeshaji => "mwendeshaji",
            RiderType::Mechanic => "mechanic",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiderType::MwenyePikipiki => "Mwenye Pikipiki",
            RiderType::Mwendeshaji => "Mwendeshaji",
            RiderType::Mechanic => "Mechanic",
        }
    }
}

/// Selected roles. A set, so toggling an id on twice keeps one copy.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct RiderTypes(BTreeSet<RiderType>);

impl RiderTypes {
    pub fn toggle(&mut self, rider_type: RiderType, checked: bool) {
        if checked {
            self.0.insert(rider_type);
        } else {
            self.0.remove(&rider_type);
        }
    }

    pub fn contains(&self, rider_type: RiderType) -> bool {
        self.0.contains(&rider_type)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = RiderType> + '_ {
        self.0.iter().copied()
    }
}

/// Registration payload sent to the rider-registration action
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiderDraft {
    pub first_name: String,
    pub last_name: String,
    #[serde(flatten)]
    pub location: LocationSelection,
    pub phone_number: String,
    pub password: String,
    pub username: String,
    pub id_number: String,
    pub bike_number: String,
    pub rider_type: RiderTypes,
    pub terms: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiderField {
    FirstName,
    LastName,
    Username,
    PhoneNumber,
    IdNumber,
    BikeNumber,
    County,
    SubCounty,
    Ward,
    Stage,
    RiderType,
    Password,
    Terms,
}

impl FormField for RiderField {
    fn name(&self) -> &'static str {
        match self {
            RiderField::FirstName => "firstName",
            RiderField::LastName => "lastName",
            RiderField::Username => "username",
            RiderField::PhoneNumber => "phoneNumber",
            RiderField::IdNumber => "idNumber",
            RiderField::BikeNumber => "bikeNumber",
            RiderField::County => "county",
            RiderField::SubCounty => "subCounty",
            RiderField::Ward => "ward",
            RiderField::Stage => "stage",
            RiderField::RiderType => "riderType",
            RiderField::Password => "password",
            RiderField::Terms => "terms",
        }
    }
}

impl From<LocationLevel> for RiderField {
    fn from(level: LocationLevel) -> Self {
        match level {
            LocationLevel::County => RiderField::County,
            LocationLevel::SubCounty => RiderField::SubCounty,
            LocationLevel::Ward => RiderField::Ward,
            LocationLevel::Stage => RiderField::Stage,
        }
    }
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum RegisterAction {
    SetFirstName(String),
    SetLastName(String),
    SetUsername(String),
    SetPhoneNumber(String),
    SetIdNumber(String),
    SetBikeNumber(String),
    SetPassword(String),
    SelectLocation(LocationLevel, String),
    ToggleRiderType(RiderType, bool),
    SetTerms(bool),
    SetFieldErrors(FieldErrors<RiderField>),
    SubmitStarted,
    SubmitFinished(Option<ActionOutcome>),
    ClearOutcome,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterFormState {
    pub draft: RiderDraft,
    pub errors: FieldErrors<RiderField>,
    pub submission: Submission,
}

impl RegisterFormState {
    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: RegisterAction) {
        match action {
            RegisterAction::SetFirstName(value) => {
                self.draft.first_name = value;
                self.errors.clear(RiderField::FirstName);
            }
            RegisterAction::SetLastName(value) => {
                self.draft.last_name = value;
                self.errors.clear(RiderField::LastName);
            }
            RegisterAction::SetUsername(value) => {
                self.draft.username = value;
                self.errors.clear(RiderField::Username);
            }
            RegisterAction::SetPhoneNumber(value) => {
                self.draft.phone_number = value;
                self.errors.clear(RiderField::PhoneNumber);
            }
            RegisterAction::SetIdNumber(value) => {
                self.draft.id_number = value;
                self.errors.clear(RiderField::IdNumber);
            }
            RegisterAction::SetBikeNumber(value) => {
                self.draft.bike_number = value.to_uppercase();
                self.errors.clear(RiderField::BikeNumber);
            }
            RegisterAction::SetPassword(value) => {
                self.draft.password = value;
                self.errors.clear(RiderField::Password);
            }
            RegisterAction::SelectLocation(level, value) => {
                self.draft.location.select(level, value);
                self.errors.clear(level.into());
                for lower in level.below() {
                    self.errors.clear(lower.into());
                }
            }
            RegisterAction::ToggleRiderType(rider_type, checked) => {
                self.draft.rider_type.toggle(rider_type, checked);
                self.errors.clear(RiderField::RiderType);
            }
            RegisterAction::SetTerms(accepted) => {
                self.draft.terms = accepted;
                self.errors.clear(RiderField::Terms);
            }
            RegisterAction::SetFieldErrors(errors) => {
                self.errors = errors;
            }
            RegisterAction::SubmitStarted => {
                if !self.submission.begin() {
                    console_warn!("[REGISTER] Submit ignored, one is already pending");
                }
            }
            RegisterAction::SubmitFinished(outcome) => {
                self.submission.finish(outcome);
            }
            RegisterAction::ClearOutcome => {
                self.submission.clear_outcome();
            }
        }
    }

    pub fn fields_disabled(&self) -> bool {
        self.submission.is_pending()
    }
}
