// Core types for the stage form - no dioxus imports needed here
use serde::{Deserialize, Serialize};

use crate::features::submission::Submission;
use crate::services::actions::ActionOutcome;
use crate::services::geolocation::Coordinates;
use crate::utils::validation::{FieldErrors, FormField};
use crate::{console_info, console_warn};

/// Stage payload sent to the stage-creation action
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct StageDraft {
    #[serde(rename = "stageName")]
    pub stage_name: String,
    pub county: String,
    pub sub_county: String,
    pub ward: String,
    pub longitude: String,
    pub latitude: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum StageField {
    StageName,
    County,
    SubCounty,
    Ward,
    Longitude,
    Latitude,
}

impl FormField for StageField {
    fn name(&self) -> &'static str {
        match self {
            StageField::StageName => "stageName",
            StageField::County => "county",
            StageField::SubCounty => "sub_county",
            StageField::Ward => "ward",
            StageField::Longitude => "longitude",
            StageField::Latitude => "latitude",
        }
    }
}

/// Device location state. There is no way back from `Fetched`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum LocationCapture {
    #[default]
    Unset,
    Fetched(Coordinates),
}

impl LocationCapture {
    pub fn is_fetched(&self) -> bool {
        matches!(self, LocationCapture::Fetched(_))
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        match self {
            LocationCapture::Fetched(coords) => Some(*coords),
            LocationCapture::Unset => None,
        }
    }

    /// Returns false when a position was already recorded
    pub fn record(&mut self, coords: Coordinates) -> bool {
        match self {
            LocationCapture::Unset => {
                *self = LocationCapture::Fetched(coords);
                true
            }
            LocationCapture::Fetched(_) => false,
        }
    }
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum StageAction {
    SetStageName(String),
    SetCounty(String),
    SetSubCounty(String),
    SetWard(String),
    SetLongitude(String),
    SetLatitude(String),
    LocationFetched(Coordinates),
    SetFieldErrors(FieldErrors<StageField>),
    SubmitStarted,
    SubmitFinished(Option<ActionOutcome>),
    ClearOutcome,
    SetMemberModalOpen(bool),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StageFormState {
    pub draft: StageDraft,
    pub capture: LocationCapture,
    pub errors: FieldErrors<StageField>,
    pub submission: Submission,
    pub member_modal_open: bool,
}

impl StageFormState {
    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: StageAction) {
        match action {
            StageAction::SetStageName(value) => {
                self.draft.stage_name = value;
                self.errors.clear(StageField::StageName);
            }
            StageAction::SetCounty(value) => {
                self.draft.county = value;
                self.errors.clear(StageField::County);
            }
            StageAction::SetSubCounty(value) => {
                self.draft.sub_county = value;
                self.errors.clear(StageField::SubCounty);
            }
            StageAction::SetWard(value) => {
                self.draft.ward = value;
                self.errors.clear(StageField::Ward);
            }
            StageAction::SetLongitude(value) => {
                if self.coordinates_locked() {
                    console_warn!("[STAGE] Ignoring longitude edit, field is locked");
                    return;
                }
                self.draft.longitude = value;
                self.errors.clear(StageField::Longitude);
            }
            StageAction::SetLatitude(value) => {
                if self.coordinates_locked() {
                    console_warn!("[STAGE] Ignoring latitude edit, field is locked");
                    return;
                }
                self.draft.latitude = value;
                self.errors.clear(StageField::Latitude);
            }
            StageAction::LocationFetched(coords) => {
                if self.submission.is_pending() {
                    console_warn!("[STAGE] Ignoring device location while a submit is pending");
                    return;
                }
                if self.capture.record(coords) {
                    self.draft.latitude = coords.latitude_text();
                    self.draft.longitude = coords.longitude_text();
                    self.errors.clear(StageField::Latitude);
                    self.errors.clear(StageField::Longitude);
                    console_info!(
                        "Latitude: {}, Longitude: {}",
                        self.draft.latitude,
                        self.draft.longitude
                    );
                }
            }
            StageAction::SetFieldErrors(errors) => {
                self.errors = errors;
            }
            StageAction::SubmitStarted => {
                if !self.submission.begin() {
                    console_warn!("[STAGE] Submit ignored, one is already pending");
                }
            }
            StageAction::SubmitFinished(outcome) => {
                self.submission.finish(outcome);
            }
            StageAction::ClearOutcome => {
                self.submission.clear_outcome();
            }
            StageAction::SetMemberModalOpen(open) => {
                self.member_modal_open = open;
            }
        }
    }

    pub fn fields_disabled(&self) -> bool {
        self.submission.is_pending()
    }

    pub fn coordinates_locked(&self) -> bool {
        self.submission.is_pending() || self.capture.is_fetched()
    }

    pub fn location_button_disabled(&self) -> bool {
        self.capture.is_fetched()
    }

    pub fn location_button_label(&self) -> &'static str {
        if self.capture.is_fetched() {
            "Stage Added"
        } else {
            "Get my stage location"
        }
    }
}
