use super::types::*;
use crate::features::location::{LocationHierarchy, LocationLevel};
use crate::utils::validation::{is_valid_id_number, is_valid_phone_number, require, FieldErrors};

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Validates a rider draft against the registration rules and the location dataset
pub fn validate_rider(draft: &RiderDraft, hierarchy: &LocationHierarchy) -> FieldErrors<RiderField> {
    let mut errors = FieldErrors::new();

    require(&mut errors, RiderField::FirstName, &draft.first_name, "First name is required");
    require(&mut errors, RiderField::LastName, &draft.last_name, "Last name is required");

    require(&mut errors, RiderField::Username, &draft.username, "Username is required");
    if draft.username.trim().chars().count() < MIN_USERNAME_LENGTH {
        errors.add(
            RiderField::Username,
            format!("Username must be at least {} characters", MIN_USERNAME_LENGTH),
        );
    }

    require(&mut errors, RiderField::PhoneNumber, &draft.phone_number, "Phone number is required");
    if !is_valid_phone_number(&draft.phone_number) {
        errors.add(RiderField::PhoneNumber, "Enter a valid phone number, e.g. 0712345678");
    }

    require(&mut errors, RiderField::IdNumber, &draft.id_number, "ID number is required");
    if !is_valid_id_number(&draft.id_number) {
        errors.add(RiderField::IdNumber, "ID number must be 7 or 8 digits");
    }

    require(&mut errors, RiderField::BikeNumber, &draft.bike_number, "Bike number is required");

    validate_location(draft, hierarchy, &mut errors);

    if draft.rider_type.is_empty() {
        errors.add(RiderField::RiderType, "You have to select at least one item.");
    }

    if draft.password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.add(
            RiderField::Password,
            format!("Password must be at least {} characters", MIN_PASSWORD_LENGTH),
        );
    }

    if !draft.terms {
        errors.add(RiderField::Terms, "You must accept the terms and conditions");
    }

    errors
}

fn validate_location(
    draft: &RiderDraft,
    hierarchy: &LocationHierarchy,
    errors: &mut FieldErrors<RiderField>,
) {
    for level in LocationLevel::ALL {
        if !draft.location.is_set(level) {
            errors.add(level.into(), required_location_message(level));
        }
    }

    if let Some(level) = hierarchy.first_invalid_level(&draft.location) {
        errors.add(level.into(), "Please choose again from the list");
    }
}

fn required_location_message(level: LocationLevel) -> &'static str {
    match level {
        LocationLevel::County => "Please select your county",
        LocationLevel::SubCounty => "Please select your sub county",
        LocationLevel::Ward => "Please select your ward",
        LocationLevel::Stage => "Please select your stage",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> RiderDraft {
        let mut state = RegisterFormState::default();
        for action in [
            RegisterAction::SetFirstName("John".to_string()),
            RegisterAction::SetLastName("Doe".to_string()),
            RegisterAction::SetUsername("johndoe".to_string()),
            RegisterAction::SetPhoneNumber("0712345678".to_string()),
            RegisterAction::SetIdNumber("12345678".to_string()),
            RegisterAction::SetBikeNumber("kmwt1234".to_string()),
            RegisterAction::SelectLocation(LocationLevel::County, "Nairobi".to_string()),
            RegisterAction::SelectLocation(LocationLevel::SubCounty, "Starehe".to_string()),
            RegisterAction::SelectLocation(LocationLevel::Ward, "Ziwani/Kariokor".to_string()),
            RegisterAction::SelectLocation(LocationLevel::Stage, "Kariokor".to_string()),
            RegisterAction::ToggleRiderType(RiderType::Mwendeshaji, true),
            RegisterAction::SetPassword("secret123".to_string()),
            RegisterAction::SetTerms(true),
        ] {
            state.reduce_in_place(action);
        }
        state.draft
    }

    #[test]
    fn test_valid_draft_passes() {
        let errors = validate_rider(&valid_draft(), LocationHierarchy::embedded());
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn test_empty_draft_flags_required_fields() {
        let errors = validate_rider(&RiderDraft::default(), LocationHierarchy::embedded());

        assert_eq!(errors.get(RiderField::FirstName), Some("First name is required"));
        assert_eq!(errors.get(RiderField::Username), Some("Username is required"));
        assert_eq!(errors.get(RiderField::County), Some("Please select your county"));
        assert_eq!(errors.get(RiderField::Stage), Some("Please select your stage"));
        assert_eq!(
            errors.get(RiderField::RiderType),
            Some("You have to select at least one item.")
        );
        assert!(errors.contains(RiderField::Terms));
        assert_eq!(errors.len(), 13);
    }

    #[test]
    fn test_format_rules() {
        let mut draft = valid_draft();
        draft.username = "jd".to_string();
        draft.phone_number = "12345".to_string();
        draft.id_number = "12".to_string();
        draft.password = "abc".to_string();

        let errors = validate_rider(&draft, LocationHierarchy::embedded());
        assert_eq!(
            errors.get(RiderField::Username),
            Some("Username must be at least 3 characters")
        );
        assert!(errors.contains(RiderField::PhoneNumber));
        assert!(errors.contains(RiderField::IdNumber));
        assert!(errors.contains(RiderField::Password));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_stale_location_chain_is_rejected() {
        let mut draft = valid_draft();
        // Bypass the cascade to simulate a stale downstream value
        draft.location.county = "Mombasa".to_string();

        let errors = validate_rider(&draft, LocationHierarchy::embedded());
        assert_eq!(
            errors.get(RiderField::SubCounty),
            Some("Please choose again from the list")
        );
        assert_eq!(errors.len(), 1);
    }
}
