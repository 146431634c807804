use super::types::*;
use crate::utils::validation::{require, FieldErrors};

/// Validates a stage draft; an empty result means the draft may be submitted
pub fn validate_stage(draft: &StageDraft) -> FieldErrors<StageField> {
    let mut errors = FieldErrors::new();

    require(&mut errors, StageField::StageName, &draft.stage_name, "Stage name is required");
    require(&mut errors, StageField::County, &draft.county, "County is required");
    require(&mut errors, StageField::SubCounty, &draft.sub_county, "Sub county is required");
    require(&mut errors, StageField::Ward, &draft.ward, "Ward is required");

    check_coordinate(&mut errors, StageField::Latitude, &draft.latitude, 90.0);
    check_coordinate(&mut errors, StageField::Longitude, &draft.longitude, 180.0);

    errors
}

fn check_coordinate(errors: &mut FieldErrors<StageField>, field: StageField, value: &str, limit: f64) {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, "Please add your stage location");
        return;
    }

    match value.parse::<f64>() {
        Ok(degrees) if degrees.is_finite() && degrees.abs() <= limit => {}
        Ok(_) => errors.add(field, format!("Must be between -{} and {}", limit, limit)),
        Err(_) => errors.add(field, "Must be a decimal number"),
    }
}

/// Gets a one-line summary of what still blocks submission
pub fn get_stage_validation_message(draft: &StageDraft) -> Option<String> {
    let errors = validate_stage(draft);
    match errors.len() {
        0 => None,
        1 => Some("Please fix the highlighted field".to_string()),
        n => Some(format!("Please fix the {} highlighted fields", n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> StageDraft {
        StageDraft {
            stage_name: "Kariokor".to_string(),
            county: "Nairobi".to_string(),
            sub_county: "Starehe".to_string(),
            ward: "Starehe".to_string(),
            longitude: "36.8356".to_string(),
            latitude: "-1.2728".to_string(),
        }
    }

    #[test]
    fn test_empty_draft_flags_every_field() {
        let errors = validate_stage(&StageDraft::default());
        assert_eq!(errors.len(), 6);
        assert_eq!(errors.get(StageField::StageName), Some("Stage name is required"));
        assert_eq!(
            errors.get(StageField::Latitude),
            Some("Please add your stage location")
        );
        assert_eq!(
            get_stage_validation_message(&StageDraft::default()),
            Some("Please fix the 6 highlighted fields".to_string())
        );
    }

    #[test]
    fn test_complete_draft_passes() {
        assert!(validate_stage(&complete_draft()).is_empty());
        assert_eq!(get_stage_validation_message(&complete_draft()), None);
    }

    #[test]
    fn test_coordinate_ranges() {
        let mut draft = complete_draft();
        draft.latitude = "91".to_string();
        draft.longitude = "east".to_string();

        let errors = validate_stage(&draft);
        assert_eq!(errors.get(StageField::Latitude), Some("Must be between -90 and 90"));
        assert_eq!(errors.get(StageField::Longitude), Some("Must be a decimal number"));
    }

    #[test]
    fn test_whitespace_is_not_a_value() {
        let mut draft = complete_draft();
        draft.ward = "   ".to_string();
        let errors = validate_stage(&draft);
        assert_eq!(errors.get(StageField::Ward), Some("Ward is required"));
        assert_eq!(errors.len(), 1);
    }
}
