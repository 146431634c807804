use super::types::*;
use crate::utils::validation::{is_valid_id_number, is_valid_phone_number, require, FieldErrors};

pub fn validate_member(draft: &MemberDraft) -> FieldErrors<MemberField> {
    let mut errors = FieldErrors::new();

    require(&mut errors, MemberField::FirstName, &draft.first_name, "First name is required");
    require(&mut errors, MemberField::LastName, &draft.last_name, "Last name is required");

    require(&mut errors, MemberField::PhoneNumber, &draft.phone_number, "Phone number is required");
    if !is_valid_phone_number(&draft.phone_number) {
        errors.add(MemberField::PhoneNumber, "Enter a valid phone number, e.g. 0712345678");
    }

    require(&mut errors, MemberField::IdNumber, &draft.id_number, "ID number is required");
    if !is_valid_id_number(&draft.id_number) {
        errors.add(MemberField::IdNumber, "ID number must be 7 or 8 digits");
    }

    if draft.rider_type.is_empty() {
        errors.add(MemberField::RiderType, "You have to select at least one item.");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::registration::RiderType;

    #[test]
    fn test_empty_member_fails_every_field() {
        let errors = validate_member(&MemberDraft::default());
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get(MemberField::PhoneNumber), Some("Phone number is required"));
    }

    #[test]
    fn test_complete_member_passes() {
        let mut draft = MemberDraft {
            first_name: "Wanjiru".to_string(),
            last_name: "Kamau".to_string(),
            phone_number: "0112345678".to_string(),
            id_number: "30123456".to_string(),
            ..Default::default()
        };
        draft.rider_type.toggle(RiderType::Mechanic, true);

        assert!(validate_member(&draft).is_empty());
    }
}
