use std::collections::BTreeMap;

use crate::services::errors::FormError;

/// A form field that can carry a validation message.
pub trait FormField: Copy + Ord {
    /// Wire name of the field, also used for the input `name` attribute.
    fn name(&self) -> &'static str;
}

/// Per-field validation messages, first message wins.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldErrors<F: FormField> {
    errors: BTreeMap<F, String>,
}

impl<F: FormField> Default for FieldErrors<F> {
    fn default() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }
}

impl<F: FormField> FieldErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message unless the field already has one.
    pub fn add(&mut self, field: F, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Message for display; empty when the field is valid.
    pub fn message(&self, field: F) -> String {
        self.get(field).map(str::to_string).unwrap_or_default()
    }

    pub fn contains(&self, field: F) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn clear(&mut self, field: F) {
        self.errors.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// First failure as an error value, for logging.
    pub fn to_error(&self) -> Option<FormError> {
        self.errors
            .iter()
            .next()
            .map(|(field, message)| FormError::Validation {
                field: field.name().to_string(),
                message: message.clone(),
            })
    }
}

/// Record `message` when `value` is blank.
pub fn require<F: FormField>(errors: &mut FieldErrors<F>, field: F, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.add(field, message);
    }
}

/// Kenyan mobile numbers: 07XXXXXXXX, 01XXXXXXXX or +254 followed by nine digits.
pub fn is_valid_phone_number(value: &str) -> bool {
    let value = value.trim();
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());

    if let Some(rest) = value.strip_prefix("+254") {
        rest.len() == 9 && all_digits(rest) && (rest.starts_with('7') || rest.starts_with('1'))
    } else {
        value.len() == 10
            && all_digits(value)
            && (value.starts_with("07") || value.starts_with("01"))
    }
}

/// National ID numbers are seven or eight digits.
pub fn is_valid_id_number(value: &str) -> bool {
    let value = value.trim();
    (7..=8).contains(&value.len()) && value.chars().all(|c| c.is_ascii_digit())
}

pub fn field_class(error: &str) -> &'static str {
    if error.is_empty() {
        "input-field"
    } else {
        "input-field input-invalid"
    }
}

pub fn field_style(error: &str) -> &'static str {
    if error.is_empty() {
        ""
    } else {
        "border: 2px solid #ef4444; background-color: #fef2f2;"
    }
}
