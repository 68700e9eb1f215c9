//! Field rules shared by client forms and server params.

use crate::model::api::FieldErrorDto;

/// Pushes an error when the trimmed value's length is outside `min..=max` characters.
pub fn check_length(
    errors: &mut Vec<FieldErrorDto>,
    field: &str,
    label: &str,
    value: &str,
    min: usize,
    max: usize,
) {
    let len = value.trim().chars().count();
    if len < min {
        errors.push(FieldErrorDto::new(
            field,
            format!("{} must be at least {} characters", label, min),
        ));
    } else if len > max {
        errors.push(FieldErrorDto::new(
            field,
            format!("{} must be at most {} characters", label, max),
        ));
    }
}

/// Largest fee or price, in INR, an admin may set.
pub const MAX_AMOUNT: i32 = 1_000_000;

/// Pushes an error unless `value` lies in `0..=MAX_AMOUNT`.
pub fn check_amount(errors: &mut Vec<FieldErrorDto>, field: &str, label: &str, value: i32) {
    if value < 0 {
        errors.push(FieldErrorDto::new(field, format!("{} cannot be negative", label)));
    } else if value > MAX_AMOUNT {
        errors.push(FieldErrorDto::new(
            field,
            format!("{} must be at most {}", label, MAX_AMOUNT),
        ));
    }
}

/// Accepts 10 to 15 digits with an optional leading `+`; spaces and dashes are ignored.
pub fn check_phone(errors: &mut Vec<FieldErrorDto>, field: &str, value: &str) {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = digits.chars().filter(|c| *c != ' ' && *c != '-').collect();

    if digits.len() < 10 || digits.len() > 15 || !digits.chars().all(|c| c.is_ascii_digit()) {
        errors.push(FieldErrorDto::new(field, "Enter a valid phone number"));
    }
}

/// Name, phone and college of a registration form.
pub fn validate_registrant(name: &str, phone: &str, college: &str) -> Vec<FieldErrorDto> {
    let mut errors = Vec::new();
    check_length(&mut errors, "name", "Name", name, 2, 100);
    check_phone(&mut errors, "phone", phone);
    check_length(&mut errors, "college", "College", college, 2, 200);
    errors
}
