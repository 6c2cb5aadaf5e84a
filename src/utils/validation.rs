use std::borrow::Cow;

use validator::{Validate, ValidationError, ValidationErrors};

/// Accepts international-style phone numbers: an optional leading `+`,
/// then 7 to 15 digits. Spaces, dashes, dots and parentheses are ignored.
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    let body = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let mut digits = 0usize;
    for ch in body.chars() {
        match ch {
            '0'..='9' => digits += 1,
            ' ' | '-' | '.' | '(' | ')' => {}
            _ => return Err(phone_error("Phone number contains invalid characters")),
        }
    }

    if !(7..=15).contains(&digits) {
        return Err(phone_error("Phone number must contain 7 to 15 digits"));
    }
    Ok(())
}

fn phone_error(message: &'static str) -> ValidationError {
    let mut err = ValidationError::new("phone");
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Optional-field wrapper for [`validate_phone`]; `None` and blank pass.
pub fn validate_optional_phone(value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(phone) if !phone.trim().is_empty() => validate_phone(phone),
        _ => Ok(()),
    }
}

/// Runs the payload's derived rules plus [`validate_optional_phone`] on each
/// `(field, value)` pair, reporting every failure in one error set.
pub fn validate<T: Validate>(
    val: &T,
    optional_phones: &[(&'static str, Option<&str>)],
) -> Result<(), ValidationErrors> {
    let mut errors = match val.validate() {
        Ok(()) => ValidationErrors::new(),
        Err(errors) => errors,
    };
    for (field, value) in optional_phones {
        if let Err(err) = validate_optional_phone(*value) {
            errors.add(*field, err);
        }
    }
    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
