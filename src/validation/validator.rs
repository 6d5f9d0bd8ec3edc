//! Field validator
//!
//! Decides whether a single field value satisfies its format, and pairs the
//! password with its confirmation.

use log::debug;

use super::patterns::{is_valid_date, is_valid_email, is_valid_phone, trim_value};
use crate::fields::{FieldFeedback, FieldKind, FieldValue, ValidationVerdict};

/// Minimum password length accepted by the registration form.
pub const MIN_PASSWORD_LENGTH: usize = 8;

pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PHONE_MESSAGE: &str = "Please enter a valid phone number";
pub const PASSWORD_LENGTH_MESSAGE: &str = "Password must be at least 8 characters long";
pub const DATE_MESSAGE: &str = "Please enter a valid date";
pub const NEWSLETTER_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const PASSWORDS_MATCH: &str = "Passwords match";
pub const PASSWORDS_DIFFER: &str = "Passwords do not match";

/// Validates one field. The value is trimmed before any rule is applied.
pub fn validate(field: &FieldValue, required: bool) -> ValidationVerdict {
    let value = trim_value(&field.raw);

    let verdict = if value.is_empty() {
        if required {
            ValidationVerdict::fail(format!("{} is required", field.name.label()))
        } else {
            ValidationVerdict::pass()
        }
    } else {
        check_format(&field.name, value)
    };

    debug!(
        "Validated {} (required: {}): {}",
        field.name,
        required,
        if verdict.valid { "valid" } else { "invalid" }
    );
    verdict
}

/// Applies the format rule for a non-empty, trimmed value.
fn check_format(kind: &FieldKind, value: &str) -> ValidationVerdict {
    match kind {
        FieldKind::Email if !is_valid_email(value) => ValidationVerdict::fail(EMAIL_MESSAGE),
        FieldKind::Phone if !is_valid_phone(value) => ValidationVerdict::fail(PHONE_MESSAGE),
        FieldKind::Password if value.chars().count() < MIN_PASSWORD_LENGTH => {
            ValidationVerdict::fail(PASSWORD_LENGTH_MESSAGE)
        }
        FieldKind::BirthDate if !is_valid_date(value) => ValidationVerdict::fail(DATE_MESSAGE),
        _ => ValidationVerdict::pass(),
    }
}

/// Compares a confirmation against the password.
///
/// Returns `None` while the confirmation is still empty: nothing has been
/// typed yet, so neither success nor failure should be shown.
pub fn validate_confirmation(password: &str, confirmation: &str) -> Option<ValidationVerdict> {
    if confirmation.is_empty() {
        return None;
    }

    if confirmation == password {
        Some(ValidationVerdict::pass_with(PASSWORDS_MATCH))
    } else {
        Some(ValidationVerdict::fail(PASSWORDS_DIFFER))
    }
}

/// Checks the newsletter sign-up address exactly as typed (no trimming).
pub fn validate_newsletter_email(raw: &str) -> ValidationVerdict {
    if is_valid_email(raw) {
        ValidationVerdict::pass()
    } else {
        ValidationVerdict::fail(NEWSLETTER_EMAIL_MESSAGE)
    }
}

/// Feedback to paint after validating a field on input or blur.
pub fn validate_field_feedback(field: &FieldValue, required: bool) -> FieldFeedback {
    let verdict = validate(field, required);
    if !verdict.valid {
        FieldFeedback::Error(verdict.message)
    } else if trim_value(&field.raw).is_empty() {
        FieldFeedback::Clear
    } else {
        FieldFeedback::Success(verdict.message)
    }
}

/// Feedback to paint after the confirmation field changes.
pub fn confirmation_feedback(password: &str, confirmation: &str) -> FieldFeedback {
    match validate_confirmation(password, confirmation) {
        None => FieldFeedback::Clear,
        Some(verdict) if verdict.valid => FieldFeedback::Success(verdict.message),
        Some(verdict) => FieldFeedback::Error(verdict.message),
    }
}
