//! Form-level aggregation
//!
//! Runs the field validator over a whole submission and folds in the terms
//! agreement.

use log::debug;
use std::collections::{HashMap, HashSet};

use super::results::FormReport;
use super::validator::validate;
use crate::fields::{FieldKind, FieldValue, ValidationVerdict};

pub const TERMS_MESSAGE: &str = "You must agree to the terms and conditions";

/// Validates every field without short-circuiting.
///
/// A field is required when its kind is in `required`. When the terms were
/// not accepted, a failing verdict for `terms` replaces whatever the field
/// itself produced.
pub fn validate_all(
    fields: &[FieldValue],
    required: &HashSet<FieldKind>,
    terms_accepted: bool,
) -> FormReport {
    let mut per_field = HashMap::with_capacity(fields.len() + 1);
    let mut all_valid = true;

    // A repeated kind keeps its last verdict in the map, but every verdict
    // counts towards `all_valid`.
    for field in fields {
        let verdict = validate(field, required.contains(&field.name));
        all_valid &= verdict.valid;
        per_field.insert(field.name.clone(), verdict);
    }

    if !terms_accepted {
        all_valid = false;
        per_field.insert(FieldKind::Terms, ValidationVerdict::fail(TERMS_MESSAGE));
    }

    debug!(
        "Validated form: {} fields, {} invalid",
        per_field.len(),
        per_field.values().filter(|v| !v.valid).count()
    );

    FormReport {
        all_valid,
        per_field,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> Vec<FieldValue> {
        vec![
            FieldValue::new(FieldKind::FirstName, "Jane"),
            FieldValue::new(FieldKind::LastName, "Doe"),
            FieldValue::new(FieldKind::Email, "jane@example.com"),
            FieldValue::new(FieldKind::Phone, "+1 555 010 0199"),
            FieldValue::new(FieldKind::Password, "Abcdefg1"),
            FieldValue::new(FieldKind::ConfirmPassword, "Abcdefg1"),
            FieldValue::new(FieldKind::BirthDate, "1990-04-12"),
            FieldValue::new(FieldKind::Country, "NZ"),
        ]
    }

    fn all_required() -> HashSet<FieldKind> {
        FieldKind::REGISTRATION.into_iter().collect()
    }

    #[test]
    fn test_complete_form_is_valid() {
        let report = validate_all(&complete_form(), &all_required(), true);
        assert!(report.all_valid);
        assert_eq!(report.per_field.len(), 8);
        assert!(report.failures().is_empty());
    }

    #[test]
    fn test_terms_not_accepted() {
        let report = validate_all(&complete_form(), &all_required(), false);
        assert!(!report.all_valid);

        let failures = report.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, &FieldKind::Terms);
        assert_eq!(failures[0].1.message, TERMS_MESSAGE);
    }

    #[test]
    fn test_reports_every_failure() {
        let mut fields = complete_form();
        fields[0].raw = " ".to_string();
        fields[2].raw = "jane".to_string();
        fields[6].raw = "yesterday".to_string();

        let report = validate_all(&fields, &all_required(), false);
        assert!(!report.all_valid);
        assert_eq!(report.failures().len(), 4);
        assert_eq!(
            report.verdict(&FieldKind::FirstName).map(|v| v.message.as_str()),
            Some("First Name is required")
        );
        assert_eq!(
            report.verdict(&FieldKind::Email).map(|v| v.message.as_str()),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            report.verdict(&FieldKind::BirthDate).map(|v| v.message.as_str()),
            Some("Please enter a valid date")
        );
    }

    #[test]
    fn test_optional_fields_may_be_blank() {
        let mut fields = complete_form();
        fields[3].raw = String::new();
        let mut required = all_required();
        required.remove(&FieldKind::Phone);

        let report = validate_all(&fields, &required, true);
        assert!(report.all_valid);
    }

    #[test]
    fn test_terms_field_override() {
        let mut fields = complete_form();
        fields.push(FieldValue::new(FieldKind::Terms, "on"));

        let report = validate_all(&fields, &all_required(), false);
        assert_eq!(
            report.verdict(&FieldKind::Terms),
            Some(&ValidationVerdict::fail(TERMS_MESSAGE))
        );
    }

    #[test]
    fn test_repeated_field_failure_is_not_masked() {
        let fields = vec![
            FieldValue::new(FieldKind::Email, "not-an-email"),
            FieldValue::new(FieldKind::Email, "a@b.c"),
        ];

        let report = validate_all(&fields, &all_required(), true);
        assert!(!report.all_valid);
        assert_eq!(report.verdict(&FieldKind::Email), Some(&ValidationVerdict::pass()));
    }

    #[test]
    fn test_empty_submission() {
        let report = validate_all(&[], &all_required(), true);
        assert!(report.all_valid);
        assert!(report.per_field.is_empty());
    }
}
