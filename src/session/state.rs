//! Module `session`
//!
//! Defines the `FormSession` struct holding what has been typed into the
//! registration form so far.

use std::collections::HashMap;

use crate::fields::{FieldKind, FieldValue};

/// Mutable state of one registration form.
///
/// Terms acceptance is a checkbox, so it is tracked as a flag rather than a
/// stored value.
#[derive(Debug, Default)]
pub struct FormSession {
    values: HashMap<FieldKind, String>,
    terms_accepted: bool,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every value and the terms checkbox, as a form reset does.
    pub fn reset(&mut self) {
        self.values.clear();
        self.terms_accepted = false;
    }

    pub fn set(&mut self, kind: FieldKind, raw: impl Into<String>) {
        self.values.insert(kind, raw.into());
    }

    /// Removes a stored value, returning whether one was present.
    pub fn clear(&mut self, kind: &FieldKind) -> bool {
        self.values.remove(kind).is_some()
    }

    /// Stored value, or the empty string for untouched fields.
    pub fn value(&self, kind: &FieldKind) -> &str {
        self.values.get(kind).map(String::as_str).unwrap_or("")
    }

    pub fn terms_accepted(&self) -> bool {
        self.terms_accepted
    }

    pub fn set_terms_accepted(&mut self, accepted: bool) {
        self.terms_accepted = accepted;
    }

    /// Snapshot for submission: every registration field except the terms
    /// checkbox, followed by any extra fields, sorted by kind.
    pub fn field_values(&self) -> Vec<FieldValue> {
        let mut fields: Vec<FieldValue> = FieldKind::REGISTRATION
            .iter()
            .filter(|kind| **kind != FieldKind::Terms)
            .map(|kind| FieldValue::new(kind.clone(), self.value(kind)))
            .collect();

        let mut extras: Vec<&FieldKind> = self
            .values
            .keys()
            .filter(|kind| matches!(kind, FieldKind::Other(_)))
            .collect();
        extras.sort();
        fields.extend(
            extras
                .into_iter()
                .map(|kind| FieldValue::new(kind.clone(), self.value(kind))),
        );
        fields
    }

    /// Stored entries sorted by kind.
    pub fn entries(&self) -> Vec<(&FieldKind, &str)> {
        let mut entries: Vec<_> = self
            .values
            .iter()
            .map(|(kind, value)| (kind, value.as_str()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
