//! Validation result types
//!
//! Defines result structures returned by form-level validation.

use std::collections::HashMap;

use crate::fields::{FieldKind, ValidationVerdict};

/// Result of validating a whole form submission
#[derive(Debug, Clone)]
pub struct FormReport {
    pub all_valid: bool,
    pub per_field: HashMap<FieldKind, ValidationVerdict>,
}

impl FormReport {
    pub fn verdict(&self, kind: &FieldKind) -> Option<&ValidationVerdict> {
        self.per_field.get(kind)
    }

    /// Failing verdicts, sorted by field so output is stable.
    pub fn failures(&self) -> Vec<(&FieldKind, &ValidationVerdict)> {
        let mut failures: Vec<_> = self
            .per_field
            .iter()
            .filter(|(_, verdict)| !verdict.valid)
            .collect();
        failures.sort_by(|a, b| a.0.cmp(b.0));
        failures
    }
}
