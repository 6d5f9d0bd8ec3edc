//! Field result types
//!
//! Defines the verdicts returned by field evaluation and the feedback state a
//! presentation layer derives from them.

/// Outcome of evaluating a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationVerdict {
    pub valid: bool,
    pub message: String,
}

impl ValidationVerdict {
    /// A passing verdict with no message.
    pub fn pass() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    /// A passing verdict carrying an affirmation.
    pub fn pass_with(message: impl Into<String>) -> Self {
        Self {
            valid: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// What a presentation layer should show next to a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldFeedback {
    Success(String),
    Error(String),
    Clear,
}
