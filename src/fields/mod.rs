//! Form fields
//!
//! Identifies registration form fields and defines the verdicts produced when
//! they are evaluated.

pub mod kind;
pub mod results;

pub use kind::{FieldKind, FieldValue};
pub use results::{FieldFeedback, ValidationVerdict};
