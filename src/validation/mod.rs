//! Validation engine
//!
//! Pure checks over raw form values. Nothing here performs I/O or keeps state
//! between calls; malformed input always yields an invalid verdict.

pub mod form;
pub mod patterns;
pub mod results;
pub mod validator;

pub use form::validate_all;
pub use patterns::{is_valid_date, is_valid_email, is_valid_phone, trim_value};
pub use results::FormReport;
pub use validator::{
    confirmation_feedback, validate, validate_confirmation, validate_field_feedback,
    validate_newsletter_email,
};
