pub mod config;
pub mod console;
pub mod error;
pub mod fields;
pub mod protocol;
pub mod session;
pub mod strength;
pub mod utils;
pub mod validation;

pub use config::FormConfig;
pub use fields::{FieldFeedback, FieldKind, FieldValue, ValidationVerdict};
pub use strength::{PasswordStrength, StrengthClass, evaluate_strength};
pub use validation::{FormReport, validate, validate_all, validate_confirmation};
