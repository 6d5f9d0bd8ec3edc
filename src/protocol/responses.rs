//! Console responses
//!
//! Every response line is `<tag> <text>`.

use crate::fields::{FieldFeedback, FieldKind};
use crate::strength::PasswordStrength;

pub const OK: &str = "ok";
pub const ERROR: &str = "error";
pub const CLEAR: &str = "clear";
pub const INFO: &str = "info";
pub const STRENGTH: &str = "strength";

/// Format a response line
pub fn format_response(tag: &str, text: &str) -> String {
    format!("{} {}\n", tag, text)
}

/// Render field feedback; an empty success message shows the field alone.
pub fn format_feedback(field: &FieldKind, feedback: &FieldFeedback) -> String {
    match feedback {
        FieldFeedback::Success(msg) if msg.is_empty() => format_response(OK, field.key()),
        FieldFeedback::Success(msg) => format_response(OK, &format!("{}: {}", field, msg)),
        FieldFeedback::Error(msg) => format_response(ERROR, &format!("{}: {}", field, msg)),
        FieldFeedback::Clear => format_response(CLEAR, field.key()),
    }
}

/// Render the strength meter, with hints while criteria are missing.
pub fn format_strength(strength: &PasswordStrength) -> String {
    let mut text = format!("{}% {}", strength.percentage, strength.label);
    if strength.score > 0 && !strength.missing.is_empty() {
        text.push_str(&format!(" (add: {})", strength.hints().join(", ")));
    }
    format_response(STRENGTH, &text)
}
