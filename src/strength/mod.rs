//! Password strength
//!
//! Scores password composition for the strength meter. Scoring never gates
//! submission; only the field validator's length rule does.

pub mod evaluator;
pub mod results;

pub use evaluator::evaluate_strength;
pub use results::{Criterion, PasswordStrength, StrengthClass};
