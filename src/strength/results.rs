//! Strength result types

/// A password composition criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    Length,
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl Criterion {
    /// All criteria, in evaluation order.
    pub const ALL: [Criterion; 5] = [
        Criterion::Length,
        Criterion::Lowercase,
        Criterion::Uppercase,
        Criterion::Digit,
        Criterion::Special,
    ];

    /// Short hint describing what is missing.
    pub fn hint(self) -> &'static str {
        match self {
            Criterion::Length => "at least 8 characters",
            Criterion::Lowercase => "lowercase letter",
            Criterion::Uppercase => "uppercase letter",
            Criterion::Digit => "number",
            Criterion::Special => "special character",
        }
    }
}

/// Coarse strength bucket. `None` is reserved for a zero score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthClass {
    None,
    Weak,
    Medium,
    Strong,
}

/// Result of evaluating a password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordStrength {
    pub score: u8,
    pub percentage: u8,
    pub classification: StrengthClass,
    pub label: &'static str,
    pub missing: Vec<Criterion>,
}

impl PasswordStrength {
    /// Style keyword for the strength meter.
    pub fn css_class(&self) -> &'static str {
        match self.classification {
            StrengthClass::None => "",
            StrengthClass::Weak => "weak",
            StrengthClass::Medium => "medium",
            StrengthClass::Strong => "strong",
        }
    }

    pub fn hints(&self) -> Vec<&'static str> {
        self.missing.iter().map(|c| c.hint()).collect()
    }
}
