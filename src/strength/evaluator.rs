//! Strength evaluator
//!
//! Scores a password one point per satisfied criterion and maps the score
//! onto a stepped meter: 0 is neutral, 1-2 weak, 3 medium, 4-5 strong.

use log::trace;

use super::results::{Criterion, PasswordStrength, StrengthClass};

pub const NEUTRAL_LABEL: &str = "Password strength";
pub const WEAK_LABEL: &str = "Weak password";
pub const MEDIUM_LABEL: &str = "Medium strength";
pub const STRONG_LABEL: &str = "Strong password";

const MIN_LENGTH: usize = 8;

fn satisfies(password: &str, criterion: Criterion) -> bool {
    match criterion {
        Criterion::Length => password.chars().count() >= MIN_LENGTH,
        Criterion::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
        Criterion::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
        Criterion::Digit => password.chars().any(|c| c.is_ascii_digit()),
        // Anything outside ASCII alphanumerics counts, including whitespace
        // and non-ASCII letters.
        Criterion::Special => password.chars().any(|c| !c.is_ascii_alphanumeric()),
    }
}

/// Evaluates a password as typed. Total over all inputs.
pub fn evaluate_strength(password: &str) -> PasswordStrength {
    let missing: Vec<Criterion> = Criterion::ALL
        .into_iter()
        .filter(|c| !satisfies(password, *c))
        .collect();
    let score = (Criterion::ALL.len() - missing.len()) as u8;

    let (percentage, classification, label) = match score {
        0 => (0, StrengthClass::None, NEUTRAL_LABEL),
        1..=2 => (33, StrengthClass::Weak, WEAK_LABEL),
        3 => (66, StrengthClass::Medium, MEDIUM_LABEL),
        _ => (100, StrengthClass::Strong, STRONG_LABEL),
    };

    trace!("Password scored {}/5", score);

    PasswordStrength {
        score,
        percentage,
        classification,
        label,
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_is_neutral() {
        let strength = evaluate_strength("");
        assert_eq!(strength.score, 0);
        assert_eq!(strength.percentage, 0);
        assert_eq!(strength.classification, StrengthClass::None);
        assert_eq!(strength.label, "Password strength");
        assert_eq!(strength.css_class(), "");
        assert_eq!(strength.missing, Criterion::ALL.to_vec());
    }

    #[test]
    fn test_weak_password() {
        let strength = evaluate_strength("abcdefgh");
        assert_eq!(strength.score, 2);
        assert_eq!(strength.percentage, 33);
        assert_eq!(strength.classification, StrengthClass::Weak);
        assert_eq!(strength.label, "Weak password");
        assert_eq!(
            strength.hints(),
            vec!["uppercase letter", "number", "special character"]
        );
    }

    #[test]
    fn test_single_criterion_is_weak_not_neutral() {
        let strength = evaluate_strength("a");
        assert_eq!(strength.score, 1);
        assert_eq!(strength.percentage, 33);
        assert_eq!(strength.label, WEAK_LABEL);
    }

    #[test]
    fn test_medium_password() {
        let strength = evaluate_strength("abcdefg1");
        assert_eq!(strength.score, 3);
        assert_eq!(strength.percentage, 66);
        assert_eq!(strength.classification, StrengthClass::Medium);
        assert_eq!(strength.label, "Medium strength");
        assert_eq!(strength.css_class(), "medium");
    }

    #[test]
    fn test_strong_passwords() {
        let four = evaluate_strength("Abcdefg1");
        assert_eq!(four.score, 4);
        assert_eq!(four.percentage, 100);
        assert_eq!(four.label, "Strong password");
        assert_eq!(four.missing, vec![Criterion::Special]);

        let five = evaluate_strength("Ab1!efgh");
        assert_eq!(five.score, 5);
        assert_eq!(five.percentage, 100);
        assert_eq!(five.classification, StrengthClass::Strong);
        assert!(five.missing.is_empty());
    }

    #[test]
    fn test_whitespace_and_unicode_count_as_special() {
        let spaces = evaluate_strength("   ");
        assert_eq!(spaces.score, 1);
        assert!(!spaces.missing.contains(&Criterion::Special));

        let accented = evaluate_strength("é");
        assert_eq!(accented.score, 1);
        assert!(!accented.missing.contains(&Criterion::Special));
        assert!(accented.missing.contains(&Criterion::Lowercase));
    }

    #[test]
    fn test_untrimmed_length() {
        assert_eq!(evaluate_strength("  abcd  ").score, 3);
    }
}
