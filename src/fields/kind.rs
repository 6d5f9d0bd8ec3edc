//! Field identification
//!
//! Maps form field keys to a fixed set of kinds and their display labels.

use std::fmt;

/// Which registration form field a value belongs to.
///
/// Keys that are not part of the registration form are kept verbatim in
/// `Other` so they can still be validated for presence and labelled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKind {
    FirstName,
    LastName,
    Email,
    Phone,
    Password,
    ConfirmPassword,
    BirthDate,
    Country,
    Terms,
    Other(String),
}

impl FieldKind {
    /// Every field of the registration form, in the order it is rendered.
    pub const REGISTRATION: [FieldKind; 9] = [
        FieldKind::FirstName,
        FieldKind::LastName,
        FieldKind::Email,
        FieldKind::Phone,
        FieldKind::Password,
        FieldKind::ConfirmPassword,
        FieldKind::BirthDate,
        FieldKind::Country,
        FieldKind::Terms,
    ];

    /// Resolve a form key (as used in the `name` attribute) to a kind.
    pub fn from_key(key: &str) -> Self {
        match key {
            "firstName" => FieldKind::FirstName,
            "lastName" => FieldKind::LastName,
            "email" => FieldKind::Email,
            "phone" => FieldKind::Phone,
            "password" => FieldKind::Password,
            "confirmPassword" => FieldKind::ConfirmPassword,
            "birthDate" => FieldKind::BirthDate,
            "country" => FieldKind::Country,
            "terms" => FieldKind::Terms,
            other => FieldKind::Other(other.to_string()),
        }
    }

    /// The form key for this kind.
    pub fn key(&self) -> &str {
        match self {
            FieldKind::FirstName => "firstName",
            FieldKind::LastName => "lastName",
            FieldKind::Email => "email",
            FieldKind::Phone => "phone",
            FieldKind::Password => "password",
            FieldKind::ConfirmPassword => "confirmPassword",
            FieldKind::BirthDate => "birthDate",
            FieldKind::Country => "country",
            FieldKind::Terms => "terms",
            FieldKind::Other(key) => key.as_str(),
        }
    }

    /// Human readable label. Unknown fields fall back to their raw key.
    pub fn label(&self) -> &str {
        match self {
            FieldKind::FirstName => "First Name",
            FieldKind::LastName => "Last Name",
            FieldKind::Email => "Email",
            FieldKind::Phone => "Phone Number",
            FieldKind::Password => "Password",
            FieldKind::ConfirmPassword => "Confirm Password",
            FieldKind::BirthDate => "Date of Birth",
            FieldKind::Country => "Country",
            FieldKind::Terms => "Terms and Conditions",
            FieldKind::Other(key) => key.as_str(),
        }
    }

    /// Whether values of this kind must never be echoed back.
    pub fn is_secret(&self) -> bool {
        matches!(self, FieldKind::Password | FieldKind::ConfirmPassword)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A raw value captured from a form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValue {
    pub name: FieldKind,
    pub raw: String,
}

impl FieldValue {
    pub fn new(name: FieldKind, raw: impl Into<String>) -> Self {
        Self {
            name,
            raw: raw.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip_for_registration_fields() {
        for kind in FieldKind::REGISTRATION {
            assert_eq!(FieldKind::from_key(kind.key()), kind);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(FieldKind::FirstName.label(), "First Name");
        assert_eq!(FieldKind::Phone.label(), "Phone Number");
        assert_eq!(FieldKind::BirthDate.label(), "Date of Birth");
        assert_eq!(FieldKind::Terms.label(), "Terms and Conditions");
    }

    #[test]
    fn test_unknown_key_falls_back_to_raw_label() {
        let kind = FieldKind::from_key("nickname");
        assert_eq!(kind, FieldKind::Other("nickname".to_string()));
        assert_eq!(kind.label(), "nickname");
        assert_eq!(kind.to_string(), "nickname");
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        assert_eq!(
            FieldKind::from_key("Email"),
            FieldKind::Other("Email".to_string())
        );
    }
}
