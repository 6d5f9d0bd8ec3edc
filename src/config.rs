//! Configuration management for the registration form console
//!
//! Layers built-in defaults, an optional TOML file and `REGFORM__*`
//! environment variables.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use crate::fields::FieldKind;

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "regform.toml";

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Form console configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FormConfig {
    /// Name shown in the console greeting
    pub site_name: String,

    /// Field keys that must be filled in before the form can be submitted.
    /// Unknown keys are accepted and labelled by their key.
    pub required_fields: Vec<String>,

    pub registration_success_message: String,
    pub newsletter_success_message: String,

    /// Default log filter; `RUST_LOG` takes precedence
    pub log_level: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            site_name: "Travel Paradise".to_string(),
            required_fields: [
                FieldKind::FirstName,
                FieldKind::LastName,
                FieldKind::Email,
                FieldKind::Password,
                FieldKind::ConfirmPassword,
                FieldKind::BirthDate,
                FieldKind::Country,
                FieldKind::Terms,
            ]
            .iter()
            .map(|kind| kind.key().to_string())
            .collect(),
            registration_success_message:
                "Account created successfully! Welcome to Travel Paradise!".to_string(),
            newsletter_success_message:
                "Thank you for subscribing! You'll receive our latest updates.".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl FormConfig {
    /// Load configuration with environment overrides.
    ///
    /// An explicit `path` must exist; without one, `regform.toml` is used if
    /// present.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix("REGFORM").separator("__"))
            .build()?;

        let config: FormConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Required fields resolved to kinds
    pub fn required_set(&self) -> HashSet<FieldKind> {
        self.required_fields
            .iter()
            .map(|key| FieldKind::from_key(key.trim()))
            .collect()
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.site_name.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "site_name cannot be empty".into(),
            ));
        }

        if self.registration_success_message.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "registration_success_message cannot be empty".into(),
            ));
        }

        if self.newsletter_success_message.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "newsletter_success_message cannot be empty".into(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(config::ConfigError::Message(format!(
                "log_level must be one of {:?}, got {:?}",
                LOG_LEVELS, self.log_level
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = FormConfig::default();
        let required = config.required_set();
        assert_eq!(required.len(), 8);
        assert!(required.contains(&FieldKind::Terms));
        assert!(!required.contains(&FieldKind::Phone));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file_keeps_unset_defaults() {
        let file = write_config(
            r#"
site_name = "Harbour Tours"
required_fields = ["email", "phone", "nickname"]
"#,
        );

        let config = FormConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.site_name, "Harbour Tours");
        assert_eq!(config.log_level, "info");
        assert_eq!(
            config.registration_success_message,
            FormConfig::default().registration_success_message
        );

        let required = config.required_set();
        assert_eq!(required.len(), 3);
        assert!(required.contains(&FieldKind::Phone));
        assert!(required.contains(&FieldKind::Other("nickname".to_string())));
    }

    #[test]
    fn test_load_rejects_empty_site_name() {
        let file = write_config("site_name = \"  \"\n");
        let err = FormConfig::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("site_name"));
    }

    #[test]
    fn test_load_rejects_unknown_log_level() {
        let file = write_config("log_level = \"loud\"\n");
        assert!(FormConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(FormConfig::load(Some(&missing)).is_err());
    }
}
