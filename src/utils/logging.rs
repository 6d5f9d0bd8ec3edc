//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger::Env;

/// Setup logging with a default filter; `RUST_LOG` overrides it.
///
/// Logs go to stderr so console responses on stdout stay clean.
pub fn setup_logging(default_level: &str) {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();
}
