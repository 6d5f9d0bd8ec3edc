//! Utility modules
//!
//! Shared helpers for the form console binary.

pub mod logging;

pub use logging::setup_logging;
