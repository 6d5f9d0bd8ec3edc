//! Error handling
//!
//! Defines error types and handling for the form console.

pub mod handlers;
pub mod types;

pub use types::*;
