//! Form console
//!
//! Drives a registration form from a line-oriented reader and writer, acting
//! as the presentation layer over the validation engine.

pub mod runner;

pub use runner::run_session;
