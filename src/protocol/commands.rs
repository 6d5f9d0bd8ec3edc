//! Module `commands`
//!
//! Defines the console command model and the result of executing a command.

use crate::fields::FieldKind;

/// A console command parsed from one input line.
#[derive(Debug, PartialEq)]
pub enum Command {
    /// Type a value into a field
    Set { field: FieldKind, value: String },
    /// Empty a field
    Clear(FieldKind),
    /// Tick or untick the terms checkbox
    Terms(bool),
    /// Score a password without storing it
    Strength(String),
    Submit,
    /// Newsletter sign-up, independent of the registration form
    Newsletter(String),
    Status,
    Reset,
    Help,
    Quit,
}

/// Represents the outcome status of executing a command.
#[derive(Debug, PartialEq)]
pub enum CommandStatus {
    Success,
    Failure,
    CloseSession,
}

/// Status plus the response text to write back, if any.
#[derive(Debug)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}

impl CommandResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Success,
            message: Some(message.into()),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Failure,
            message: Some(message.into()),
        }
    }
}
