//! Error types
//!
//! Defines error types for the console and its configuration. The validation
//! engine itself never fails; bad input there is an invalid verdict.

use std::fmt;
use std::io;

/// Console command parsing errors
#[derive(Debug, PartialEq, Eq)]
pub enum CommandError {
    EmptyLine,
    UnknownCommand(String),
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    InvalidToggle(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::EmptyLine => write!(f, "Empty command"),
            CommandError::UnknownCommand(c) => write!(f, "Unknown command: {}", c),
            CommandError::MissingArgument { command, argument } => {
                write!(f, "{} requires a {}", command, argument)
            }
            CommandError::InvalidToggle(v) => {
                write!(f, "Expected on/off, yes/no, true/false or 1/0, got: {}", v)
            }
        }
    }
}

impl std::error::Error for CommandError {}

/// Errors that end a console session
#[derive(Debug)]
pub enum ConsoleError {
    Io(io::Error),
    Config(config::ConfigError),
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::Io(e) => write!(f, "I/O error: {}", e),
            ConsoleError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConsoleError::Io(e) => Some(e),
            ConsoleError::Config(e) => Some(e),
        }
    }
}

impl From<io::Error> for ConsoleError {
    fn from(error: io::Error) -> Self {
        ConsoleError::Io(error)
    }
}

impl From<config::ConfigError> for ConsoleError {
    fn from(error: config::ConfigError) -> Self {
        ConsoleError::Config(error)
    }
}
