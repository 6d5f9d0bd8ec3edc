//! Error handlers
//!
//! Logs fatal errors and maps them to process exit codes.

use crate::error::types::ConsoleError;
use log::error;

/// sysexits.h EX_IOERR
const EXIT_IO: i32 = 74;
/// sysexits.h EX_CONFIG
const EXIT_CONFIG: i32 = 78;

/// Handle a fatal console error
pub fn handle_error(err: &ConsoleError) {
    error!("Form console error: {}", err);
}

/// Convert error to a process exit code
pub fn exit_code(err: &ConsoleError) -> i32 {
    match err {
        ConsoleError::Io(_) => EXIT_IO,
        ConsoleError::Config(_) => EXIT_CONFIG,
    }
}
