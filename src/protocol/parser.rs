//! Command parser
//!
//! Turns a console line into a `Command`. Verbs are case-insensitive; field
//! values are kept exactly as typed so trimming stays the validator's job.

use crate::error::CommandError;
use crate::fields::FieldKind;
use crate::protocol::Command;

/// Splits off the first whitespace-delimited word.
fn split_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (input, ""),
    }
}

fn parse_toggle(arg: &str) -> Result<bool, CommandError> {
    match arg.trim().to_ascii_lowercase().as_str() {
        "on" | "yes" | "true" | "1" => Ok(true),
        "off" | "no" | "false" | "0" => Ok(false),
        "" => Err(CommandError::MissingArgument {
            command: "TERMS",
            argument: "value (on/off)",
        }),
        other => Err(CommandError::InvalidToggle(other.to_string())),
    }
}

/// Parses one raw input line.
pub fn parse_command(raw: &str) -> Result<Command, CommandError> {
    let line = raw.trim_end_matches(['\r', '\n']).trim_start();
    if line.trim().is_empty() {
        return Err(CommandError::EmptyLine);
    }

    let (verb, rest) = split_word(line);

    match verb.to_ascii_uppercase().as_str() {
        "SET" => {
            let (field, value) = split_word(rest.trim_start());
            if field.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "SET",
                    argument: "field name",
                });
            }
            Ok(Command::Set {
                field: FieldKind::from_key(field),
                value: value.to_string(),
            })
        }
        "CLEAR" => match rest.trim() {
            "" => Err(CommandError::MissingArgument {
                command: "CLEAR",
                argument: "field name",
            }),
            field => Ok(Command::Clear(FieldKind::from_key(field))),
        },
        "TERMS" => parse_toggle(rest).map(Command::Terms),
        "STRENGTH" => Ok(Command::Strength(rest.to_string())),
        "SUBMIT" => Ok(Command::Submit),
        "NEWSLETTER" => Ok(Command::Newsletter(rest.to_string())),
        "STATUS" => Ok(Command::Status),
        "RESET" => Ok(Command::Reset),
        "HELP" | "?" => Ok(Command::Help),
        "QUIT" | "Q" | "EXIT" => Ok(Command::Quit),
        _ => Err(CommandError::UnknownCommand(verb.to_string())),
    }
}
