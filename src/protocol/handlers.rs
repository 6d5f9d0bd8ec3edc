//! Command handlers for the form console.
//!
//! Each handler plays the part of the page script: it updates the session,
//! calls into the validation engine and renders what the page would show.

use log::{debug, info};

use crate::config::FormConfig;
use crate::fields::{FieldFeedback, FieldKind, FieldValue};
use crate::protocol::responses::{
    CLEAR, ERROR, INFO, OK, format_feedback, format_response, format_strength,
};
use crate::protocol::{Command, CommandResult, CommandStatus};
use crate::session::FormSession;
use crate::strength::evaluate_strength;
use crate::validation::{
    confirmation_feedback, validate_all, validate_field_feedback, validate_newsletter_email,
};

const HELP_TEXT: [&str; 10] = [
    "SET <field> <value>   type a value into a field",
    "CLEAR <field>         empty a field",
    "TERMS <on|off>        accept or decline the terms and conditions",
    "STRENGTH <password>   score a password without storing it",
    "SUBMIT                validate and submit the registration form",
    "NEWSLETTER <email>    subscribe to the newsletter",
    "STATUS                show the form contents",
    "RESET                 clear the form",
    "HELP                  show this list",
    "QUIT                  leave",
];

/// Dispatches a parsed command against the session.
pub fn handle_command(
    session: &mut FormSession,
    command: &Command,
    config: &FormConfig,
) -> CommandResult {
    match command {
        Command::Set { field, value } => handle_cmd_set(session, field, value, config),
        Command::Clear(field) => handle_cmd_clear(session, field),
        Command::Terms(accepted) => handle_cmd_terms(session, *accepted),
        Command::Strength(password) => {
            CommandResult::success(format_strength(&evaluate_strength(password)))
        }
        Command::Submit => handle_cmd_submit(session, config),
        Command::Newsletter(email) => handle_cmd_newsletter(email, config),
        Command::Status => handle_cmd_status(session),
        Command::Reset => handle_cmd_reset(session),
        Command::Help => handle_cmd_help(),
        Command::Quit => CommandResult {
            status: CommandStatus::CloseSession,
            message: Some(format_response(INFO, "Goodbye")),
        },
    }
}

/// Stores the value and renders the same feedback the page shows on input.
fn handle_cmd_set(
    session: &mut FormSession,
    field: &FieldKind,
    value: &str,
    config: &FormConfig,
) -> CommandResult {
    session.set(field.clone(), value);

    let required = config.required_set().contains(field);
    let feedback = match field {
        // The confirmation handler runs after the generic one and always
        // wins; an empty box clears the feedback.
        FieldKind::ConfirmPassword => {
            confirmation_feedback(session.value(&FieldKind::Password), value)
        }
        _ => validate_field_feedback(&FieldValue::new(field.clone(), value), required),
    };

    let mut message = format_feedback(field, &feedback);
    if *field == FieldKind::Password {
        message.push_str(&format_strength(&evaluate_strength(value)));
    }

    let status = match feedback {
        FieldFeedback::Error(_) => CommandStatus::Failure,
        _ => CommandStatus::Success,
    };
    CommandResult {
        status,
        message: Some(message),
    }
}

fn handle_cmd_clear(session: &mut FormSession, field: &FieldKind) -> CommandResult {
    if session.clear(field) {
        CommandResult::success(format_response(CLEAR, field.key()))
    } else {
        CommandResult::failure(format_response(ERROR, &format!("{}: nothing to clear", field)))
    }
}

fn handle_cmd_terms(session: &mut FormSession, accepted: bool) -> CommandResult {
    session.set_terms_accepted(accepted);
    if accepted {
        CommandResult::success(format_response(OK, FieldKind::Terms.key()))
    } else {
        CommandResult::success(format_response(CLEAR, FieldKind::Terms.key()))
    }
}

/// Validates every required field at once; on success the form is reset.
///
/// Optional fields are only checked as they are typed, not on submit.
fn handle_cmd_submit(session: &mut FormSession, config: &FormConfig) -> CommandResult {
    let required = config.required_set();
    let fields: Vec<FieldValue> = session
        .field_values()
        .into_iter()
        .filter(|field| required.contains(&field.name))
        .collect();
    let report = validate_all(&fields, &required, session.terms_accepted());

    if !report.all_valid {
        let failures = report.failures();
        info!("Registration rejected: {} invalid fields", failures.len());

        let message: String = failures
            .iter()
            .map(|(field, verdict)| {
                format_response(ERROR, &format!("{}: {}", field, verdict.message))
            })
            .collect();
        return CommandResult::failure(message);
    }

    info!("Registration accepted");
    session.reset();

    let mut message = format_response(OK, &config.registration_success_message);
    message.push_str(&format_strength(&evaluate_strength("")));
    CommandResult::success(message)
}

fn handle_cmd_newsletter(email: &str, config: &FormConfig) -> CommandResult {
    let verdict = validate_newsletter_email(email);
    if verdict.valid {
        info!("Newsletter subscription accepted");
        CommandResult::success(format_response(OK, &config.newsletter_success_message))
    } else {
        debug!("Newsletter subscription rejected");
        CommandResult::failure(format_response(ERROR, &verdict.message))
    }
}

/// Lists stored fields. Secret values are masked.
fn handle_cmd_status(session: &FormSession) -> CommandResult {
    let mut message: String = session
        .entries()
        .into_iter()
        .map(|(field, value)| {
            let shown = if field.is_secret() {
                "*".repeat(value.chars().count())
            } else {
                value.to_string()
            };
            format_response(INFO, &format!("{} = {}", field, shown))
        })
        .collect();

    let terms = if session.terms_accepted() {
        "accepted"
    } else {
        "not accepted"
    };
    message.push_str(&format_response(INFO, &format!("terms {}", terms)));
    CommandResult::success(message)
}

fn handle_cmd_reset(session: &mut FormSession) -> CommandResult {
    session.reset();
    info!("Form reset");

    let mut message = format_response(INFO, "Form cleared");
    message.push_str(&format_strength(&evaluate_strength("")));
    CommandResult::success(message)
}

fn handle_cmd_help() -> CommandResult {
    let message: String = HELP_TEXT
        .iter()
        .map(|line| format_response(INFO, line))
        .collect();
    CommandResult::success(message)
}
