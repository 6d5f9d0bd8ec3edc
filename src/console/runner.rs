use log::{debug, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::config::FormConfig;
use crate::error::ConsoleError;
use crate::protocol::responses::{ERROR, INFO, format_response};
use crate::protocol::{CommandStatus, handle_command, parse_command};
use crate::session::FormSession;

const MAX_LINE_LENGTH: usize = 4096;

/// Runs one form session until `QUIT` or end of input.
///
/// - Reads command lines from `reader`.
/// - Dispatches them with `handle_command` against a fresh `FormSession`.
/// - Writes responses to `writer`, flushing after every command.
pub async fn run_session<R, W>(
    mut reader: R,
    writer: &mut W,
    config: &FormConfig,
) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut session = FormSession::new();
    let mut line = String::new();

    info!("Form session started for {}", config.site_name);
    let greeting = format!(
        "Welcome to {} registration. Type HELP for commands.",
        config.site_name
    );
    writer
        .write_all(format_response(INFO, &greeting).as_bytes())
        .await?;
    writer.flush().await?;

    loop {
        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            info!("End of input, closing form session");
            break;
        }

        if line.len() > MAX_LINE_LENGTH {
            warn!("Discarded {} byte command line", line.len());
            writer
                .write_all(format_response(ERROR, "Command too long").as_bytes())
                .await?;
            writer.flush().await?;
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                debug!("Rejected command: {}", e);
                writer
                    .write_all(format_response(ERROR, &e.to_string()).as_bytes())
                    .await?;
                writer.flush().await?;
                continue;
            }
        };

        let result = handle_command(&mut session, &command, config);
        if let Some(msg) = result.message {
            writer.write_all(msg.as_bytes()).await?;
        }
        writer.flush().await?;

        if result.status == CommandStatus::CloseSession {
            info!("Form session closed by user");
            break;
        }
    }

    Ok(())
}
