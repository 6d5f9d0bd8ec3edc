//! Regform - Entry Point
//!
//! Interactive console for the registration form validation engine.

use log::info;
use std::path::PathBuf;
use tokio::io::BufReader;

use regform::FormConfig;
use regform::console::run_session;
use regform::error::ConsoleError;
use regform::error::handlers::{exit_code, handle_error};
use regform::utils::setup_logging;

#[tokio::main]
async fn main() {
    // Optional config file path as the only argument
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);

    let config = match FormConfig::load(config_path.as_deref()) {
        Ok(config) => {
            setup_logging(&config.log_level);
            config
        }
        Err(e) => {
            setup_logging("info");
            fail(ConsoleError::from(e));
        }
    };

    info!("Launching form console...");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    if let Err(e) = run_session(stdin, &mut stdout, &config).await {
        fail(e);
    }
}

fn fail(err: ConsoleError) -> ! {
    handle_error(&err);
    std::process::exit(exit_code(&err));
}
