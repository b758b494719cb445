//! slack-hook demo
//!
//! Sends a sample error event to a Slack channel through the tracing layer.

use slack_hook::SlackLayer;
use slack_hook::config::{Cli, Command, ValidatedConfig, defaults, write_default_config};
use std::process::ExitCode;
use std::sync::Arc;

mod app;

use app::{exit_code, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Some(Command::Init { output }) = &cli.command {
        return handle_init(output);
    }

    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    let verbose = config.verbose;
    let summary = config.to_string();
    let hook = Arc::new(config.into_hook());

    if let Err(e) = setup_tracing(verbose, SlackLayer::new(Arc::clone(&hook))) {
        eprintln!("Failed to install logging: {e}");
        return exit_code::runtime_error();
    }
    tracing::info!("{summary}");

    let message = cli.message.as_deref().unwrap_or(defaults::DEMO_MESSAGE);

    tracing::debug!("don't need to send a message");
    tracing::error!("{message}");

    if hook.is_async() {
        tracing::info!("Delivery was asynchronous; pending notifications end with the process");
    }

    exit_code::SUCCESS
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}
