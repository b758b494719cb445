//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use slack_hook::SlackLayer;
use slack_hook::config::{ConfigError, field};
use slack_hook::webhook::WebhookSender;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - missing URL, bad config file, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - logging could not be set up.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::MissingRequired { field: f, .. } if *f == field::URL => {
            eprintln!("\nRun 'slack-hook init' to generate a configuration template.");
        }
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'slack-hook init' to generate a configuration template.");
        }
        ConfigError::ConflictingLevels => {
            eprintln!("\nKeep either [filter] levels or [filter] min_level, or pass --level.");
        }
        _ => {}
    }
}

/// Installs the global subscriber: console output plus the Slack layer.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn setup_tracing<W>(verbose: bool, slack: SlackLayer<W>) -> Result<(), TryInitError>
where
    W: WebhookSender + 'static,
{
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(slack)
        .try_init()
}
