//! CLI argument parsing using clap.
//!
//! Only the demo binary uses this; library users configure hooks in code or
//! through [`TomlConfig`](super::TomlConfig).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::level::Level;

/// slack-hook: send log events to a Slack channel
///
/// Installs a tracing subscriber with the Slack layer and emits a debug
/// and an error event.
#[derive(Debug, Default, Parser)]
#[command(name = "slack-hook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Incoming webhook URL
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Forward only this level (replaces the file's level settings)
    #[arg(long)]
    pub level: Option<Level>,

    /// Channel override, e.g. '#alerts'
    #[arg(long)]
    pub channel: Option<String>,

    /// Delivery timeout in milliseconds (0 = wait for the response)
    #[arg(long = "timeout-ms")]
    pub timeout_ms: Option<u64>,

    /// Text of the error event to emit
    #[arg(long, short)]
    pub message: Option<String>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for slack-hook
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = super::defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses command-line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
