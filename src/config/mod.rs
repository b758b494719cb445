//! Configuration layer for slack-hook.
//!
//! This module provides:
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration and hook construction ([`ValidatedConfig`])
//! - CLI argument parsing for the demo binary ([`Cli`], [`Command`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **TOML config file**
//! 3. **Built-in defaults**
//!
//! `--level` replaces the file's `[filter]` section entirely. The `async`
//! flag is file-only.
//!
//! # Level Settings
//!
//! `[filter]` accepts either `levels` (an exact set) or `min_level` (that
//! level and everything more severe). Setting both is an error. Setting
//! neither forwards every level.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{FilterSection, MessageSection, TomlConfig, WebhookSection, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
