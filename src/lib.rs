//! slack-hook: log-to-Slack notifications
//!
//! A hook that forwards log entries at selected levels to a Slack incoming
//! webhook, usable as a plain callback or as a `tracing` layer.

pub mod config;
pub mod hook;
pub mod level;
pub mod webhook;

pub use hook::{HookError, LogEntry, SlackHook, SlackLayer};
pub use level::{ALL_LEVELS, Level, level_threshold};
