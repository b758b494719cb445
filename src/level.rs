//! Severity levels, their canonical ordering, and attachment colors.
//!
//! The ordering and color tables are immutable statics; nothing mutates
//! them after the program starts.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Severity of a log entry.
///
/// [`Level::Trace`] exists so that every `tracing` level has a counterpart.
/// It is not part of [`ALL_LEVELS`] and has no attachment color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Finest-grained diagnostics, below the canonical range
    Trace,
    /// Debugging information
    Debug,
    /// Normal operational messages
    Info,
    /// Something unexpected but recoverable
    Warn,
    /// An operation failed
    Error,
    /// The application cannot continue
    Fatal,
    /// The application is panicking
    Panic,
}

/// Every supported level, ordered from least to most severe.
pub static ALL_LEVELS: [Level; 6] = [
    Level::Debug,
    Level::Info,
    Level::Warn,
    Level::Error,
    Level::Fatal,
    Level::Panic,
];

/// Attachment color for each level. Levels missing here get an empty color.
static LEVEL_COLORS: [(Level, &str); 6] = [
    (Level::Debug, "#9B30FF"),
    (Level::Info, "good"),
    (Level::Warn, "warning"),
    (Level::Error, "danger"),
    (Level::Fatal, "danger"),
    (Level::Panic, "danger"),
];

impl Level {
    /// Returns the Slack attachment color for this level.
    ///
    /// Unmapped levels yield an empty string rather than an error.
    ///
    /// # Example
    ///
    /// ```
    /// use slack_hook::Level;
    ///
    /// assert_eq!(Level::Error.color(), "danger");
    /// assert_eq!(Level::Trace.color(), "");
    /// ```
    #[must_use]
    pub fn color(self) -> &'static str {
        LEVEL_COLORS
            .iter()
            .find(|(level, _)| *level == self)
            .map_or("", |(_, color)| *color)
    }

    /// Returns the lowercase name of this level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
            Self::Panic => "panic",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a level name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown level '{0}': expected trace, debug, info, warn, error, fatal, or panic")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            "panic" => Ok(Self::Panic),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

impl From<tracing::Level> for Level {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE => Self::Trace,
            tracing::Level::DEBUG => Self::Debug,
            tracing::Level::INFO => Self::Info,
            tracing::Level::WARN => Self::Warn,
            _ => Self::Error,
        }
    }
}

/// Returns `level` and every more severe level, in canonical order.
///
/// Returns an empty slice if `level` is not one of [`ALL_LEVELS`].
/// Useful for building an "at or above" accepted set explicitly.
///
/// # Example
///
/// ```
/// use slack_hook::{Level, level_threshold};
///
/// assert_eq!(
///     level_threshold(Level::Warn),
///     &[Level::Warn, Level::Error, Level::Fatal, Level::Panic]
/// );
/// assert!(level_threshold(Level::Trace).is_empty());
/// ```
#[must_use]
pub fn level_threshold(level: Level) -> &'static [Level] {
    match ALL_LEVELS.iter().position(|l| *l == level) {
        Some(start) => &ALL_LEVELS[start..],
        None => &[],
    }
}
