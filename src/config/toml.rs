//! TOML configuration file parsing.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;
use crate::level::Level;

/// Root configuration structure from TOML file.
///
/// All fields are optional so a file can be combined with CLI overrides.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Webhook endpoint and delivery settings
    #[serde(default)]
    pub webhook: WebhookSection,

    /// Which levels are forwarded
    #[serde(default)]
    pub filter: FilterSection,

    /// How the message is presented in the channel
    #[serde(default)]
    pub message: MessageSection,
}

/// Webhook configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSection {
    /// Incoming webhook URL
    pub url: Option<String>,

    /// Delivery timeout in milliseconds (0 = none)
    pub timeout_ms: Option<u64>,

    /// Fire-and-forget delivery
    #[serde(rename = "async")]
    pub async_dispatch: Option<bool>,
}

/// Level filter section.
///
/// `levels` and `min_level` are mutually exclusive; with neither, every
/// level is forwarded.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterSection {
    /// Exact set of levels to forward
    pub levels: Option<Vec<Level>>,

    /// Forward this level and everything more severe
    pub min_level: Option<Level>,
}

/// Message presentation section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageSection {
    /// Display name
    pub username: Option<String>,

    /// Channel override, e.g. `#alerts`
    pub channel: Option<String>,

    /// Avatar emoji, e.g. `:ghost:`
    pub icon_emoji: Option<String>,

    /// Avatar image URL
    pub icon_url: Option<String>,

    /// Header label for attached field data
    pub field_header: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r##"# slack-hook configuration file

[webhook]
# Slack incoming webhook URL (required, can be overridden by --url)
# url = "https://hooks.slack.com/services/XXXXX/YYYYY/ZZZZZ"

# Delivery timeout in milliseconds; 0 waits for the response (default: 0)
# timeout_ms = 3000

# Send without waiting for the result (default: false)
# Pending sends are abandoned when the program exits.
# async = false

[filter]
# Forward exactly these levels
# Accepted values: "debug", "info", "warn", "error", "fatal", "panic", "trace"
# levels = ["error", "fatal", "panic"]

# Or forward this level and everything more severe (do not combine with `levels`)
min_level = "error"

[message]
# username = "my-app"
# channel = "#alerts"
# icon_emoji = ":ghost:"
# icon_url = "https://example.com/icon.png"
# field_header = "Fields"
"##
    .to_string()
}
