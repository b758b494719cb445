//! Validated configuration after merging CLI and TOML sources.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use url::Url;

use crate::hook::SlackHook;
use crate::level::{ALL_LEVELS, Level, level_threshold};

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated hook configuration.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to merge CLI args with an optional TOML
/// config, or [`ValidatedConfig::from_toml`] when there is no command line.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    /// Webhook URL (required)
    pub url: Url,

    /// Forwarded levels; `None` forwards every level
    pub levels: Option<Vec<Level>>,

    /// Display name
    pub username: String,

    /// Channel override
    pub channel: String,

    /// Avatar emoji
    pub icon_emoji: String,

    /// Avatar image URL
    pub icon_url: String,

    /// Header label for attached field data
    pub field_header: String,

    /// Delivery timeout (zero = none)
    pub timeout: Duration,

    /// Fire-and-forget delivery
    pub async_dispatch: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let levels = self
            .levels
            .as_deref()
            .unwrap_or(&ALL_LEVELS)
            .iter()
            .map(|level| level.as_str())
            .collect::<Vec<_>>()
            .join(",");

        // The URL path is the webhook secret; only the host is printed.
        write!(
            f,
            "Config {{ host: {}, levels: [{}], channel: {}, timeout: {}ms, async: {} }}",
            self.url.host_str().unwrap_or_default(),
            levels,
            if self.channel.is_empty() {
                "default"
            } else {
                self.channel.as_str()
            },
            self.timeout.as_millis(),
            self.async_dispatch,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The URL is missing or invalid
    /// - Both `levels` and `min_level` are set
    /// - The level settings select no level
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let url = Self::resolve_url(cli, toml)?;
        let levels = Self::resolve_levels(cli, toml)?;

        let message = toml.map(|t| &t.message);
        let text = |value: Option<&String>| value.cloned().unwrap_or_default();

        let channel = cli
            .channel
            .clone()
            .unwrap_or_else(|| text(message.and_then(|m| m.channel.as_ref())));

        let timeout = cli
            .timeout_ms
            .or_else(|| toml.and_then(|t| t.webhook.timeout_ms))
            .map_or_else(defaults::timeout, Duration::from_millis);

        let async_dispatch = toml
            .and_then(|t| t.webhook.async_dispatch)
            .unwrap_or(defaults::ASYNC);

        Ok(Self {
            url,
            levels,
            username: text(message.and_then(|m| m.username.as_ref())),
            channel,
            icon_emoji: text(message.and_then(|m| m.icon_emoji.as_ref())),
            icon_url: text(message.and_then(|m| m.icon_url.as_ref())),
            field_header: text(message.and_then(|m| m.field_header.as_ref())),
            timeout,
            async_dispatch,
            verbose: cli.verbose,
        })
    }

    /// Creates a validated configuration from a TOML config alone.
    ///
    /// # Errors
    ///
    /// Same as [`from_raw`](Self::from_raw).
    pub fn from_toml(toml: &TomlConfig) -> Result<Self, ConfigError> {
        Self::from_raw(&Cli::default(), Some(toml))
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    /// Builds a reqwest-backed hook from this configuration.
    #[must_use]
    pub fn into_hook(self) -> SlackHook {
        let hook = SlackHook::new(self.url, Level::Error)
            .with_username(self.username)
            .with_channel(self.channel)
            .with_icon_emoji(self.icon_emoji)
            .with_icon_url(self.icon_url)
            .with_field_header(self.field_header)
            .with_timeout(self.timeout)
            .with_async(self.async_dispatch);

        match self.levels {
            Some(levels) => hook.with_levels(levels),
            None => hook.accept_all_levels(),
        }
    }

    fn resolve_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        // CLI takes precedence
        let url_str = cli
            .url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.webhook.url.as_deref()))
            .ok_or_else(|| {
                ConfigError::missing(field::URL, "Use --url or set webhook.url in config file")
            })?;

        let url = Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: url_str.to_string(),
                reason: format!("unsupported scheme '{}', expected http or https", url.scheme()),
            });
        }

        Ok(url)
    }

    fn resolve_levels(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Option<Vec<Level>>, ConfigError> {
        // --level replaces the file's settings entirely
        if let Some(level) = cli.level {
            return Ok(Some(vec![level]));
        }

        let Some(filter) = toml.map(|t| &t.filter) else {
            return Ok(None);
        };

        match (&filter.levels, filter.min_level) {
            (Some(_), Some(_)) => Err(ConfigError::ConflictingLevels),
            (Some(levels), None) if levels.is_empty() => Err(ConfigError::EmptyLevels {
                reason: "'levels' is an empty list".to_string(),
            }),
            (Some(levels), None) => Ok(Some(levels.clone())),
            (None, Some(min)) => {
                let levels = level_threshold(min);
                if levels.is_empty() {
                    return Err(ConfigError::EmptyLevels {
                        reason: format!("'{min}' has no place in the severity order"),
                    });
                }
                Ok(Some(levels.to_vec()))
            }
            (None, None) => Ok(None),
        }
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
