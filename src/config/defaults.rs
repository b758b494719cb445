//! Default values for configuration options.

use std::time::Duration;

/// Default delivery timeout in milliseconds (0 = wait for the response).
pub const TIMEOUT_MS: u64 = 0;

/// Deliveries are synchronous unless configured otherwise.
pub const ASYNC: bool = false;

/// Default path written by `slack-hook init`.
pub const CONFIG_FILE: &str = "slack-hook.toml";

/// Message the demo sends when none is given on the command line.
pub const DEMO_MESSAGE: &str = "an error happened!";

/// Default delivery timeout as Duration.
#[must_use]
pub const fn timeout() -> Duration {
    Duration::from_millis(TIMEOUT_MS)
}
