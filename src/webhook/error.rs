//! Error types for webhook delivery.

use thiserror::Error;

/// Transport-level failure while talking to the webhook endpoint.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// TLS errors, and failures while reading the response body.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The HTTP client's own request timeout elapsed.
    #[error("Request timed out")]
    Timeout,

    /// The request could not be built from the configured URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Failure to deliver a notification payload.
///
/// Every variant is terminal: delivery is a single attempt.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The request never produced a response.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The endpoint answered with a non-2xx status.
    #[error("Webhook returned HTTP {status}: {}", .body.as_deref().unwrap_or("<binary body>"))]
    Status {
        /// Response status code
        status: http::StatusCode,
        /// Response body, if it was valid UTF-8
        body: Option<String>,
    },

    /// The payload could not be encoded as JSON.
    #[error("Failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),
}
