//! Error type returned by the hook callback.

use thiserror::Error;

use crate::webhook::WebhookError;

/// Failure to deliver a log notification synchronously.
///
/// Asynchronous deliveries never surface these; their outcome is discarded.
#[derive(Debug, Error)]
pub enum HookError {
    /// The webhook request itself failed (transport error or rejected payload).
    #[error(transparent)]
    Webhook(#[from] WebhookError),

    /// The configured deadline elapsed before the request finished.
    #[error("Request timed out")]
    Timeout,

    /// The webhook client or its dispatch runtime could not be created.
    ///
    /// Construction is attempted once per hook; the failure is sticky.
    #[error("Failed to initialize webhook client: {0}")]
    Init(String),

    /// The delivery task ended without reporting an outcome.
    #[error("Notification task stopped before reporting a result")]
    Dispatch,
}
