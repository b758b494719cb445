//! Delivery of payloads on a hook-owned tokio runtime.
//!
//! Log calls are synchronous and may come from any thread, including worker
//! threads of an application's own runtime. Every send therefore runs on a
//! small dedicated runtime, and synchronous callers wait on a plain channel
//! instead of entering a runtime themselves.

use std::sync::Arc;
use std::sync::mpsc;
use std::time::Duration;

use tokio::runtime::{Handle, Runtime};

use super::HookError;
use crate::webhook::{WebhookPayload, WebhookSender};

/// Name given to every thread of the dispatch runtime.
pub const DISPATCH_THREAD_NAME: &str = "slack-hook-dispatch";

/// Target for events emitted by the dispatcher itself.
pub const DISPATCH_TARGET: &str = "slack_hook::dispatch";

/// Owns the webhook sender and the runtime its requests run on.
pub(super) struct Dispatcher<W> {
    sender: Arc<W>,
    handle: Handle,
    runtime: Option<Runtime>,
}

impl<W: WebhookSender + 'static> Dispatcher<W> {
    /// Starts a single-worker runtime for `sender`.
    pub(super) fn new(sender: W) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name(DISPATCH_THREAD_NAME)
            .enable_all()
            .build()?;

        Ok(Self {
            sender: Arc::new(sender),
            handle: runtime.handle().clone(),
            runtime: Some(runtime),
        })
    }

    /// Sends `payload` and blocks the calling thread until the outcome is known
    /// or `timeout` elapses. A zero timeout waits indefinitely.
    pub(super) fn post_message(
        &self,
        payload: WebhookPayload,
        timeout: Duration,
    ) -> Result<(), HookError> {
        let (tx, rx) = mpsc::sync_channel(1);
        let sender = Arc::clone(&self.sender);

        self.handle.spawn(async move {
            let outcome = deliver(sender.as_ref(), &payload, timeout).await;
            // The caller only goes away if its thread died.
            let _ = tx.send(outcome);
        });

        rx.recv().map_err(|_| HookError::Dispatch)?
    }

    /// Sends `payload` in the background and returns immediately.
    ///
    /// The outcome is logged at debug level under [`DISPATCH_TARGET`] and is
    /// otherwise lost.
    pub(super) fn spawn_detached(&self, payload: WebhookPayload, timeout: Duration) {
        let sender = Arc::clone(&self.sender);

        self.handle.spawn(async move {
            if let Err(e) = deliver(sender.as_ref(), &payload, timeout).await {
                tracing::debug!(target: DISPATCH_TARGET, error = %e, "Asynchronous notification failed");
            }
        });
    }
}

/// Runs one send, racing it against `timeout` when the timeout is non-zero.
///
/// On expiry the send future is dropped; a request already on the wire may
/// still reach the server.
async fn deliver<W: WebhookSender>(
    sender: &W,
    payload: &WebhookPayload,
    timeout: Duration,
) -> Result<(), HookError> {
    if timeout.is_zero() {
        return Ok(sender.send(payload).await?);
    }

    match tokio::time::timeout(timeout, sender.send(payload)).await {
        Ok(outcome) => Ok(outcome?),
        Err(_elapsed) => Err(HookError::Timeout),
    }
}

impl<W> Drop for Dispatcher<W> {
    fn drop(&mut self) {
        // Dropping a runtime blocks; hooks may be dropped inside async code.
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
