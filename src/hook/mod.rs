//! Log-to-Slack hook.
//!
//! This module provides:
//! - The hook itself ([`SlackHook`]) with level filtering and timed delivery
//! - The record it consumes ([`LogEntry`])
//! - Its error type ([`HookError`])
//! - A `tracing` layer adapter ([`SlackLayer`])
//!
//! # Delivery
//!
//! Each hook owns a single-worker tokio runtime, started together with the
//! webhook client on first use. Synchronous deliveries block the logging
//! thread until the webhook answers or the timeout fires; asynchronous
//! deliveries are spawned on that runtime and forgotten. Dropping the hook
//! abandons asynchronous deliveries still in flight.

mod dispatch;
mod entry;
mod error;
mod layer;
mod slack;

#[cfg(test)]
mod test_fixtures;

pub use dispatch::{DISPATCH_TARGET, DISPATCH_THREAD_NAME};
pub use entry::LogEntry;
pub use error::HookError;
pub use layer::SlackLayer;
pub use slack::SlackHook;
