//! `tracing` integration: a [`Layer`] that feeds events to a [`SlackHook`].

use std::fmt;
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use super::dispatch::{DISPATCH_TARGET, DISPATCH_THREAD_NAME};
use super::{LogEntry, SlackHook};
use crate::webhook::{HttpWebhook, ReqwestClient, WebhookSender};

/// A `tracing` layer that forwards events to a [`SlackHook`].
///
/// Hook failures are written to stderr, mirroring how loggers report errors
/// from their own hooks. Events produced while delivering a notification are
/// never forwarded, so a failing delivery cannot feed back into itself.
///
/// # Example
///
/// ```no_run
/// use slack_hook::{Level, SlackHook};
/// use tracing_subscriber::prelude::*;
/// use url::Url;
///
/// let url = Url::parse("https://hooks.slack.com/services/T000/B000/XXXX").unwrap();
/// tracing_subscriber::registry()
///     .with(tracing_subscriber::fmt::layer())
///     .with(SlackHook::new(url, Level::Error).layer())
///     .init();
///
/// tracing::error!("an error happened!");
/// ```
pub struct SlackLayer<W = HttpWebhook<ReqwestClient>> {
    hook: Arc<SlackHook<W>>,
}

impl<W> SlackLayer<W> {
    /// Creates a layer backed by a shared hook.
    #[must_use]
    pub const fn new(hook: Arc<SlackHook<W>>) -> Self {
        Self { hook }
    }

    /// Returns the underlying hook.
    #[must_use]
    pub const fn hook(&self) -> &Arc<SlackHook<W>> {
        &self.hook
    }
}

impl<W> fmt::Debug for SlackLayer<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlackLayer").field("hook", &self.hook).finish()
    }
}

impl<S, W> Layer<S> for SlackLayer<W>
where
    S: Subscriber,
    W: WebhookSender + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if metadata.target() == DISPATCH_TARGET || on_dispatch_thread() {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let entry = LogEntry {
            level: (*metadata.level()).into(),
            message: visitor.message,
            target: metadata.target().to_string(),
        };

        if let Err(e) = self.hook.handle(&entry) {
            // Logging through tracing here would re-enter this layer.
            eprintln!("slack-hook: failed to deliver log notification: {e}");
        }
    }
}

/// True on threads of the dispatch runtime, where HTTP client internals emit
/// their own events.
fn on_dispatch_thread() -> bool {
    std::thread::current().name() == Some(DISPATCH_THREAD_NAME)
}

/// Extracts the `message` field of an event.
#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }
}
