//! The Slack notification hook.

use std::fmt;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use url::Url;

use super::dispatch::{DISPATCH_TARGET, Dispatcher};
use super::{HookError, LogEntry, SlackLayer};
use crate::level::{ALL_LEVELS, Level};
use crate::webhook::{
    Attachment, HttpWebhook, ReqwestClient, WebhookPayload, WebhookSender,
};

type Connector<W> = Box<dyn Fn(&Url) -> W + Send + Sync>;

/// Forwards log entries at accepted levels to a Slack incoming webhook.
///
/// The webhook client is built lazily from the URL on the first call to
/// [`handle`](Self::handle), exactly once even when several threads log
/// concurrently. Configuration is fixed once the hook is shared through an
/// [`Arc`] or turned into a [`SlackLayer`].
///
/// # Type Parameters
///
/// - `W`: the sender built by the connector (defaults to [`HttpWebhook`] over reqwest)
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use std::time::Duration;
/// use slack_hook::{Level, LogEntry, SlackHook, level_threshold};
/// use url::Url;
///
/// let url = Url::parse("https://hooks.slack.com/services/T000/B000/XXXX").unwrap();
/// let hook = Arc::new(
///     SlackHook::new(url, Level::Error)
///         .with_levels(level_threshold(Level::Warn).iter().copied())
///         .with_channel("#alerts")
///         .with_timeout(Duration::from_secs(3)),
/// );
///
/// let callback = hook.callback();
/// callback(&LogEntry::new(Level::Error, "disk full")).unwrap();
/// ```
pub struct SlackHook<W = HttpWebhook<ReqwestClient>> {
    accepted_levels: Option<Vec<Level>>,
    url: Url,
    username: String,
    channel: String,
    icon_emoji: String,
    icon_url: String,
    field_header: String,
    timeout: Duration,
    async_dispatch: bool,
    connector: Connector<W>,
    dispatcher: OnceLock<Result<Dispatcher<W>, String>>,
}

impl SlackHook {
    /// Creates a hook that forwards only entries at exactly `level`.
    ///
    /// Use [`with_levels`](Self::with_levels) together with
    /// [`level_threshold`](crate::level_threshold) for "at or above" behavior.
    #[must_use]
    pub fn new(url: Url, level: Level) -> Self {
        Self::with_connector(url, level, |url| {
            HttpWebhook::new(ReqwestClient::new(), url.clone())
        })
    }
}

impl<W> SlackHook<W> {
    /// Creates a hook whose sender is built by `connector` on first use.
    #[must_use]
    pub fn with_connector(
        url: Url,
        level: Level,
        connector: impl Fn(&Url) -> W + Send + Sync + 'static,
    ) -> Self {
        Self {
            accepted_levels: Some(vec![level]),
            url,
            username: String::new(),
            channel: String::new(),
            icon_emoji: String::new(),
            icon_url: String::new(),
            field_header: String::new(),
            timeout: Duration::ZERO,
            async_dispatch: false,
            connector: Box::new(connector),
            dispatcher: OnceLock::new(),
        }
    }

    /// Replaces the accepted-level set.
    #[must_use]
    pub fn with_levels(mut self, levels: impl IntoIterator<Item = Level>) -> Self {
        self.accepted_levels = Some(levels.into_iter().collect());
        self
    }

    /// Unsets the accepted-level set so that every level is forwarded.
    #[must_use]
    pub fn accept_all_levels(mut self) -> Self {
        self.accepted_levels = None;
        self
    }

    /// Sets the display name shown for the message.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the target channel, e.g. `#alerts`.
    #[must_use]
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    /// Sets the avatar emoji, e.g. `:ghost:`.
    #[must_use]
    pub fn with_icon_emoji(mut self, icon_emoji: impl Into<String>) -> Self {
        self.icon_emoji = icon_emoji.into();
        self
    }

    /// Sets the avatar image URL.
    #[must_use]
    pub fn with_icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = icon_url.into();
        self
    }

    /// Sets the header label for attached field data.
    ///
    /// Stored for configuration completeness; payloads do not carry fields.
    #[must_use]
    pub fn with_field_header(mut self, field_header: impl Into<String>) -> Self {
        self.field_header = field_header.into();
        self
    }

    /// Sets the delivery deadline. [`Duration::ZERO`] waits for the response
    /// however long it takes.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enables fire-and-forget delivery.
    #[must_use]
    pub const fn with_async(mut self, async_dispatch: bool) -> Self {
        self.async_dispatch = async_dispatch;
        self
    }

    /// Returns the levels this hook forwards.
    ///
    /// An unset accepted-level set reports every level in [`ALL_LEVELS`].
    #[must_use]
    pub fn levels(&self) -> &[Level] {
        self.accepted_levels.as_deref().unwrap_or(&ALL_LEVELS)
    }

    /// Returns the webhook URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Returns the display name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the channel override.
    #[must_use]
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Returns the avatar emoji.
    #[must_use]
    pub fn icon_emoji(&self) -> &str {
        &self.icon_emoji
    }

    /// Returns the avatar image URL.
    #[must_use]
    pub fn icon_url(&self) -> &str {
        &self.icon_url
    }

    /// Returns the field header label.
    #[must_use]
    pub fn field_header(&self) -> &str {
        &self.field_header
    }

    /// Returns the delivery deadline (zero means none).
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns true if delivery is fire-and-forget.
    #[must_use]
    pub const fn is_async(&self) -> bool {
        self.async_dispatch
    }

    fn is_accepted_level(&self, level: Level) -> bool {
        self.levels().contains(&level)
    }

    fn build_payload(&self, entry: &LogEntry) -> WebhookPayload {
        WebhookPayload {
            username: self.username.clone(),
            channel: self.channel.clone(),
            icon_emoji: self.icon_emoji.clone(),
            icon_url: self.icon_url.clone(),
            attachments: vec![Attachment::message(
                entry.message.as_str(),
                entry.level.color(),
            )],
        }
    }
}

impl<W: WebhookSender + 'static> SlackHook<W> {
    /// Processes one log entry.
    ///
    /// Entries outside the accepted set return `Ok(())` without touching the
    /// network. In asynchronous mode accepted entries also return `Ok(())`
    /// immediately and the delivery result is discarded.
    ///
    /// # Errors
    ///
    /// In synchronous mode, returns:
    /// - [`HookError::Webhook`] when the request fails or is rejected
    /// - [`HookError::Timeout`] when the configured deadline elapses first
    /// - [`HookError::Init`] when the client could not be created
    /// - [`HookError::Dispatch`] when the delivery task died
    pub fn handle(&self, entry: &LogEntry) -> Result<(), HookError> {
        let dispatcher = self.dispatcher.get_or_init(|| self.connect());

        if !self.is_accepted_level(entry.level) {
            return Ok(());
        }

        let dispatcher = dispatcher
            .as_ref()
            .map_err(|reason| HookError::Init(reason.clone()))?;
        let payload = self.build_payload(entry);

        if self.async_dispatch {
            dispatcher.spawn_detached(payload, self.timeout);
            return Ok(());
        }

        dispatcher.post_message(payload, self.timeout)
    }

    /// Returns a callback suitable for registration with a logging pipeline.
    ///
    /// The callback shares this hook, so the client is still built only once
    /// no matter how many callbacks are handed out.
    pub fn callback(
        self: &Arc<Self>,
    ) -> impl Fn(&LogEntry) -> Result<(), HookError> + Send + Sync + 'static {
        let hook = Arc::clone(self);
        move |entry: &LogEntry| hook.handle(entry)
    }

    /// Wraps this hook in a `tracing` layer.
    #[must_use]
    pub fn layer(self) -> SlackLayer<W> {
        SlackLayer::new(Arc::new(self))
    }

    fn connect(&self) -> Result<Dispatcher<W>, String> {
        let sender = (self.connector)(&self.url);
        let dispatcher = Dispatcher::new(sender).map_err(|e| e.to_string())?;

        tracing::debug!(
            target: DISPATCH_TARGET,
            host = self.url.host_str().unwrap_or_default(),
            "Initialized webhook client"
        );

        Ok(dispatcher)
    }
}

impl<W> fmt::Debug for SlackHook<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The webhook URL path is a credential; only the host is shown.
        f.debug_struct("SlackHook")
            .field("levels", &self.levels())
            .field("host", &self.url.host_str().unwrap_or_default())
            .field("username", &self.username)
            .field("channel", &self.channel)
            .field("timeout", &self.timeout)
            .field("async", &self.async_dispatch)
            .field("initialized", &self.dispatcher.get().is_some())
            .finish_non_exhaustive()
    }
}
