//! Shared test fixtures for hook tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use url::Url;

use crate::hook::SlackHook;
use crate::level::Level;
use crate::webhook::{WebhookError, WebhookPayload, WebhookSender};

/// In-memory sender with a configurable delay and outcome.
#[derive(Debug, Default)]
pub struct MockSender {
    delay: Duration,
    fail: bool,
    panics: usize,
    sent: Mutex<Vec<WebhookPayload>>,
    calls: AtomicUsize,
}

impl MockSender {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Panics inside `send` for the first `count` calls, then behaves normally.
    pub fn panicking(count: usize) -> Self {
        Self {
            panics: count,
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of sends started (counted before the delay).
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Payloads whose send ran to completion.
    pub fn sent(&self) -> Vec<WebhookPayload> {
        self.sent.lock().unwrap().clone()
    }

    /// Polls until `expected` sends have started or `within` elapses.
    pub fn wait_for_calls(&self, expected: usize, within: Duration) -> bool {
        let deadline = Instant::now() + within;
        while Instant::now() < deadline {
            if self.calls() >= expected {
                return true;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        self.calls() >= expected
    }
}

impl WebhookSender for MockSender {
    async fn send(&self, payload: &WebhookPayload) -> Result<(), WebhookError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        assert!(call >= self.panics, "simulated sender crash on call {call}");

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.sent.lock().unwrap().push(payload.clone());

        if self.fail {
            return Err(WebhookError::Status {
                status: http::StatusCode::INTERNAL_SERVER_ERROR,
                body: Some("internal_error".to_string()),
            });
        }
        Ok(())
    }
}

impl WebhookSender for Arc<MockSender> {
    async fn send(&self, payload: &WebhookPayload) -> Result<(), WebhookError> {
        (**self).send(payload).await
    }
}

pub fn test_url() -> Url {
    Url::parse("https://hooks.example.com/services/T000/B000/SECRET").unwrap()
}

/// Builds a hook that hands out `sender` and counts connector invocations.
pub fn counting_hook(
    sender: &Arc<MockSender>,
    builds: &Arc<AtomicUsize>,
    level: Level,
) -> SlackHook<Arc<MockSender>> {
    let sender = Arc::clone(sender);
    let builds = Arc::clone(builds);
    SlackHook::with_connector(test_url(), level, move |_| {
        builds.fetch_add(1, Ordering::SeqCst);
        Arc::clone(&sender)
    })
}

/// Builds a hook that hands out `sender`.
pub fn mock_hook(sender: &Arc<MockSender>, level: Level) -> SlackHook<Arc<MockSender>> {
    counting_hook(sender, &Arc::new(AtomicUsize::new(0)), level)
}
