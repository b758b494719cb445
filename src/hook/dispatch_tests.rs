//! Deadline handling of a single send, on virtual time.

use std::time::Duration;

use tokio::time::Instant;

use super::super::test_fixtures::MockSender;
use super::*;
use crate::webhook::WebhookError;

fn payload() -> WebhookPayload {
    WebhookPayload::default()
}

#[tokio::test(start_paused = true)]
async fn zero_timeout_waits_however_long_the_send_takes() {
    let sender = MockSender::ok().with_delay(Duration::from_secs(600));
    let start = Instant::now();

    deliver(&sender, &payload(), Duration::ZERO).await.unwrap();

    assert!(start.elapsed() >= Duration::from_secs(600));
    assert_eq!(sender.sent().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn deadline_elapses_before_slow_send() {
    let sender = MockSender::ok().with_delay(Duration::from_millis(500));
    let start = Instant::now();

    let result = deliver(&sender, &payload(), Duration::from_millis(50)).await;

    assert!(matches!(result, Err(HookError::Timeout)));
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(50));
    assert!(elapsed < Duration::from_millis(500), "took {elapsed:?}");
    assert_eq!(sender.calls(), 1);
    assert!(sender.sent().is_empty());
}

#[tokio::test(start_paused = true)]
async fn early_failure_is_returned_without_waiting_for_deadline() {
    let sender = MockSender::failing();
    let start = Instant::now();

    let result = deliver(&sender, &payload(), Duration::from_secs(5)).await;

    assert!(matches!(
        result,
        Err(HookError::Webhook(WebhookError::Status { .. }))
    ));
    assert!(start.elapsed() < Duration::from_secs(5));
}

#[tokio::test(start_paused = true)]
async fn slow_success_inside_deadline_is_ok() {
    let sender = MockSender::ok().with_delay(Duration::from_millis(100));
    let start = Instant::now();

    deliver(&sender, &payload(), Duration::from_secs(1)).await.unwrap();

    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(100));
    assert!(elapsed < Duration::from_secs(1), "took {elapsed:?}");
    assert_eq!(sender.sent().len(), 1);
}
