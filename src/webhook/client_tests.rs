//! Tests for `ReqwestClient`.
//!
//! These cover construction and the error mapping for unreachable hosts;
//! real deliveries are exercised against live webhooks by hand.

use super::*;

#[test]
fn default_matches_new() {
    let debug_new = format!("{:?}", ReqwestClient::new());
    let debug_default = format!("{:?}", ReqwestClient::default());

    assert!(debug_new.contains("ReqwestClient"));
    assert!(debug_default.contains("ReqwestClient"));
}

#[test]
fn from_client_accepts_configured_client() {
    let custom = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .unwrap();
    let client = ReqwestClient::from_client(custom);

    assert!(format!("{client:?}").contains("ReqwestClient"));
}

#[test]
fn client_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestClient>();
}

#[tokio::test]
async fn unreachable_host_is_connection_error_or_proxy_response() {
    let client = ReqwestClient::new();
    let url = url::Url::parse("http://invalid.invalid.invalid/hook").unwrap();

    let result = client.request(HttpRequest::post(url)).await;

    // A proxy in the environment may answer with its own error status.
    match result {
        Err(HttpError::Connection(_)) => {}
        Ok(resp) if !resp.is_success() => {}
        other => panic!("Expected connection error or proxy error response, got {other:?}"),
    }
}
