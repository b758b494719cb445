//! Webhook sender trait and HTTP implementation.

use super::{HttpClient, HttpRequest, WebhookError, WebhookPayload};

/// Delivers a notification payload to an external service.
///
/// This is the seam between the logging hook and the network: the hook only
/// needs "send this payload and tell me how it went", which keeps it testable
/// with in-memory senders.
///
/// # Implementation Notes
///
/// Delivery is a single attempt. Implementations must not retry.
pub trait WebhookSender: Send + Sync {
    /// Sends one payload.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError`] if the payload could not be encoded, the
    /// request failed, or the endpoint rejected it.
    fn send(
        &self,
        payload: &WebhookPayload,
    ) -> impl std::future::Future<Output = Result<(), WebhookError>> + Send;
}

/// Sends payloads as JSON `POST` requests to a fixed URL.
///
/// # Example
///
/// ```
/// use slack_hook::webhook::{HttpWebhook, ReqwestClient};
/// use url::Url;
///
/// let webhook = HttpWebhook::new(
///     ReqwestClient::new(),
///     Url::parse("https://hooks.slack.com/services/T000/B000/XXXX").unwrap(),
/// );
/// assert_eq!(webhook.url().host_str(), Some("hooks.slack.com"));
/// ```
#[derive(Debug)]
pub struct HttpWebhook<H> {
    client: H,
    url: url::Url,
}

impl<H> HttpWebhook<H> {
    /// Creates a webhook that posts to `url` through `client`.
    #[must_use]
    pub const fn new(client: H, url: url::Url) -> Self {
        Self { client, url }
    }

    /// Returns the configured URL.
    #[must_use]
    pub const fn url(&self) -> &url::Url {
        &self.url
    }
}

impl<H: HttpClient> HttpWebhook<H> {
    fn build_request(&self, payload: &WebhookPayload) -> Result<HttpRequest, WebhookError> {
        let body = serde_json::to_vec(payload)?;

        Ok(HttpRequest::post(self.url.clone())
            .with_header(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("application/json"),
            )
            .with_body(body))
    }
}

impl<H: HttpClient> WebhookSender for HttpWebhook<H> {
    async fn send(&self, payload: &WebhookPayload) -> Result<(), WebhookError> {
        let request = self.build_request(payload)?;
        let response = self.client.request(request).await?;

        if response.is_success() {
            return Ok(());
        }

        Err(WebhookError::Status {
            status: response.status,
            body: response.body_text().map(ToString::to_string),
        })
    }
}
