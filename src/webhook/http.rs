//! HTTP request/response value types and the client trait.

use super::HttpError;

/// An outgoing HTTP request.
///
/// Uses `http` crate types for method and headers so any [`HttpClient`]
/// implementation can consume it without conversion.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: http::Method,
    /// Target URL
    pub url: url::Url,
    /// HTTP headers to send
    pub headers: http::HeaderMap,
    /// Optional request body
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Creates a request with no headers and no body.
    #[must_use]
    pub fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Creates a POST request to the given URL.
    #[must_use]
    pub fn post(url: url::Url) -> Self {
        Self::new(http::Method::POST, url)
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Adds a header, keeping any existing values for the same name.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }
}

/// Status and buffered body of a webhook response.
///
/// Slack puts everything worth reporting in the body, so headers are not kept.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response body (fully buffered)
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new HTTP response.
    #[must_use]
    pub const fn new(status: http::StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Returns true if the status code is 2xx.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the body as UTF-8, if valid.
    ///
    /// Slack answers failed webhook posts with a short plain-text reason
    /// such as `invalid_payload` or `no_service`.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Sends HTTP requests.
///
/// Abstracts the HTTP library so webhook delivery can be tested
/// with in-memory clients.
///
/// # Example
///
/// ```ignore
/// use slack_hook::webhook::{HttpClient, HttpRequest, HttpResponse, HttpError};
///
/// struct AlwaysOk;
///
/// impl HttpClient for AlwaysOk {
///     async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::new(http::StatusCode::OK, b"ok".to_vec()))
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Sends a request and buffers the response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the connection fails, the client's
    /// own timeout elapses, or the URL cannot be used.
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
