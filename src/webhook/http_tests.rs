//! Tests for HTTP request/response types.

use super::{HttpRequest, HttpResponse};

fn webhook_url() -> url::Url {
    url::Url::parse("https://hooks.example.com/services/T/B/X").unwrap()
}

mod http_request {
    use super::*;

    #[test]
    fn new_has_no_headers_or_body() {
        let req = HttpRequest::new(http::Method::PUT, webhook_url());

        assert_eq!(req.method, http::Method::PUT);
        assert_eq!(req.url, webhook_url());
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn post_uses_post_method() {
        assert_eq!(HttpRequest::post(webhook_url()).method, http::Method::POST);
    }

    #[test]
    fn with_body_and_header_chain() {
        let req = HttpRequest::post(webhook_url())
            .with_header(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("application/json"),
            )
            .with_body(b"{}".to_vec());

        assert_eq!(req.body.as_deref(), Some(&b"{}"[..]));
        assert_eq!(
            req.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn with_header_appends_repeated_names() {
        let req = HttpRequest::post(webhook_url())
            .with_header(http::header::ACCEPT, http::HeaderValue::from_static("a"))
            .with_header(http::header::ACCEPT, http::HeaderValue::from_static("b"));

        assert_eq!(req.headers.get_all(http::header::ACCEPT).iter().count(), 2);
    }
}

mod http_response {
    use super::*;

    fn response(status: http::StatusCode, body: &[u8]) -> HttpResponse {
        HttpResponse::new(status, body.to_vec())
    }

    #[test]
    fn is_success_for_2xx() {
        for status in [http::StatusCode::OK, http::StatusCode::NO_CONTENT] {
            assert!(response(status, b"").is_success(), "{status}");
        }
    }

    #[test]
    fn is_not_success_for_errors() {
        for status in [
            http::StatusCode::BAD_REQUEST,
            http::StatusCode::NOT_FOUND,
            http::StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            assert!(!response(status, b"").is_success(), "{status}");
        }
    }

    #[test]
    fn body_text_returns_utf8() {
        let resp = response(http::StatusCode::BAD_REQUEST, b"invalid_payload");
        assert_eq!(resp.body_text(), Some("invalid_payload"));
    }

    #[test]
    fn body_text_rejects_invalid_utf8() {
        let resp = response(http::StatusCode::OK, &[0xff, 0xfe]);
        assert_eq!(resp.body_text(), None);
    }
}
