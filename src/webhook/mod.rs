//! Webhook layer for posting notifications to chat services.
//!
//! This module provides:
//! - HTTP request/response values ([`HttpRequest`], [`HttpResponse`])
//! - An HTTP client abstraction ([`HttpClient`]) and its reqwest implementation ([`ReqwestClient`])
//! - The Slack message body ([`WebhookPayload`], [`Attachment`])
//! - Payload delivery ([`WebhookSender`], [`HttpWebhook`])

mod client;
mod error;
mod http;
mod payload;
mod sender;

#[cfg(test)]
mod client_tests;
#[cfg(test)]
mod http_tests;

pub use client::ReqwestClient;
pub use error::{HttpError, WebhookError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use payload::{Attachment, WebhookPayload};
pub use sender::{HttpWebhook, WebhookSender};
