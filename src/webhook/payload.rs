//! Slack incoming-webhook message body.

use serde::Serialize;

/// Body POSTed to a Slack incoming webhook.
///
/// Empty strings and an empty attachment list are left out of the JSON,
/// so unset presentation fields fall back to the webhook's own defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WebhookPayload {
    /// Display name override
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    /// Channel override, e.g. `#alerts`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub channel: String,
    /// Emoji used as the avatar, e.g. `:ghost:`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub icon_emoji: String,
    /// Image URL used as the avatar
    #[serde(skip_serializing_if = "String::is_empty")]
    pub icon_url: String,
    /// Message attachments
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

/// A colored message attachment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Attachment {
    /// Attachment body
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Plain-text summary for clients that cannot render attachments
    #[serde(skip_serializing_if = "String::is_empty")]
    pub fallback: String,
    /// Sidebar color: `good`, `warning`, `danger`, or a hex code
    #[serde(skip_serializing_if = "String::is_empty")]
    pub color: String,
}

impl Attachment {
    /// Creates an attachment whose text and fallback are both `message`.
    #[must_use]
    pub fn message(message: impl Into<String>, color: impl Into<String>) -> Self {
        let text = message.into();
        Self {
            fallback: text.clone(),
            text,
            color: color.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_payload_serializes_all_fields() {
        let payload = WebhookPayload {
            username: "bot".into(),
            channel: "#alerts".into(),
            icon_emoji: ":ghost:".into(),
            icon_url: "https://example.com/icon.png".into(),
            attachments: vec![Attachment::message("disk full", "danger")],
        };

        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "username": "bot",
                "channel": "#alerts",
                "icon_emoji": ":ghost:",
                "icon_url": "https://example.com/icon.png",
                "attachments": [
                    {"text": "disk full", "fallback": "disk full", "color": "danger"}
                ]
            })
        );
    }

    #[test]
    fn empty_fields_are_omitted() {
        let payload = WebhookPayload {
            attachments: vec![Attachment::message("hello", "")],
            ..WebhookPayload::default()
        };

        let json = serde_json::to_string(&payload).unwrap();

        assert_eq!(
            json,
            r#"{"attachments":[{"text":"hello","fallback":"hello"}]}"#
        );
    }

    #[test]
    fn default_payload_is_empty_object() {
        let json = serde_json::to_string(&WebhookPayload::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn attachment_message_copies_text_to_fallback() {
        let attachment = Attachment::message("boom", "warning");

        assert_eq!(attachment.text, "boom");
        assert_eq!(attachment.fallback, "boom");
        assert_eq!(attachment.color, "warning");
    }
}
