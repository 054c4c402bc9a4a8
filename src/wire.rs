//! JSON shapes exchanged with the API.
//!
//! Every field is renamed explicitly so the capitalized wire names never depend
//! on Rust naming conventions.

use crate::{Attachment, ErrorCode, Header, OutgoingEmail, Success, TrackLinks};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Body of `POST /email`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct SendRequest<'a> {
    #[serde(rename = "From")]
    pub from: &'a str,
    #[serde(rename = "To")]
    pub to: String,
    #[serde(rename = "Cc", skip_serializing_if = "Option::is_none")]
    pub cc: Option<String>,
    #[serde(rename = "Bcc", skip_serializing_if = "Option::is_none")]
    pub bcc: Option<String>,
    #[serde(rename = "Subject")]
    pub subject: &'a str,
    #[serde(rename = "Tag", skip_serializing_if = "Option::is_none")]
    pub tag: Option<&'a str>,
    #[serde(rename = "HtmlBody", skip_serializing_if = "Option::is_none")]
    pub html_body: Option<&'a str>,
    #[serde(rename = "TextBody")]
    pub text_body: &'a str,
    #[serde(rename = "ReplyTo", skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<&'a str>,
    #[serde(rename = "MetaData", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<&'a BTreeMap<String, String>>,
    #[serde(rename = "Headers", skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<WireHeader<'a>>>,
    #[serde(rename = "TrackOpens", skip_serializing_if = "Option::is_none")]
    pub track_opens: Option<bool>,
    #[serde(rename = "TrackLinks")]
    pub track_links: WireTrackLinks,
    #[serde(rename = "Attachments", skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<WireAttachment<'a>>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct WireHeader<'a> {
    #[serde(rename = "Name")]
    pub name: &'a str,
    #[serde(rename = "Value")]
    pub value: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct WireAttachment<'a> {
    #[serde(rename = "Name")]
    pub name: &'a str,
    #[serde(rename = "Content")]
    pub content: &'a str,
    #[serde(rename = "ContentType")]
    pub content_type: &'a str,
    #[serde(rename = "ContentID", skip_serializing_if = "Option::is_none")]
    pub content_id: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) enum WireTrackLinks {
    None,
    HtmlAndText,
    HtmlOnly,
    TextOnly,
}

impl From<TrackLinks> for WireTrackLinks {
    fn from(setting: TrackLinks) -> Self {
        match setting {
            TrackLinks::None => Self::None,
            TrackLinks::HtmlAndText => Self::HtmlAndText,
            TrackLinks::HtmlOnly => Self::HtmlOnly,
            TrackLinks::TextOnly => Self::TextOnly,
        }
    }
}

impl<'a> From<&'a Header> for WireHeader<'a> {
    fn from(header: &'a Header) -> Self {
        Self {
            name: &header.name,
            value: &header.value,
        }
    }
}

impl<'a> From<&'a Attachment> for WireAttachment<'a> {
    fn from(attachment: &'a Attachment) -> Self {
        Self {
            name: &attachment.name,
            content: &attachment.content,
            content_type: &attachment.content_type,
            content_id: attachment.content_id.as_deref(),
        }
    }
}

/// Address lists go over the wire comma-joined. An empty list joins to `""`.
fn join_addresses(addresses: &[String]) -> String {
    addresses.join(",")
}

impl<'a> From<&'a OutgoingEmail> for SendRequest<'a> {
    fn from(email: &'a OutgoingEmail) -> Self {
        Self {
            from: &email.from,
            to: join_addresses(&email.to),
            cc: email.cc.as_deref().map(join_addresses),
            bcc: email.bcc.as_deref().map(join_addresses),
            subject: &email.subject,
            tag: email.tag.as_deref(),
            html_body: email.html_body.as_deref(),
            text_body: &email.text_body,
            reply_to: email.reply_to.as_deref(),
            metadata: email.metadata.as_ref(),
            headers: email
                .headers
                .as_ref()
                .map(|headers| headers.iter().map(WireHeader::from).collect()),
            track_opens: email.track_opens,
            track_links: email.track_links.into(),
            attachments: email
                .attachments
                .as_ref()
                .map(|attachments| attachments.iter().map(WireAttachment::from).collect()),
        }
    }
}

/// Response to `POST /email`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct SendResponse {
    #[serde(rename = "ErrorCode")]
    pub error_code: ErrorCode,
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "MessageID", default)]
    pub message_id: Option<Uuid>,
    #[serde(rename = "SubmittedAt", default)]
    pub submitted_at: Option<String>,
    #[serde(rename = "To", default)]
    pub to: Option<String>,
}

impl From<SendResponse> for Success {
    fn from(response: SendResponse) -> Self {
        Self {
            message_id: response.message_id,
            submitted_at: response.submitted_at,
            to: response.to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn email() -> OutgoingEmail {
        OutgoingEmail::new(
            "sender@example.com",
            ["a@example.com", "b@example.com"],
            "Subject",
            "Text",
        )
    }

    #[test]
    fn recipients_are_comma_joined() {
        let email = email();
        assert_eq!(SendRequest::from(&email).to, "a@example.com,b@example.com");

        let single = OutgoingEmail::single("sender@example.com", "a@example.com", "S", "T");
        assert_eq!(SendRequest::from(&single).to, "a@example.com");
    }

    #[test]
    fn absent_lists_stay_absent_and_empty_lists_pass_through() {
        let email = email().with_bcc(Vec::<String>::new());
        let request = SendRequest::from(&email);
        assert_eq!(request.cc, None);
        assert_eq!(request.bcc.as_deref(), Some(""));
    }

    #[test]
    fn minimal_email_serializes_without_optional_fields() {
        let email = email();
        let body = serde_json::to_value(SendRequest::from(&email)).unwrap();
        assert_eq!(
            body,
            json!({
                "From": "sender@example.com",
                "To": "a@example.com,b@example.com",
                "Subject": "Subject",
                "TextBody": "Text",
                "TrackLinks": "None",
            })
        );
    }

    #[test]
    fn full_email_uses_capitalized_field_names() {
        let email = email()
            .with_cc(["c@example.com"])
            .with_bcc(["d@example.com", "e@example.com"])
            .with_html_body("<b>Text</b>")
            .with_tag("invoice")
            .with_reply_to("reply@example.com")
            .with_metadata("order", "42")
            .with_header("Message-ID", "<id@example.com>")
            .with_track_opens(true)
            .with_track_links(TrackLinks::HtmlAndText)
            .with_attachment(Attachment::new("a.txt", "text/plain", "hi").inline("cid:a"));

        let body = serde_json::to_value(SendRequest::from(&email)).unwrap();
        assert_eq!(
            body,
            json!({
                "From": "sender@example.com",
                "To": "a@example.com,b@example.com",
                "Cc": "c@example.com",
                "Bcc": "d@example.com,e@example.com",
                "Subject": "Subject",
                "Tag": "invoice",
                "HtmlBody": "<b>Text</b>",
                "TextBody": "Text",
                "ReplyTo": "reply@example.com",
                "MetaData": { "order": "42" },
                "Headers": [{ "Name": "Message-ID", "Value": "<id@example.com>" }],
                "TrackOpens": true,
                "TrackLinks": "HtmlAndText",
                "Attachments": [{
                    "Name": "a.txt",
                    "Content": "aGk=",
                    "ContentType": "text/plain",
                    "ContentID": "cid:a",
                }],
            })
        );
    }

    #[test]
    fn decodes_success_response() {
        let response: SendResponse = serde_json::from_value(json!({
            "ErrorCode": 0,
            "Message": "OK",
            "MessageID": "b7bc2f4a-e38e-4336-af7d-e6c392c2f817",
            "SubmittedAt": "2010-11-26T12:01:05.1794748-05:00",
            "To": "receiver@example.com",
        }))
        .unwrap();

        assert_eq!(response.error_code, ErrorCode::Ok);
        let success = Success::from(response);
        assert_eq!(
            success.message_id,
            Some(Uuid::parse_str("b7bc2f4a-e38e-4336-af7d-e6c392c2f817").unwrap())
        );
        assert_eq!(
            success.submitted_at.as_deref(),
            Some("2010-11-26T12:01:05.1794748-05:00")
        );
        assert_eq!(success.to.as_deref(), Some("receiver@example.com"));
    }

    #[test]
    fn decodes_error_response_without_optional_fields() {
        let response: SendResponse = serde_json::from_value(json!({
            "ErrorCode": 300,
            "Message": "Invalid email request",
        }))
        .unwrap();

        assert_eq!(response.error_code, ErrorCode::InvalidEmailRequest);
        assert_eq!(response.message, "Invalid email request");
        assert_eq!(response.message_id, None);
        assert_eq!(response.to, None);
    }

    #[test]
    fn rejects_response_missing_error_code() {
        let result = serde_json::from_value::<SendResponse>(json!({ "Message": "OK" }));
        assert!(result.is_err());
    }
}
