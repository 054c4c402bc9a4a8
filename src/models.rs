//! Caller-facing email types.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, FixedOffset};
use std::collections::BTreeMap;
use uuid::Uuid;

/// An email to be sent with [`Client::send`](crate::Client::send).
///
/// Build one with [`OutgoingEmail::new`] or [`OutgoingEmail::single`] and chain
/// the `with_*` methods for optional fields. Addresses may use the
/// `"First Last" <first@example.com>` form. Nothing is validated locally; the
/// API rejects bad input with an [`ErrorCode`](crate::ErrorCode).
///
/// # Examples
/// ```
/// use postmark_client::{OutgoingEmail, TrackLinks};
///
/// let email = OutgoingEmail::single(
///     "sender@example.com",
///     "receiver@example.com",
///     "Hello",
///     "Hello from Rust",
/// )
/// .with_html_body("<p>Hello from Rust</p>")
/// .with_tag("welcome")
/// .with_track_links(TrackLinks::HtmlOnly);
///
/// assert_eq!(email.to(), ["receiver@example.com"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub(crate) from: String,
    pub(crate) to: Vec<String>,
    pub(crate) subject: String,
    pub(crate) text_body: String,
    pub(crate) html_body: Option<String>,
    pub(crate) cc: Option<Vec<String>>,
    pub(crate) bcc: Option<Vec<String>>,
    pub(crate) tag: Option<String>,
    pub(crate) reply_to: Option<String>,
    pub(crate) metadata: Option<BTreeMap<String, String>>,
    pub(crate) headers: Option<Vec<Header>>,
    pub(crate) attachments: Option<Vec<Attachment>>,
    pub(crate) track_opens: Option<bool>,
    pub(crate) track_links: TrackLinks,
}

impl OutgoingEmail {
    /// Create an email with one or more recipients (up to 50).
    pub fn new<I, S>(
        from: impl Into<String>,
        to: I,
        subject: impl Into<String>,
        text_body: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            from: from.into(),
            to: to.into_iter().map(Into::into).collect(),
            subject: subject.into(),
            text_body: text_body.into(),
            html_body: None,
            cc: None,
            bcc: None,
            tag: None,
            reply_to: None,
            metadata: None,
            headers: None,
            attachments: None,
            track_opens: None,
            track_links: TrackLinks::default(),
        }
    }

    /// Create an email with a single recipient.
    pub fn single(
        from: impl Into<String>,
        to: impl Into<String>,
        subject: impl Into<String>,
        text_body: impl Into<String>,
    ) -> Self {
        Self::new(from, [to.into()], subject, text_body)
    }

    /// Set the HTML body.
    pub fn with_html_body(mut self, html_body: impl Into<String>) -> Self {
        self.html_body = Some(html_body.into());
        self
    }

    /// Set the carbon-copy recipients (up to 50).
    pub fn with_cc<I, S>(mut self, cc: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cc = Some(cc.into_iter().map(Into::into).collect());
        self
    }

    /// Set the blind-copy recipients (up to 50).
    pub fn with_bcc<I, S>(mut self, bcc: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bcc = Some(bcc.into_iter().map(Into::into).collect());
        self
    }

    /// Categorize the email. Only one tag per message.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Reply-to address, if it differs from the sender.
    pub fn with_reply_to(mut self, reply_to: impl Into<String>) -> Self {
        self.reply_to = Some(reply_to.into());
        self
    }

    /// Attach a metadata entry. A repeated key replaces the earlier value.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Append a custom header. Order is preserved.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(Vec::new)
            .push(Header::new(name, value));
        self
    }

    /// Append an attachment.
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments
            .get_or_insert_with(Vec::new)
            .push(attachment);
        self
    }

    /// Enable or disable open tracking for this email.
    pub fn with_track_opens(mut self, track_opens: bool) -> Self {
        self.track_opens = Some(track_opens);
        self
    }

    /// Choose which bodies get link tracking.
    pub fn with_track_links(mut self, track_links: TrackLinks) -> Self {
        self.track_links = track_links;
        self
    }

    /// The sender address.
    pub fn from(&self) -> &str {
        &self.from
    }

    /// The recipients, in order.
    pub fn to(&self) -> &[String] {
        &self.to
    }

    /// The subject line.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The plain-text body.
    pub fn text_body(&self) -> &str {
        &self.text_body
    }

    /// The HTML body, if set.
    pub fn html_body(&self) -> Option<&str> {
        self.html_body.as_deref()
    }

    /// Carbon-copy recipients, if set.
    pub fn cc(&self) -> Option<&[String]> {
        self.cc.as_deref()
    }

    /// Blind-copy recipients, if set.
    pub fn bcc(&self) -> Option<&[String]> {
        self.bcc.as_deref()
    }

    /// The classification tag, if set.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// The reply-to address, if set.
    pub fn reply_to(&self) -> Option<&str> {
        self.reply_to.as_deref()
    }

    /// Metadata entries, sorted by key.
    pub fn metadata(&self) -> Option<&BTreeMap<String, String>> {
        self.metadata.as_ref()
    }

    /// Custom headers, in insertion order.
    pub fn headers(&self) -> Option<&[Header]> {
        self.headers.as_deref()
    }

    /// Attachments, in insertion order.
    pub fn attachments(&self) -> Option<&[Attachment]> {
        self.attachments.as_deref()
    }

    /// Open tracking override, if set.
    pub fn track_opens(&self) -> Option<bool> {
        self.track_opens
    }

    /// Link tracking setting. Defaults to [`TrackLinks::None`].
    pub fn track_links(&self) -> TrackLinks {
        self.track_links
    }
}

/// A custom email header such as `Message-ID`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    /// Create a header from its name and value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A file attached to an email.
///
/// Content is held base64-encoded, which is how the API expects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub(crate) name: String,
    pub(crate) content: String,
    pub(crate) content_type: String,
    pub(crate) content_id: Option<String>,
}

impl Attachment {
    /// Create an attachment from raw bytes, base64-encoding them.
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl AsRef<[u8]>,
    ) -> Self {
        Self::from_base64(name, content_type, STANDARD.encode(bytes))
    }

    /// Create an attachment from content that is already base64-encoded.
    pub fn from_base64(
        name: impl Into<String>,
        content_type: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            content_type: content_type.into(),
            content_id: None,
        }
    }

    /// Mark as an inline image referenced from the HTML body by `cid`.
    pub fn inline(mut self, content_id: impl Into<String>) -> Self {
        self.content_id = Some(content_id.into());
        self
    }

    /// The file name shown to recipients.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The base64-encoded content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The MIME type, e.g. `image/png`.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// The content ID for inline images, if set.
    pub fn content_id(&self) -> Option<&str> {
        self.content_id.as_deref()
    }
}

/// Link tracking setting.
///
/// See the [tracking links guide](https://postmarkapp.com/developer/user-guide/tracking-links).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TrackLinks {
    /// No links are replaced or tracked.
    #[default]
    None,
    /// Links are replaced in both the HTML and text bodies.
    HtmlAndText,
    /// Links are replaced in the HTML body only.
    HtmlOnly,
    /// Links are replaced in the text body only.
    TextOnly,
}

/// Result of a successful send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Success {
    /// Identifier Postmark assigned to the message.
    pub message_id: Option<Uuid>,
    /// When the API accepted the message, as sent by the server.
    pub submitted_at: Option<String>,
    /// The recipient(s) the message was accepted for.
    pub to: Option<String>,
}

impl Success {
    /// Parse [`Success::submitted_at`] as an RFC 3339 timestamp.
    ///
    /// Returns `None` when the field is absent or not RFC 3339.
    pub fn submitted_at_datetime(&self) -> Option<DateTime<FixedOffset>> {
        self.submitted_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_wraps_recipient_in_list() {
        let email = OutgoingEmail::single("a@example.com", "b@example.com", "Hi", "Body");
        assert_eq!(email.to(), ["b@example.com"]);
        assert_eq!(email.track_links(), TrackLinks::None);
        assert!(email.cc().is_none());
        assert!(email.metadata().is_none());
    }

    #[test]
    fn metadata_keys_are_unique() {
        let email = OutgoingEmail::single("a@example.com", "b@example.com", "Hi", "Body")
            .with_metadata("user", "1")
            .with_metadata("user", "2");
        let metadata = email.metadata().unwrap();
        assert_eq!(metadata.len(), 1);
        assert_eq!(metadata["user"], "2");
    }

    #[test]
    fn headers_keep_insertion_order() {
        let email = OutgoingEmail::single("a@example.com", "b@example.com", "Hi", "Body")
            .with_header("X-B", "2")
            .with_header("X-A", "1");
        let names: Vec<_> = email.headers().unwrap().iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["X-B", "X-A"]);
    }

    #[test]
    fn attachment_encodes_bytes_as_base64() {
        let attachment = Attachment::new("hello.txt", "text/plain", b"hello");
        assert_eq!(attachment.content(), "aGVsbG8=");
        assert_eq!(attachment.content_id(), None);

        let inline = Attachment::from_base64("logo.png", "image/png", "AAAA").inline("cid:logo");
        assert_eq!(inline.content_id(), Some("cid:logo"));
    }

    #[test]
    fn submitted_at_parses_rfc3339() {
        let success = Success {
            message_id: None,
            submitted_at: Some("2024-05-01T10:15:30-04:00".to_string()),
            to: None,
        };
        let parsed = success.submitted_at_datetime().unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-05-01T10:15:30-04:00");

        let garbled = Success {
            submitted_at: Some("yesterday".to_string()),
            ..success
        };
        assert!(garbled.submitted_at_datetime().is_none());
    }
}
