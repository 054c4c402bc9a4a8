//! # Postmark Client
//! Asynchronous client for the Postmark transactional email HTTP API: build an [`OutgoingEmail`], hand it to [`Client::send`], and get back a [`Success`] or a typed [`Error`].
//!
//! ## Audience and uses
//! For Rust services that send transactional email (sign-up confirmations, password resets, receipts) through a Postmark server. Configure with [`ClientBuilder`], or wrap your own [`Transport`] with [`Client::with_transport`] to test without a network.
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`. A [`Client`] holds no per-request state and can be cloned or shared across tasks freely.
//!
//! ## Out of scope
//! Retries, rate-limit handling, batch sending, templates, webhooks, and bounce or statistics queries. Each [`Client::send`] is one request/response cycle; the caller decides whether to retry.
//!
//! ## Errors
//! A bad base URL or token surfaces as [`Error::Configuration`] before anything is sent. Network failures and empty responses become [`Error::Transport`], malformed responses [`Error::Decode`], and API rejections [`Error::Postmark`] with the [`ErrorCode`] and the server's message. Unrecognized codes map to [`ErrorCode::Unknown`] instead of failing. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Example
//! ```no_run
//! use postmark_client::{Client, OutgoingEmail};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), postmark_client::Error> {
//!     let client = Client::new("server-token")?;
//!     let email = OutgoingEmail::new(
//!         "sender@example.com",
//!         ["alice@example.com", "bob@example.com"],
//!         "Your receipt",
//!         "Thanks for your order.",
//!     )
//!     .with_tag("receipt");
//!
//!     let sent = client.send(&email).await?;
//!     println!("Accepted as {:?} for {:?}", sent.message_id, sent.to);
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod error_code;
mod models;
mod transport;
mod wire;

pub use client::{Client, ClientBuilder, PostmarkApi};
pub use error::{ConfigError, Error, TransportError};
pub use error_code::ErrorCode;
pub use models::{Attachment, Header, OutgoingEmail, Success, TrackLinks};
pub use transport::{Endpoint, HttpTransport, SERVER_TOKEN_HEADER, Transport};

/// Result type alias for Postmark operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
