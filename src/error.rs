//! Error types for the Postmark client.

use crate::ErrorCode;
use thiserror::Error;

/// Errors that can occur when talking to the Postmark API.
#[derive(Debug, Error)]
pub enum Error {
    /// The client is misconfigured; the request never left the process.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// The request could not be delivered or no usable response came back.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response body did not match the expected JSON shape.
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The API rejected the request.
    ///
    /// `message` is the server's explanation, verbatim.
    #[error("Postmark rejected the request with code {}: {message}", .code.code())]
    Postmark {
        /// Interpreted error code.
        code: ErrorCode,
        /// Free-text explanation from the `Message` field.
        message: String,
    },
}

impl Error {
    /// The API error code, if this is an [`Error::Postmark`].
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Postmark { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Invalid client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base URL and endpoint do not form a valid absolute URL.
    #[error("invalid base URL `{url}`: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The server token contains characters that cannot be sent in a header.
    #[error("server token is not a valid HTTP header value")]
    InvalidServerToken,

    /// The underlying HTTP client could not be built (e.g. an invalid proxy URL).
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Failure while exchanging bytes with the API.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP request failed: connection error, timeout, or no response.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A response arrived but carried no body.
    #[error("response carried no body")]
    EmptyBody,

    /// The request object could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// Failure reported by a custom [`Transport`](crate::Transport) implementation.
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}
