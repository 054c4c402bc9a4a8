//! Postmark async client implementation.

use crate::error::ConfigError;
use crate::transport::{Endpoint, HttpTransport, Transport};
use crate::wire::{SendRequest, SendResponse};
use crate::{Error, OutgoingEmail, Result, Success};
use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

/// Async client for the Postmark API.
///
/// Use [`Client::new`] for defaults, [`Client::builder`] for custom settings
/// like the base URL, a timeout, or a proxy, and [`Client::with_transport`] to
/// plug in your own [`Transport`].
///
/// The client keeps no per-request state and can be shared across tasks.
#[derive(Debug, Clone)]
pub struct Client<T = HttpTransport> {
    transport: T,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder(server_token: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(server_token)
    }

    /// Create a client for the public Postmark API.
    ///
    /// # Examples
    /// ```no_run
    /// # use postmark_client::Client;
    /// let client = Client::new("server-token")?;
    /// # Ok::<(), postmark_client::Error>(())
    /// ```
    pub fn new(server_token: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(server_token).build()
    }
}

impl<T: Transport> Client<T> {
    /// Create a client on top of a custom transport.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a single email.
    ///
    /// # Errors
    /// - [`Error::Configuration`] if the base URL or token is unusable; nothing is sent.
    /// - [`Error::Transport`] if the request fails or no body comes back.
    /// - [`Error::Decode`] if the response is not the expected JSON.
    /// - [`Error::Postmark`] if the API rejects the email.
    ///
    /// # Examples
    /// ```no_run
    /// # use postmark_client::{Client, OutgoingEmail};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), postmark_client::Error> {
    /// let client = Client::new("server-token")?;
    /// let email = OutgoingEmail::single(
    ///     "sender@example.com",
    ///     "receiver@example.com",
    ///     "Hello",
    ///     "Hello from Rust",
    /// );
    /// let sent = client.send(&email).await?;
    /// println!("{:?}", sent.message_id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send(&self, email: &OutgoingEmail) -> Result<Success> {
        let request = SendRequest::from(email);
        let body = self.transport.post(&request, &Endpoint::EMAIL).await?;

        let response: SendResponse = serde_json::from_slice(&body).map_err(Error::Decode)?;
        if !response.error_code.is_ok() {
            return Err(Error::Postmark {
                code: response.error_code,
                message: response.message,
            });
        }

        tracing::debug!(message_id = ?response.message_id, "email accepted");
        Ok(response.into())
    }
}

/// Capability to send email through Postmark.
///
/// Implemented by [`Client`]; depend on this trait to swap in a fake in tests.
#[async_trait]
pub trait PostmarkApi: Send + Sync {
    /// Send a single email. See [`Client::send`].
    async fn send(&self, email: &OutgoingEmail) -> Result<Success>;
}

#[async_trait]
impl<T: Transport> PostmarkApi for Client<T> {
    async fn send(&self, email: &OutgoingEmail) -> Result<Success> {
        Client::send(self, email).await
    }
}

const BASE_URL: &str = "https://api.postmarkapp.com/";
const USER_AGENT_VALUE: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Builder for configuring a Postmark client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Clone)]
pub struct ClientBuilder {
    server_token: String,
    base_url: String,
    user_agent: String,
    proxy: Option<String>,
    timeout: Option<Duration>,
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("server_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("proxy", &self.proxy)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - Base URL `https://api.postmarkapp.com/`
    /// - No proxy
    /// - No timeout
    /// - `postmark-client/<version>` user agent
    pub fn new(server_token: impl Into<String>) -> Self {
        Self {
            server_token: server_token.into(),
            base_url: BASE_URL.to_string(),
            user_agent: USER_AGENT_VALUE.to_string(),
            proxy: None,
            timeout: None,
        }
    }

    /// Override the API base URL.
    ///
    /// Useful for testing against a local mock server. The URL is checked on
    /// each request, not here.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set a proxy URL (e.g., "http://127.0.0.1:8080").
    ///
    /// This uses reqwest's proxy support for all requests.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Limit the total time of each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the client.
    ///
    /// No network traffic happens here.
    pub fn build(self) -> Result<Client> {
        let mut builder = reqwest::Client::builder();

        if let Some(proxy_url) = &self.proxy {
            let proxy = reqwest::Proxy::all(proxy_url).map_err(ConfigError::HttpClient)?;
            builder = builder.proxy(proxy);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().map_err(ConfigError::HttpClient)?;

        Ok(Client::with_transport(HttpTransport::new(
            http,
            self.base_url,
            self.server_token,
            self.user_agent,
        )))
    }
}
