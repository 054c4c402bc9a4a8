//! HTTP transport used by the [`Client`](crate::Client).

use crate::error::{ConfigError, TransportError};
use crate::Result;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Method;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use url::Url;

/// Header carrying the server token.
pub const SERVER_TOKEN_HEADER: &str = "X-Postmark-Server-Token";

/// An API path relative to the base URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint(Cow<'static, str>);

impl Endpoint {
    /// Single email send.
    pub const EMAIL: Endpoint = Endpoint(Cow::Borrowed("email"));

    /// Create an endpoint from a path such as `"messages/outbound"`.
    pub fn new(path: impl Into<Cow<'static, str>>) -> Self {
        Self(path.into())
    }

    /// The path relative to the base URL.
    pub fn path(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Moves request objects to the API and raw response bodies back.
///
/// Implementations must not interpret the JSON `ErrorCode`; that is left to the
/// client. [`HttpTransport`] is the real implementation; tests substitute stubs.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` as a JSON body to `endpoint`.
    async fn post<R>(&self, request: &R, endpoint: &Endpoint) -> Result<Vec<u8>>
    where
        R: Serialize + Sync + ?Sized;

    /// Send `request` as a JSON body to `endpoint` with the `GET` method.
    async fn get<R>(&self, request: &R, endpoint: &Endpoint) -> Result<Vec<u8>>
    where
        R: Serialize + Sync + ?Sized;
}

/// [`Transport`] over HTTPS using `reqwest`.
///
/// Holds only fixed configuration, so one instance can serve concurrent calls.
#[derive(Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
    server_token: String,
    user_agent: String,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("server_token", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl HttpTransport {
    pub(crate) fn new(
        http: reqwest::Client,
        base_url: String,
        server_token: String,
        user_agent: String,
    ) -> Self {
        Self {
            http,
            base_url,
            server_token,
            user_agent,
        }
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join the base URL and endpoint with exactly one `/` between them.
    fn url(&self, endpoint: &Endpoint) -> Result<Url> {
        let joined = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.path().trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|source| {
            ConfigError::InvalidBaseUrl {
                url: joined,
                source,
            }
            .into()
        })
    }

    /// Build headers for API requests.
    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Ok(value) = HeaderValue::from_str(&self.user_agent) {
            headers.insert(USER_AGENT, value);
        }
        let mut token = HeaderValue::from_str(&self.server_token)
            .map_err(|_| ConfigError::InvalidServerToken)?;
        token.set_sensitive(true);
        headers.insert(SERVER_TOKEN_HEADER, token);
        Ok(headers)
    }

    async fn request<R>(&self, method: Method, request: &R, endpoint: &Endpoint) -> Result<Vec<u8>>
    where
        R: Serialize + ?Sized,
    {
        let url = self.url(endpoint)?;
        let headers = self.headers()?;

        let body = serde_json::to_vec(request).map_err(TransportError::Encode)?;

        tracing::debug!(%method, %url, "sending Postmark request");
        let response = self
            .http
            .request(method, url)
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(TransportError::Request)?;

        let status = response.status();
        let body = response.bytes().await.map_err(TransportError::Request)?;
        tracing::debug!(%status, bytes = body.len(), "received Postmark response");

        if body.is_empty() {
            return Err(TransportError::EmptyBody.into());
        }
        Ok(body.to_vec())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post<R>(&self, request: &R, endpoint: &Endpoint) -> Result<Vec<u8>>
    where
        R: Serialize + Sync + ?Sized,
    {
        self.request(Method::POST, request, endpoint).await
    }

    async fn get<R>(&self, request: &R, endpoint: &Endpoint) -> Result<Vec<u8>>
    where
        R: Serialize + Sync + ?Sized,
    {
        self.request(Method::GET, request, endpoint).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn transport(base_url: &str, token: &str) -> HttpTransport {
        HttpTransport::new(
            reqwest::Client::new(),
            base_url.to_string(),
            token.to_string(),
            "test-agent".to_string(),
        )
    }

    #[test]
    fn url_has_single_separator() {
        for base in ["https://api.postmarkapp.com", "https://api.postmarkapp.com/"] {
            let url = transport(base, "token").url(&Endpoint::EMAIL).unwrap();
            assert_eq!(url.as_str(), "https://api.postmarkapp.com/email");
        }

        let url = transport("http://localhost:8080/v1/", "token")
            .url(&Endpoint::new("/templates"))
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v1/templates");
    }

    #[test]
    fn unparsable_base_url_is_configuration_error() {
        let err = transport("not a url", "token").url(&Endpoint::EMAIL).unwrap_err();
        assert!(matches!(
            err,
            Error::Configuration(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn headers_carry_json_and_token() {
        let headers = transport("https://api.postmarkapp.com", "secret").headers().unwrap();
        assert_eq!(headers[ACCEPT], "application/json");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[SERVER_TOKEN_HEADER], "secret");
        assert!(headers[SERVER_TOKEN_HEADER].is_sensitive());
    }

    #[test]
    fn token_with_newline_is_rejected() {
        let err = transport("https://api.postmarkapp.com", "bad\ntoken")
            .headers()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Configuration(ConfigError::InvalidServerToken)
        ));
    }

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> std::result::Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("cannot encode"))
        }
    }

    #[tokio::test]
    async fn unencodable_request_is_encode_error() {
        let transport = transport("http://127.0.0.1:1", "token");

        for result in [
            transport.post(&Unencodable, &Endpoint::EMAIL).await,
            transport.get(&Unencodable, &Endpoint::new("messages")).await,
        ] {
            assert!(matches!(
                result,
                Err(Error::Transport(TransportError::Encode(_)))
            ));
        }
    }

    #[test]
    fn debug_redacts_token() {
        let rendered = format!("{:?}", transport("https://api.postmarkapp.com", "secret"));
        assert!(!rendered.contains("secret"));
    }
}
