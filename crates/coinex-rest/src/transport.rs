//! HTTP transport
//!
//! One network round trip per call. No retries, no backoff. The trait is the
//! seam that lets tests observe exactly which requests reach the network.

use async_trait::async_trait;
use coinex_types::SyntheticCode;
use reqwest::{Client, Method, StatusCode};
use std::fmt;
use std::time::Duration;
use tracing::debug;

use crate::error::{RestError, RestResult};

/// A fully prepared request: final URL, headers, and body
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute URL including the query string
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Look up a header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    /// Create a response from a status code and body text
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Canonical reason phrase for the status, e.g. "Bad Gateway"
    pub fn status_text(&self) -> &'static str {
        StatusCode::from_u16(self.status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown Status")
    }
}

/// Network-level failure before any response was received
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request exceeded the configured timeout
    #[error("Request timeout")]
    Timeout,

    /// Connection or DNS failure
    #[error("Connection failed: {0}")]
    Connect(String),

    /// Any other failure while sending or reading the response
    #[error("Request failed: {0}")]
    Request(String),
}

impl TransportError {
    /// Code used for the envelope this failure turns into
    pub fn synthetic_code(&self) -> SyntheticCode {
        match self {
            Self::Timeout => SyntheticCode::Timeout,
            Self::Connect(_) | Self::Request(_) => SyntheticCode::Transport,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connect(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}

/// Issues one HTTP call per logical operation
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    async fn dispatch(&self, request: HttpRequest) -> Result<RawResponse, TransportError>;
}

/// [`Transport`] backed by a pooled `reqwest` client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: Client,
}

impl ReqwestTransport {
    /// Build a transport with the given timeout and user agent
    pub fn new(timeout: Duration, user_agent: &str) -> RestResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(RestError::Client)?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn dispatch(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        let mut builder = self.http_client.request(request.method, &request.url);

        for (name, value) in request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(status, bytes = body.len(), "Received response");

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_response_status() {
        let ok = RawResponse::new(200, "{}");
        assert!(ok.is_success());
        assert_eq!(ok.status_text(), "OK");

        let bad = RawResponse::new(502, "<html>");
        assert!(!bad.is_success());
        assert_eq!(bad.status_text(), "Bad Gateway");

        assert_eq!(RawResponse::new(599, "").status_text(), "Unknown Status");
    }

    #[test]
    fn test_transport_error_codes() {
        assert_eq!(TransportError::Timeout.synthetic_code(), SyntheticCode::Timeout);
        assert_eq!(
            TransportError::Connect("refused".into()).synthetic_code(),
            SyntheticCode::Transport
        );
    }

    #[test]
    fn test_header_lookup() {
        let request = HttpRequest {
            method: Method::GET,
            url: "https://api.coinex.com/v2/spot/market".into(),
            headers: vec![("X-COINEX-KEY", "abc".into())],
            body: None,
        };
        assert_eq!(request.header("x-coinex-key"), Some("abc"));
        assert_eq!(request.header("X-COINEX-SIGN"), None);
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let transport = ReqwestTransport::new(Duration::from_secs(2), "test").unwrap();
        let request = HttpRequest {
            method: Method::GET,
            url: "http://127.0.0.1:9/v2/spot/market".into(),
            headers: Vec::new(),
            body: None,
        };

        let err = transport.dispatch(request).await.unwrap_err();
        assert_eq!(err.synthetic_code(), SyntheticCode::Transport);
    }
}
