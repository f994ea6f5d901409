//! HTTP transport abstraction
//!
//! The executor only needs one thing from the network: given a resolved
//! request, either the raw response body or a failure. This trait is that
//! seam, so tests can inject canned bodies and callers can wrap the default
//! transport (e.g. to sign private requests).
//!
//! # Example
//!
//! ```no_run
//! use bitso_rest::transport::{HttpTransport, ReqwestTransport, TransportError};
//! use bitso_rest::{BaseUrl, ClientConfig, Endpoint};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = ReqwestTransport::new(&ClientConfig::default())?;
//!     let request = Endpoint::get("available_books/")?.resolve(&BaseUrl::production());
//!     let body = transport.send(&request).await?;
//!     println!("Received {} bytes", body.len());
//!     Ok(())
//! }
//! ```

use crate::config::ClientConfig;
use crate::endpoint::{Method, ResolvedRequest};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

/// Transport layer errors. Any of these means no response bytes exist.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connection could not be established or was reset
    #[error("connection failed: {0}")]
    Connection(String),

    /// Request exceeded the transport's timeout
    #[error("request timed out")]
    Timeout,

    /// Request was cancelled before a response arrived.
    ///
    /// reqwest has no cancellation error of its own (dropping the future
    /// just stops it), so [`ReqwestTransport`] never returns this. Wrapping
    /// transports that race a request against a shutdown signal report the
    /// losing side with it.
    #[error("request cancelled")]
    Cancelled,

    /// URL rejected by the HTTP stack
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Other HTTP client failure
    #[error("HTTP error: {0}")]
    Request(reqwest::Error),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connection(err.to_string())
        } else if err.is_builder() {
            Self::InvalidUrl(err.to_string())
        } else {
            Self::Request(err)
        }
    }
}

/// Trait for HTTP transport abstraction
///
/// Implementations must be safe to call concurrently; the executor shares a
/// single transport across all in-flight calls.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Dispatch `request` and return the raw response body.
    ///
    /// Non-2xx responses still return their body: the exchange reports
    /// rejections as JSON envelopes on 4xx statuses.
    async fn send(&self, request: &ResolvedRequest) -> Result<Vec<u8>, TransportError>;
}

/// Real HTTP transport using reqwest
///
/// Pooling, TLS and the request timeout are reqwest's concern. Requests are
/// sent unsigned; wrap this transport to authenticate private endpoints.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a pooled client with the configured timeout and user agent
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent())
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self { client })
    }

    /// Use a caller-built reqwest client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn send(&self, request: &ResolvedRequest) -> Result<Vec<u8>, TransportError> {
        let builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        debug!(status = status.as_u16(), len = body.len(), "Response received");
        Ok(body.to_vec())
    }
}

/// Mock transport for testing
///
/// Replays queued replies in order and records every request it is given.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Default)]
pub struct MockTransport {
    replies: parking_lot::Mutex<std::collections::VecDeque<Result<Vec<u8>, TransportError>>>,
    requests: parking_lot::Mutex<Vec<ResolvedRequest>>,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response body
    pub fn push_body(&self, body: impl Into<Vec<u8>>) {
        self.replies.lock().push_back(Ok(body.into()));
    }

    /// Queue a transport failure
    pub fn push_error(&self, error: TransportError) {
        self.replies.lock().push_back(Err(error));
    }

    /// Requests dispatched so far
    pub fn requests(&self) -> Vec<ResolvedRequest> {
        self.requests.lock().clone()
    }

    /// Most recent request
    pub fn last_request(&self) -> Option<ResolvedRequest> {
        self.requests.lock().last().cloned()
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: &ResolvedRequest) -> Result<Vec<u8>, TransportError> {
        self.requests.lock().push(request.clone());
        self.replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Connection("no reply queued".into())))
    }
}
