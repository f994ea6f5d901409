//! Error types for REST API operations
//!
//! Every call ends in exactly one of three ways: a decoded payload, a
//! [`BitsoApiError`] reported by the exchange, or a transport failure (no
//! bytes came back, or the bytes matched neither the payload shape nor the
//! error envelope). [`RestError`] carries the two failure cases plus the
//! configuration and construction errors raised before anything is sent.

use crate::transport::TransportError;
use bitso_types::BitsoApiError;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// The exchange rejected the request
    #[error("API error {}: {}", .0.code, .0.message)]
    Api(BitsoApiError),

    /// No response bytes were obtained
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    /// Response bytes matched neither the expected payload nor the error envelope
    #[error("transport failure: undecodable response ({len} bytes)")]
    Undecodable {
        /// Size of the rejected body
        len: usize,
    },

    /// Malformed endpoint descriptor or request parameters
    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] EndpointError),

    /// Invalid client configuration
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl RestError {
    /// True for the "no interpretable outcome" family (no bytes, or bytes of
    /// unknown shape). Retry decisions belong to the caller.
    pub fn is_transport_failure(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Undecodable { .. })
    }

    /// True when the exchange explicitly rejected the request
    pub fn is_domain_error(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// The exchange error, if this is one
    pub fn api_error(&self) -> Option<&BitsoApiError> {
        match self {
            Self::Api(error) => Some(error),
            _ => None,
        }
    }
}

impl From<BitsoApiError> for RestError {
    fn from(error: BitsoApiError) -> Self {
        Self::Api(error)
    }
}

/// Endpoint descriptor construction errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EndpointError {
    /// Path was empty
    #[error("endpoint path must not be empty")]
    EmptyPath,

    /// Path must be relative to the API base
    #[error("endpoint path must be relative, got {0:?}")]
    AbsolutePath(String),

    /// Path must not step outside the API base with `.` or `..` segments
    #[error("endpoint path must not contain dot segments: {0:?}")]
    DotSegment(String),

    /// Path must not embed its own query string
    #[error("endpoint path must not contain a query string: {0:?}")]
    QueryInPath(String),

    /// A required query parameter is absent
    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),

    /// A query parameter could not be parsed back into its typed value
    #[error("invalid value for parameter {name}: {value:?}")]
    InvalidParameter {
        /// Parameter name
        name: String,
        /// Rejected wire value
        value: String,
    },

    /// Query string was not valid percent-encoded UTF-8
    #[error("malformed query string: {0}")]
    MalformedQuery(String),
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Not a parseable absolute URL
    #[error("invalid base URL: {0}")]
    InvalidUrl(String),

    /// Only http and https are supported
    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    /// URL has no host
    #[error("base URL has no host: {0}")]
    MissingHost(String),

    /// Base URL must not carry a query or fragment
    #[error("base URL must not contain a query or fragment: {0}")]
    UnexpectedQuery(String),
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
