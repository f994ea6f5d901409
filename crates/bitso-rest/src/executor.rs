//! Request execution and response classification
//!
//! Each call walks the same short state machine:
//! `Idle -> Dispatched -> {Succeeded, FailedDomain, FailedTransport}`.
//! The executor keeps no state between calls, so any number of calls may be
//! in flight at once; the only suspension point is the transport.
//!
//! A response body is decoded twice, independently: once as the expected
//! payload shape and once as the error envelope. The outcome is picked by
//! [`decode_response`]:
//!
//! | payload decode | error decode | outcome |
//! |---|---|---|
//! | ok | fails | [`Outcome::Success`] |
//! | fails | ok | [`Outcome::DomainError`] |
//! | fails | fails | [`Outcome::TransportFailure`] |
//! | ok | ok | [`Outcome::Success`] (payload wins) |

use crate::config::BaseUrl;
use crate::endpoint::{ApiRequest, Endpoint};
use crate::error::{RestError, RestResult};
use crate::transport::{HttpTransport, TransportError};
use bitso_types::{BitsoApiError, Envelope, ErrorEnvelope};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Why no interpretable payload was obtained
#[derive(Debug, thiserror::Error)]
pub enum TransportFailure {
    /// The transport produced no bytes
    #[error(transparent)]
    NoResponse(#[from] TransportError),

    /// Bytes arrived but matched neither the payload nor the error envelope
    #[error("undecodable response ({len} bytes)")]
    Undecodable {
        /// Size of the rejected body
        len: usize,
    },
}

/// Terminal state of one call
#[derive(Debug)]
pub enum Outcome<T> {
    /// Payload decoded
    Success(T),
    /// Exchange rejected the request
    DomainError(BitsoApiError),
    /// Nothing interpretable came back
    TransportFailure(TransportFailure),
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_domain_error(&self) -> bool {
        matches!(self, Self::DomainError(_))
    }

    pub fn is_transport_failure(&self) -> bool {
        matches!(self, Self::TransportFailure(_))
    }

    /// Transform the success value, leaving failures untouched
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::DomainError(error) => Outcome::DomainError(error),
            Self::TransportFailure(failure) => Outcome::TransportFailure(failure),
        }
    }

    /// Collapse into a `Result`
    pub fn into_result(self) -> RestResult<T> {
        match self {
            Self::Success(value) => Ok(value),
            Self::DomainError(error) => Err(RestError::Api(error)),
            Self::TransportFailure(TransportFailure::NoResponse(error)) => {
                Err(RestError::Transport(error))
            }
            Self::TransportFailure(TransportFailure::Undecodable { len }) => {
                Err(RestError::Undecodable { len })
            }
        }
    }
}

/// Classify a response body.
///
/// Both decodes always run; when the shapes overlap the payload wins.
pub fn decode_response<T: DeserializeOwned>(body: &[u8]) -> Outcome<T> {
    let payload = serde_json::from_slice::<T>(body);
    let error = serde_json::from_slice::<ErrorEnvelope>(body);

    match (payload, error) {
        (Ok(value), Err(_)) => Outcome::Success(value),
        (Ok(value), Ok(envelope)) => {
            debug!(code = %envelope.error.code, "Body matches both shapes, keeping payload");
            Outcome::Success(value)
        }
        (Err(_), Ok(envelope)) => Outcome::DomainError(envelope.error),
        (Err(payload_err), Err(_)) => {
            debug!(len = body.len(), error = %payload_err, "Body matches neither shape");
            Outcome::TransportFailure(TransportFailure::Undecodable { len: body.len() })
        }
    }
}

/// Stateless executor: resolves descriptors against a base and dispatches
/// them through a shared transport.
#[derive(Clone)]
pub struct RequestExecutor {
    base: BaseUrl,
    transport: Arc<dyn HttpTransport>,
}

impl RequestExecutor {
    pub fn new(base: BaseUrl, transport: Arc<dyn HttpTransport>) -> Self {
        Self { base, transport }
    }

    /// API base this executor resolves against
    pub fn base(&self) -> &BaseUrl {
        &self.base
    }

    /// Run one call and report its terminal state. `T` is the full success
    /// schema of the body (usually an [`Envelope`]).
    #[instrument(skip(self, endpoint), fields(method = %endpoint.method(), path = endpoint.path()))]
    pub async fn dispatch<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Outcome<T> {
        let request = endpoint.resolve(&self.base);
        debug!(url = %request.url, "Dispatching request");

        let body = match self.transport.send(&request).await {
            Ok(body) => body,
            Err(error) => {
                debug!(%error, "No response");
                return Outcome::TransportFailure(TransportFailure::NoResponse(error));
            }
        };

        let outcome = decode_response::<T>(&body);
        debug!(
            success = outcome.is_success(),
            domain_error = outcome.is_domain_error(),
            "Response classified"
        );
        outcome
    }

    /// [`dispatch`](Self::dispatch) collapsed into a `Result`
    pub async fn execute<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> RestResult<T> {
        self.dispatch(endpoint).await.into_result()
    }

    /// Run a typed operation and unwrap its success envelope
    pub async fn call<R: ApiRequest>(&self, request: &R) -> RestResult<R::Payload> {
        let endpoint = request.endpoint();
        self.execute::<Envelope<R::Payload>>(&endpoint)
            .await
            .map(Envelope::into_payload)
    }
}

impl std::fmt::Debug for RequestExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestExecutor")
            .field("base", &self.base)
            .finish()
    }
}
