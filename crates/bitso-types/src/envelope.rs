//! Response envelopes
//!
//! Every Bitso response wraps its data: successful calls carry
//! `{"success": true, "payload": ...}` and rejected calls carry
//! `{"success": false, "error": {"code": ..., "message": ...}}`.

use crate::error_codes::BitsoApiError;
use serde::{Deserialize, Serialize};

/// Successful response wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Success flag as reported by the exchange
    pub success: bool,
    /// Operation-specific payload
    pub payload: T,
}

impl<T> Envelope<T> {
    /// Discard the wrapper and keep the payload
    pub fn into_payload(self) -> T {
        self.payload
    }
}

/// Error response wrapper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Success flag as reported by the exchange (false for well-formed errors)
    pub success: bool,
    /// Structured error
    pub error: BitsoApiError,
}
