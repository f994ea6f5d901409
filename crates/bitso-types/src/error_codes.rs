//! Bitso API error codes
//!
//! Bitso reports failures as a four-digit code plus a message. The first two
//! digits select a family; the messages are the only stable human-readable
//! description, so they are kept verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error families, keyed by the first two digits of the code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// 01xx - unclassified server-side errors
    General,
    /// 02xx - request validation and authentication
    Request,
    /// 03xx - orders and order books
    Order,
    /// 04xx - funding and withdrawals
    Funding,
    /// Anything else (including non-numeric codes)
    Unknown,
}

impl ErrorCategory {
    /// Classify a raw code such as "0201"
    pub fn from_code(code: &str) -> Self {
        match code.get(..2) {
            Some("01") => Self::General,
            Some("02") => Self::Request,
            Some("03") => Self::Order,
            Some("04") => Self::Funding,
            _ => Self::Unknown,
        }
    }
}

/// Structured error returned by the exchange for a rejected request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitsoApiError {
    /// Four-digit error code, e.g. "0201"
    #[serde(deserialize_with = "crate::serde_util::code")]
    pub code: String,
    /// Human-readable message from the exchange
    pub message: String,
}

impl BitsoApiError {
    /// Create an error from its parts
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Error family of this code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(&self.code)
    }

    /// Numeric value of the code, if it is numeric
    pub fn code_number(&self) -> Option<u16> {
        self.code.parse().ok()
    }
}

impl fmt::Display for BitsoApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for BitsoApiError {}
