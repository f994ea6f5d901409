//! Trading pair identifiers (btc_mxn format)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trading pair identifier as Bitso spells it: `<major>_<minor>`, lowercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Book(String);

impl Book {
    /// Bitcoin / Mexican peso
    pub const BTC_MXN: &'static str = "btc_mxn";
    /// Ether / Mexican peso
    pub const ETH_MXN: &'static str = "eth_mxn";
    /// XRP / Bitcoin
    pub const XRP_BTC: &'static str = "xrp_btc";
    /// XRP / Mexican peso
    pub const XRP_MXN: &'static str = "xrp_mxn";
    /// Ether / Bitcoin
    pub const ETH_BTC: &'static str = "eth_btc";

    /// Create a book without validating its format. The identifier is
    /// lowercased, as the exchange only knows lowercase books.
    pub fn new(s: impl Into<String>) -> Self {
        let mut s = s.into();
        s.make_ascii_lowercase();
        Self(s)
    }

    /// Get the book as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Major (traded) currency, e.g. "btc" from "btc_mxn"
    pub fn major(&self) -> Option<&str> {
        self.0.split('_').next()
    }

    /// Minor (quote) currency, e.g. "mxn" from "btc_mxn"
    pub fn minor(&self) -> Option<&str> {
        self.0.split('_').nth(1)
    }
}

impl FromStr for Book {
    type Err = BookParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((major, minor)) = s.split_once('_') else {
            return Err(BookParseError::MissingUnderscore(s.to_string()));
        };

        if major.is_empty() || minor.is_empty() {
            return Err(BookParseError::EmptyPart(s.to_string()));
        }

        if minor.contains('_') {
            return Err(BookParseError::InvalidFormat(s.to_string()));
        }

        Ok(Self::new(s))
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Book {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Book {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Book {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Error parsing a book
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookParseError {
    #[error("Book must contain '_': {0}")]
    MissingUnderscore(String),

    #[error("Invalid book format: {0}")]
    InvalidFormat(String),

    #[error("Book has empty major or minor currency: {0}")]
    EmptyPart(String),
}
