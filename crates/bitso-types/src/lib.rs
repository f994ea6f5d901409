//! Shared types for the Bitso REST API v3
//!
//! This crate holds the wire-level vocabulary used by `bitso-rest`: trading
//! pair identifiers, parameter enums, the success and error envelopes, and
//! the payload models returned by each endpoint. It performs no I/O.
//!
//! # Key Types
//!
//! - [`Book`] - Trading pair identifier (e.g., "btc_mxn")
//! - [`Sort`], [`Side`], [`OrderType`] - Enumerated request parameters
//! - [`Envelope`], [`ErrorEnvelope`] - Response envelopes
//! - [`BitsoApiError`], [`ErrorCategory`] - Exchange-reported errors
//! - [`OrderBook`], [`Ticker`], [`Trade`] - Market data payloads
//! - [`Balances`], [`Fees`], [`OpenOrder`] - Account payloads

pub mod account;
pub mod book;
mod serde_util;
pub mod enums;
pub mod envelope;
pub mod error_codes;
pub mod market;

// Re-export commonly used types
pub use account::*;
pub use book::*;
pub use enums::*;
pub use envelope::*;
pub use error_codes::*;
pub use market::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
