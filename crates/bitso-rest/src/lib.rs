//! REST API client for the Bitso cryptocurrency exchange
//!
//! This crate builds requests for Bitso's v3 REST API and decodes the
//! responses into typed payloads, keeping exchange rejections apart from
//! transport problems.
//!
//! # Features
//!
//! - **Market Data**: Available books, ticker, order book, trades
//! - **Account**: Status, balances, fees, user trades, open orders
//! - **Trading**: Market and limit orders
//! - **Funding**: Deposit destinations, crypto and SPEI withdrawals
//!
//! # Outcomes
//!
//! Every call ends in exactly one of:
//!
//! - a decoded payload,
//! - a domain error ([`RestError::Api`]) carrying the exchange's code and message,
//! - a transport failure ([`RestError::Transport`] when no bytes arrived,
//!   [`RestError::Undecodable`] when the bytes fit neither shape).
//!
//! A body is decoded as the payload and as the error envelope
//! independently. When both succeed the payload wins.
//!
//! # Example
//!
//! ```no_run
//! use bitso_rest::BitsoRestClient;
//! use bitso_rest::endpoints::TradesQuery;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BitsoRestClient::new()?;
//!
//!     let ticker = client.ticker("btc_mxn").await?;
//!     println!("BTC/MXN last: {}", ticker.last);
//!
//!     let trades = client.trades("btc_mxn", TradesQuery::default()).await?;
//!     println!("{} recent trades", trades.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Authentication
//!
//! Private endpoints need signed requests. Signing is not done here: wrap
//! [`ReqwestTransport`] in your own [`HttpTransport`] and hand it to
//! [`BitsoRestClient::with_transport`].

pub mod client;
pub mod config;
pub mod endpoint;
pub mod endpoints;
pub mod error;
pub mod executor;
pub mod params;
pub mod transport;

// Re-export main types
pub use client::BitsoRestClient;
pub use config::{BaseUrl, ClientConfig};
pub use endpoint::{ApiRequest, Endpoint, Method, ResolvedRequest};
pub use error::{ConfigError, EndpointError, RestError, RestResult};
pub use executor::{decode_response, Outcome, RequestExecutor, TransportFailure};
pub use params::{parse_query, ParamValue, QueryParams};
pub use transport::{HttpTransport, ReqwestTransport, TransportError};

pub use bitso_types;
