//! Common test utilities and fixtures for integration tests
//!
//! Response bodies follow the shapes returned by Bitso API v3

#![allow(dead_code)]

use async_trait::async_trait;
use bitso_rest::{BaseUrl, BitsoRestClient, HttpTransport, ResolvedRequest, TransportError};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// `available_books` response
pub const AVAILABLE_BOOKS: &str = r#"{
    "success": true,
    "payload": [{
        "book": "btc_mxn",
        "minimum_amount": "0.00015",
        "maximum_amount": "500.00",
        "minimum_price": "100.00",
        "maximum_price": "10000000.00",
        "minimum_value": "5",
        "maximum_value": "10000000.00",
        "tick_size": "10"
    }, {
        "book": "eth_mxn",
        "minimum_amount": "0.001",
        "maximum_amount": "1000.00",
        "minimum_price": "10.00",
        "maximum_price": "1000000.00",
        "minimum_value": "5",
        "maximum_value": "10000000.00",
        "tick_size": ""
    }]
}"#;

/// `ticker?book=btc_mxn` response
pub const TICKER: &str = r#"{
    "success": true,
    "payload": {
        "book": "btc_mxn",
        "volume": "22.31349615",
        "high": "5750.00",
        "last": "5633.98",
        "low": "5450.00",
        "vwap": "5393.45",
        "ask": "5632.24",
        "bid": "5520.01",
        "created_at": "2016-04-08T17:52:31.000+00:00"
    }
}"#;

/// Aggregated `order_book?book=btc_mxn` response
pub const ORDER_BOOK: &str = r#"{
    "success": true,
    "payload": {
        "asks": [{
            "book": "btc_mxn",
            "price": "5632.24",
            "amount": "1.34491802"
        }, {
            "book": "btc_mxn",
            "price": "5633.44",
            "amount": "0.4259"
        }],
        "bids": [{
            "book": "btc_mxn",
            "price": "6123.55",
            "amount": "1.12560000"
        }, {
            "book": "btc_mxn",
            "price": "6121.55",
            "amount": "2.23976"
        }],
        "updated_at": "2016-04-08T17:52:31.000+00:00",
        "sequence": "27214"
    }
}"#;

/// `trades?book=eth_mxn` response, newest first
pub const TRADES: &str = r#"{
    "success": true,
    "payload": [{
        "book": "eth_mxn",
        "created_at": "2016-04-08T17:52:31.000+00:00",
        "amount": "0.02000000",
        "maker_side": "buy",
        "price": "5545.01",
        "tid": 55845
    }, {
        "book": "eth_mxn",
        "created_at": "2016-04-08T17:52:31.000+00:00",
        "amount": "0.33723939",
        "maker_side": "sell",
        "price": "5633.98",
        "tid": 55844
    }]
}"#;

/// `balance` response
pub const BALANCE: &str = r#"{
    "success": true,
    "payload": {
        "balances": [{
            "currency": "mxn",
            "total": "100.1234",
            "locked": "25.1234",
            "available": "75.0000"
        }, {
            "currency": "btc",
            "total": "0.00000000",
            "locked": "0.00000000",
            "available": "0.00000000"
        }]
    }
}"#;

/// Rejection for an out-of-range trades limit
pub const INVALID_LIMIT: &str =
    r#"{"success":false,"error":{"code":"0201","message":"Parameter limit is not valid"}}"#;

/// Rejection with a numeric code
pub const NUMERIC_CODE_ERROR: &str =
    r#"{"success":false,"error":{"code":301,"message":"Unknown OrderBook xxx_mxn"}}"#;

/// Gateway error page
pub const HTML_ERROR: &str = "<html><body><h1>502 Bad Gateway</h1></body></html>";

/// Scripted reply
pub enum Reply {
    Body(&'static str),
    Fail(fn() -> TransportError),
}

/// Transport that answers by request path and records what it saw
///
/// Replies are keyed by the URL path after the base so concurrent calls
/// resolve independently of scheduling order.
#[derive(Default)]
pub struct ScriptedTransport {
    routes: Mutex<HashMap<String, Reply>>,
    seen: Mutex<Vec<ResolvedRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(self, path: &str, reply: Reply) -> Self {
        self.routes.lock().insert(path.to_string(), reply);
        self
    }

    pub fn seen(&self) -> Vec<ResolvedRequest> {
        self.seen.lock().clone()
    }

    fn path_of(url: &str) -> &str {
        let rest = url.strip_prefix(TEST_BASE).unwrap_or(url);
        rest.split('?').next().unwrap_or(rest)
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: &ResolvedRequest) -> Result<Vec<u8>, TransportError> {
        self.seen.lock().push(request.clone());
        tokio::task::yield_now().await;

        match self.routes.lock().get(Self::path_of(&request.url)) {
            Some(Reply::Body(body)) => Ok(body.as_bytes().to_vec()),
            Some(Reply::Fail(make)) => Err(make()),
            None => Err(TransportError::Connection(format!(
                "no route for {}",
                request.url
            ))),
        }
    }
}

/// Base of the mock host
pub const TEST_BASE: &str = "https://mock.bitso.test/v3/";

/// Client wired to a scripted transport on the mock host
pub fn scripted_client(transport: ScriptedTransport) -> (BitsoRestClient, Arc<ScriptedTransport>) {
    let transport = Arc::new(transport);
    let base = BaseUrl::parse(TEST_BASE).expect("valid test base");
    (BitsoRestClient::with_transport(base, transport.clone()), transport)
}
