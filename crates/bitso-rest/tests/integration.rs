//! Integration tests for the Bitso REST client
//!
//! Drives the public client API end to end over a scripted transport:
//! request resolution, dual decoding of bodies and the three call outcomes.

mod common;

use bitso_rest::bitso_types::{Book, ErrorCategory, Side, Sort};
use bitso_rest::endpoints::{GetOrderBook, GetTrades, TradesQuery};
use bitso_rest::{
    decode_response, parse_query, ApiRequest, BaseUrl, Endpoint, Method, Outcome, RestError,
    TransportError, TransportFailure,
};
use common::*;
use rust_decimal_macros::dec;

// =============================================================================
// Request Resolution
// =============================================================================

#[test]
fn test_order_book_url() {
    let request = GetOrderBook::new("btc_mxn").aggregated(true)
        .endpoint()
        .resolve(&BaseUrl::production());
    assert_eq!(
        request.url,
        "https://api.bitso.com/v3/order_book/?book=btc_mxn&aggregate=true"
    );
    assert_eq!(request.method, Method::Get);
}

#[test]
fn test_trades_url() {
    let query = TradesQuery::builder().sort(Sort::Descending).limit(50).build();
    let request = GetTrades::new("eth_mxn")
        .with_query(query)
        .endpoint()
        .resolve(&BaseUrl::production());
    assert_eq!(
        request.url,
        "https://api.bitso.com/v3/trades?book=eth_mxn&sort=desc&limit=50"
    );
}

#[test]
fn test_resolution_is_deterministic() {
    let base = BaseUrl::production();
    let endpoint = GetTrades::new("btc_mxn")
        .with_query(TradesQuery::builder().marker("12345").build())
        .endpoint();

    let first = endpoint.resolve(&base);
    let second = endpoint.resolve(&base);
    assert_eq!(first, second);
    assert_eq!(
        first.url,
        "https://api.bitso.com/v3/trades?book=btc_mxn&marker=12345&sort=asc&limit=100"
    );
}

#[test]
fn test_custom_base_is_used() {
    let base = BaseUrl::parse("http://localhost:8080/v3").unwrap();
    let request = Endpoint::get("available_books/").unwrap().resolve(&base);
    assert_eq!(request.url, "http://localhost:8080/v3/available_books/");
}

#[test]
fn test_empty_path_rejected() {
    assert!(Endpoint::get("").is_err());
}

#[test]
fn test_query_round_trip() {
    let original = GetOrderBook::new("btc_mxn").aggregated(true);
    let request = original.endpoint().resolve(&BaseUrl::production());
    let pairs = parse_query(request.query_string().unwrap()).unwrap();
    assert_eq!(GetOrderBook::from_query(&pairs).unwrap(), original);

    let original = GetTrades::new("eth_mxn").with_query(
        TradesQuery::builder()
            .marker("55844")
            .sort(Sort::Descending)
            .limit(50)
            .build(),
    );
    let request = original.endpoint().resolve(&BaseUrl::production());
    let pairs = parse_query(request.query_string().unwrap()).unwrap();
    assert_eq!(GetTrades::from_query(&pairs).unwrap(), original);
}

// =============================================================================
// Response Decoding
// =============================================================================

#[test]
fn test_error_envelope_is_never_success() {
    let outcome: Outcome<bitso_rest::bitso_types::Envelope<Vec<bitso_rest::bitso_types::Trade>>> =
        decode_response(INVALID_LIMIT.as_bytes());
    assert!(outcome.is_domain_error());
}

#[test]
fn test_garbage_is_transport_failure() {
    let outcome: Outcome<bitso_rest::bitso_types::Envelope<serde_json::Value>> =
        decode_response(HTML_ERROR.as_bytes());
    assert!(matches!(
        outcome,
        Outcome::TransportFailure(TransportFailure::Undecodable { .. })
    ));

    let outcome: Outcome<bitso_rest::bitso_types::Envelope<serde_json::Value>> =
        decode_response(b"");
    assert!(outcome.is_transport_failure());
}

// =============================================================================
// Client Calls
// =============================================================================

#[tokio::test]
async fn test_available_books() {
    let (client, _) = scripted_client(
        ScriptedTransport::new().route("available_books/", Reply::Body(AVAILABLE_BOOKS)),
    );

    let books = client.available_books().await.unwrap();
    assert_eq!(books.len(), 2);
    assert_eq!(books[0].book, Book::from(Book::BTC_MXN));
    assert_eq!(books[0].tick_size, Some(dec!(10)));
    assert_eq!(books[1].tick_size, None);
}

#[tokio::test]
async fn test_ticker() {
    let (client, transport) =
        scripted_client(ScriptedTransport::new().route("ticker/", Reply::Body(TICKER)));

    let ticker = client.ticker("btc_mxn").await.unwrap();
    assert_eq!(ticker.last, dec!(5633.98));
    assert_eq!(ticker.bid, dec!(5520.01));
    assert!(ticker.created_at().is_some());

    assert_eq!(
        transport.seen()[0].url,
        "https://mock.bitso.test/v3/ticker/?book=btc_mxn"
    );
}

#[tokio::test]
async fn test_order_book() {
    let (client, transport) =
        scripted_client(ScriptedTransport::new().route("order_book/", Reply::Body(ORDER_BOOK)));

    let book = client.order_book("btc_mxn", true).await.unwrap();
    assert_eq!(book.asks.len(), 2);
    assert_eq!(book.best_ask(), Some(dec!(5632.24)));
    assert_eq!(book.best_bid(), Some(dec!(6123.55)));
    assert_eq!(book.sequence, "27214");

    assert_eq!(
        transport.seen()[0].url,
        "https://mock.bitso.test/v3/order_book/?book=btc_mxn&aggregate=true"
    );
}

#[tokio::test]
async fn test_trades_descending() {
    let (client, transport) =
        scripted_client(ScriptedTransport::new().route("trades", Reply::Body(TRADES)));

    let query = TradesQuery::builder().sort(Sort::Descending).limit(50).build();
    let trades = client.trades("eth_mxn", query).await.unwrap();

    assert_eq!(trades.len(), 2);
    assert_eq!(trades[0].tid, "55845");
    assert_eq!(trades[0].maker_side, Side::Buy);
    assert_eq!(trades[1].price, dec!(5633.98));

    assert_eq!(
        transport.seen()[0].url,
        "https://mock.bitso.test/v3/trades?book=eth_mxn&sort=desc&limit=50"
    );
}

#[tokio::test]
async fn test_balance() {
    let (client, _) =
        scripted_client(ScriptedTransport::new().route("balance/", Reply::Body(BALANCE)));

    let balances = client.balance().await.unwrap();
    let mxn = balances.get("MXN").unwrap();
    assert_eq!(mxn.available, dec!(75.0000));
    assert_eq!(balances.non_zero().count(), 1);
}

#[tokio::test]
async fn test_domain_error() {
    let (client, _) =
        scripted_client(ScriptedTransport::new().route("trades", Reply::Body(INVALID_LIMIT)));

    let err = client
        .trades("eth_mxn", TradesQuery::builder().limit(1000).build())
        .await
        .unwrap_err();

    assert!(err.is_domain_error());
    assert!(!err.is_transport_failure());
    match err {
        RestError::Api(api) => {
            assert_eq!(api.code, "0201");
            assert_eq!(api.message, "Parameter limit is not valid");
            assert_eq!(api.category(), ErrorCategory::Request);
        }
        other => panic!("Expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_numeric_error_code() {
    let (client, _) = scripted_client(
        ScriptedTransport::new().route("ticker/", Reply::Body(NUMERIC_CODE_ERROR)),
    );

    let err = client.ticker("xxx_mxn").await.unwrap_err();
    let api = err.api_error().unwrap();
    assert_eq!(api.code, "0301");
    assert_eq!(api.category(), ErrorCategory::Order);
}

#[tokio::test]
async fn test_undecodable_body() {
    let (client, _) =
        scripted_client(ScriptedTransport::new().route("ticker/", Reply::Body(HTML_ERROR)));

    let err = client.ticker("btc_mxn").await.unwrap_err();
    assert!(err.is_transport_failure());
    assert!(matches!(err, RestError::Undecodable { .. }));
}

#[tokio::test]
async fn test_no_bytes() {
    let (client, _) = scripted_client(
        ScriptedTransport::new().route("ticker/", Reply::Fail(|| TransportError::Timeout)),
    );

    let err = client.ticker("btc_mxn").await.unwrap_err();
    assert!(matches!(err, RestError::Transport(TransportError::Timeout)));
}

#[tokio::test]
async fn test_wrong_payload_shape_is_transport_failure() {
    // A success envelope whose payload is not a ticker
    let (client, _) =
        scripted_client(ScriptedTransport::new().route("ticker/", Reply::Body(BALANCE)));

    let err = client.ticker("btc_mxn").await.unwrap_err();
    assert!(err.is_transport_failure());
}

#[tokio::test]
async fn test_three_way_outcome() {
    let (client, _) = scripted_client(
        ScriptedTransport::new()
            .route("ticker/", Reply::Body(TICKER))
            .route("trades", Reply::Body(INVALID_LIMIT)),
    );

    let executor = client.executor();

    let outcome = executor
        .dispatch::<bitso_rest::bitso_types::Envelope<bitso_rest::bitso_types::Ticker>>(
            &bitso_rest::endpoints::GetTicker::new("btc_mxn").endpoint(),
        )
        .await;
    assert!(outcome.is_success());

    let outcome = executor
        .dispatch::<bitso_rest::bitso_types::Envelope<Vec<bitso_rest::bitso_types::Trade>>>(
            &GetTrades::new("btc_mxn").endpoint(),
        )
        .await;
    assert!(outcome.is_domain_error());

    let outcome = executor
        .dispatch::<serde_json::Value>(&Endpoint::get("fees/").unwrap())
        .await;
    assert!(outcome.is_transport_failure());
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_calls_are_independent() {
    let (client, transport) = scripted_client(
        ScriptedTransport::new()
            .route("ticker/", Reply::Body(TICKER))
            .route("order_book/", Reply::Body(ORDER_BOOK))
            .route("trades", Reply::Body(INVALID_LIMIT))
            .route("balance/", Reply::Fail(|| TransportError::Cancelled)),
    );

    let (ticker, book, trades, balance) = tokio::join!(
        client.ticker("btc_mxn"),
        client.order_book("btc_mxn", false),
        client.trades("btc_mxn", TradesQuery::default()),
        client.balance(),
    );

    assert!(ticker.is_ok());
    assert!(book.is_ok());
    assert!(trades.unwrap_err().is_domain_error());
    assert!(balance.unwrap_err().is_transport_failure());
    assert_eq!(transport.seen().len(), 4);

    let mut handles = Vec::new();
    for _ in 0..8 {
        let client = client.clone();
        handles.push(tokio::spawn(async move { client.ticker("btc_mxn").await }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap().last, dec!(5633.98));
    }
}
