//! Example: Public market data
//!
//! Fetches the tradable books, a ticker, an aggregated order book and the
//! latest trades, then triggers a rejected request to show how exchange
//! errors are reported.
//!
//! Run with: cargo run -p bitso-rest --example market_data

use bitso_rest::bitso_types::Sort;
use bitso_rest::endpoints::TradesQuery;
use bitso_rest::{BitsoRestClient, ClientConfig, RestError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("=== Bitso Market Data Example ===\n");

    let client = BitsoRestClient::with_config(ClientConfig::new().with_timeout(10))?;

    let books = client.available_books().await?;
    println!("Available books: {}", books.len());
    for info in books.iter().take(5) {
        println!(
            "  {:<10} min amount {:<12} min value {}",
            info.book.as_str(), info.minimum_amount, info.minimum_value
        );
    }

    let ticker = client.ticker("btc_mxn").await?;
    println!("\nbtc_mxn ticker:");
    println!("  Last: {}", ticker.last);
    println!("  Bid/Ask: {} / {}", ticker.bid, ticker.ask);
    if let Some(bps) = ticker.spread_bps() {
        println!("  Spread: {:.2} bps", bps);
    }

    let book = client.order_book("btc_mxn", true).await?;
    println!("\nOrder book (sequence {}):", book.sequence);
    println!("  Best bid: {:?}", book.best_bid());
    println!("  Best ask: {:?}", book.best_ask());
    println!("  Spread: {:?}", book.spread());

    let query = TradesQuery::builder().sort(Sort::Descending).limit(10).build();
    let trades = client.trades("btc_mxn", query).await?;
    println!("\nLatest trades:");
    for trade in &trades {
        println!(
            "  #{:<10} {:>4} {} @ {}",
            trade.tid, trade.maker_side.as_str(), trade.amount, trade.price
        );
    }

    // Out of range limit, rejected by the exchange
    let query = TradesQuery::builder().limit(1000).build();
    match client.trades("btc_mxn", query).await {
        Ok(trades) => println!("\nUnexpectedly got {} trades", trades.len()),
        Err(RestError::Api(error)) => {
            println!("\nRejected: {} ({:?})", error, error.category());
        }
        Err(error) if error.is_transport_failure() => {
            println!("\nNo usable response: {}", error);
        }
        Err(error) => return Err(error.into()),
    }

    Ok(())
}
