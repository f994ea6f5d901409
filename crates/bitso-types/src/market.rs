//! Public market data payloads

use crate::book::Book;
use crate::enums::Side;
use crate::serde_util;
use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Parse a Bitso timestamp.
///
/// Bitso mixes RFC 3339 (`2017-12-03T21:08:09.000+00:00`) with a colon-less
/// offset (`2017-12-03T21:08:09+0000`); both are accepted.
pub fn parse_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s)
        .or_else(|_| DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .ok()
}

/// Trading limits for one available book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookInfo {
    /// Book identifier
    pub book: Book,
    /// Minimum order amount (major currency)
    #[serde(deserialize_with = "serde_util::decimal")]
    pub minimum_amount: Decimal,
    /// Maximum order amount (major currency)
    #[serde(deserialize_with = "serde_util::decimal")]
    pub maximum_amount: Decimal,
    /// Minimum price
    #[serde(deserialize_with = "serde_util::decimal")]
    pub minimum_price: Decimal,
    /// Maximum price
    #[serde(deserialize_with = "serde_util::decimal")]
    pub maximum_price: Decimal,
    /// Minimum order value (minor currency)
    #[serde(deserialize_with = "serde_util::decimal")]
    pub minimum_value: Decimal,
    /// Maximum order value (minor currency)
    #[serde(deserialize_with = "serde_util::decimal")]
    pub maximum_value: Decimal,
    /// Price increment, when the exchange reports one
    #[serde(default, deserialize_with = "serde_util::optional_decimal")]
    pub tick_size: Option<Decimal>,
}

impl BookInfo {
    /// Check whether an order of `amount` at `price` fits this book's limits
    pub fn accepts(&self, amount: Decimal, price: Decimal) -> bool {
        let value = amount * price;
        (self.minimum_amount..=self.maximum_amount).contains(&amount)
            && (self.minimum_price..=self.maximum_price).contains(&price)
            && (self.minimum_value..=self.maximum_value).contains(&value)
    }
}

/// 24h trading summary for one book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    /// Book identifier
    pub book: Book,
    /// Last 24 hours volume
    #[serde(deserialize_with = "serde_util::decimal")]
    pub volume: Decimal,
    /// Last 24 hours high
    #[serde(deserialize_with = "serde_util::decimal")]
    pub high: Decimal,
    /// Last traded price
    #[serde(deserialize_with = "serde_util::decimal")]
    pub last: Decimal,
    /// Last 24 hours low
    #[serde(deserialize_with = "serde_util::decimal")]
    pub low: Decimal,
    /// Last 24 hours volume weighted average price
    #[serde(deserialize_with = "serde_util::decimal")]
    pub vwap: Decimal,
    /// Lowest sell order
    #[serde(deserialize_with = "serde_util::decimal")]
    pub ask: Decimal,
    /// Highest buy order
    #[serde(deserialize_with = "serde_util::decimal")]
    pub bid: Decimal,
    /// When this ticker was generated
    pub created_at: String,
}

impl Ticker {
    /// Mid price (average of bid and ask)
    pub fn mid_price(&self) -> Decimal {
        (self.ask + self.bid) / Decimal::TWO
    }

    /// Spread in basis points of the mid price
    pub fn spread_bps(&self) -> Option<Decimal> {
        let mid = self.mid_price();
        if mid.is_zero() {
            return None;
        }
        Some((self.ask - self.bid) / mid * Decimal::from(10000))
    }

    /// Parsed `created_at`
    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.created_at)
    }
}

/// One price level (aggregated) or one resting order (unaggregated)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceLevel {
    /// Book identifier
    pub book: Book,
    /// Price
    #[serde(deserialize_with = "serde_util::decimal")]
    pub price: Decimal,
    /// Amount in major currency
    #[serde(deserialize_with = "serde_util::decimal")]
    pub amount: Decimal,
    /// Order id, only present on unaggregated books
    #[serde(default)]
    pub oid: Option<String>,
}

/// Order book snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    /// Sell side, best first
    pub asks: Vec<PriceLevel>,
    /// Buy side, best first
    pub bids: Vec<PriceLevel>,
    /// Snapshot timestamp
    pub updated_at: String,
    /// Monotonic sequence number of the snapshot
    pub sequence: String,
}

impl OrderBook {
    /// Get the best ask price
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.first().map(|level| level.price)
    }

    /// Get the best bid price
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.first().map(|level| level.price)
    }

    /// Get the spread
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()? - self.best_bid()?)
    }

    /// Sequence number as an integer
    pub fn sequence_number(&self) -> Option<u64> {
        self.sequence.parse().ok()
    }

    /// Parsed `updated_at`
    pub fn updated_at(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.updated_at)
    }
}

/// Public trade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Book identifier
    pub book: Book,
    /// Execution timestamp
    pub created_at: String,
    /// Traded amount in major currency
    #[serde(deserialize_with = "serde_util::decimal")]
    pub amount: Decimal,
    /// Side of the maker order
    pub maker_side: Side,
    /// Execution price
    #[serde(deserialize_with = "serde_util::decimal")]
    pub price: Decimal,
    /// Trade id; also the pagination marker
    #[serde(deserialize_with = "serde_util::id_string")]
    pub tid: String,
}

impl Trade {
    /// Marker to pass back to continue paginating after this trade
    pub fn marker(&self) -> &str {
        &self.tid
    }

    /// Parsed `created_at`
    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const ORDER_BOOK: &str = r#"{
        "asks": [
            {"book": "btc_mxn", "price": "5632.24", "amount": "1.34491802"},
            {"book": "btc_mxn", "price": "5633.44", "amount": "0.4259"}
        ],
        "bids": [
            {"book": "btc_mxn", "price": "6123.55", "amount": "1.12560000"},
            {"book": "btc_mxn", "price": "6121.55", "amount": "2.23976"}
        ],
        "updated_at": "2016-04-08T17:52:31.000+00:00",
        "sequence": "27214"
    }"#;

    #[test]
    fn test_order_book_decode() {
        let book: OrderBook = serde_json::from_str(ORDER_BOOK).unwrap();
        assert_eq!(book.asks.len(), 2);
        assert_eq!(book.best_ask(), Some(dec!(5632.24)));
        assert_eq!(book.best_bid(), Some(dec!(6123.55)));
        assert_eq!(book.sequence_number(), Some(27214));
        assert!(book.updated_at().is_some());
        assert!(book.asks[0].oid.is_none());
    }

    #[test]
    fn test_unaggregated_level_keeps_oid() {
        let json = r#"{"book": "btc_mxn", "price": "1", "amount": "2", "oid": "r4uZ0b5wy0l"}"#;
        let level: PriceLevel = serde_json::from_str(json).unwrap();
        assert_eq!(level.oid.as_deref(), Some("r4uZ0b5wy0l"));
    }

    #[test]
    fn test_trade_decode() {
        let json = r#"{
            "book": "btc_mxn",
            "created_at": "2016-04-08T17:52:31.000+00:00",
            "amount": "0.02000000",
            "maker_side": "buy",
            "price": "5545.01",
            "tid": 55845
        }"#;
        let trade: Trade = serde_json::from_str(json).unwrap();
        assert_eq!(trade.marker(), "55845");
        assert_eq!(trade.maker_side, Side::Buy);
        assert_eq!(trade.amount, dec!(0.02));
    }

    #[test]
    fn test_ticker_math() {
        let json = r#"{
            "book": "btc_mxn",
            "volume": "22.31349615",
            "high": "5750.00",
            "last": "5633.98",
            "low": "5450.00",
            "vwap": "5393.45",
            "ask": "5632.24",
            "bid": "5520.01",
            "created_at": "2016-04-08T17:52:31.000+00:00"
        }"#;
        let ticker: Ticker = serde_json::from_str(json).unwrap();
        assert_eq!(ticker.mid_price(), dec!(5576.125));
        assert!(ticker.spread_bps().unwrap() > Decimal::ZERO);
    }

    #[test]
    fn test_book_info_limits() {
        let json = r#"{
            "book": "btc_mxn",
            "minimum_amount": "0.003",
            "maximum_amount": "1000.00",
            "minimum_price": "100.00",
            "maximum_price": "1000000.00",
            "minimum_value": "25.00",
            "maximum_value": "1000000.00"
        }"#;
        let info: BookInfo = serde_json::from_str(json).unwrap();
        assert!(info.tick_size.is_none());
        assert!(info.accepts(dec!(0.01), dec!(5000)));
        assert!(!info.accepts(dec!(0.001), dec!(5000)));
    }

    #[test]
    fn test_parse_timestamp_variants() {
        assert!(parse_timestamp("2017-12-03T21:08:09.000+00:00").is_some());
        assert!(parse_timestamp("2017-12-03T21:08:09+0000").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }
}
