//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use crate::endpoint::{ApiRequest, Endpoint, Method};
use crate::error::EndpointError;
use crate::params::{self, find, invalid};
use bitso_types::{Book, BookInfo, OrderBook, Sort, Ticker, Trade};
use typed_builder::TypedBuilder;

pub const AVAILABLE_BOOKS: &str = "available_books/";
pub const TICKER: &str = "ticker/";
pub const ORDER_BOOK: &str = "order_book/";
pub const TRADES: &str = "trades";

/// Page size used when the caller does not pick one
pub const DEFAULT_TRADES_LIMIT: u32 = 100;

/// List the books open for trading and their order limits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvailableBooks;

impl ApiRequest for AvailableBooks {
    type Payload = Vec<BookInfo>;

    fn endpoint(&self) -> Endpoint {
        Endpoint::fixed(Method::Get, AVAILABLE_BOOKS)
    }
}

/// 24h ticker for one book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetTicker {
    pub book: Book,
}

impl GetTicker {
    pub fn new(book: impl Into<Book>) -> Self {
        Self { book: book.into() }
    }
}

impl ApiRequest for GetTicker {
    type Payload = Ticker;

    fn endpoint(&self) -> Endpoint {
        Endpoint::fixed(Method::Get, TICKER).param("book", &self.book)
    }
}

/// Order book snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetOrderBook {
    pub book: Book,
    /// Merge orders at the same price into one level
    pub aggregate: bool,
}

impl GetOrderBook {
    /// Unaggregated snapshot of `book`
    pub fn new(book: impl Into<Book>) -> Self {
        Self {
            book: book.into(),
            aggregate: false,
        }
    }

    pub fn aggregated(mut self, aggregate: bool) -> Self {
        self.aggregate = aggregate;
        self
    }

    /// Rebuild the request from decoded query parameters
    pub fn from_query(pairs: &[(String, String)]) -> Result<Self, EndpointError> {
        let book = find(pairs, "book").ok_or(EndpointError::MissingParameter("book"))?;
        let book = Book::new(book);
        let aggregate = match find(pairs, "aggregate") {
            Some(value) => params::parse_flag("aggregate", value)?,
            None => false,
        };
        Ok(Self { book, aggregate })
    }
}

impl ApiRequest for GetOrderBook {
    type Payload = OrderBook;

    fn endpoint(&self) -> Endpoint {
        Endpoint::fixed(Method::Get, ORDER_BOOK)
            .param("book", &self.book)
            .param("aggregate", self.aggregate)
    }
}

/// Pagination for trade listings (public and user trades).
///
/// `limit` must be between 1 and 100; the exchange rejects anything else
/// with a domain error and this layer does not clamp it.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct TradesQuery {
    /// Continue after this trade id
    #[builder(default, setter(strip_option, into))]
    pub marker: Option<String>,
    /// Result ordering
    #[builder(default)]
    pub sort: Sort,
    /// Page size
    #[builder(default = DEFAULT_TRADES_LIMIT)]
    pub limit: u32,
}

impl Default for TradesQuery {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl TradesQuery {
    /// Append `marker`, `sort` and `limit`, in that order
    pub fn apply(&self, endpoint: Endpoint) -> Endpoint {
        endpoint
            .param_opt("marker", self.marker.clone())
            .param("sort", self.sort)
            .param("limit", self.limit)
    }

    /// Rebuild from decoded query parameters; absent names take defaults
    pub fn from_query(pairs: &[(String, String)]) -> Result<Self, EndpointError> {
        let sort: Sort = match find(pairs, "sort") {
            Some(value) => value.parse().map_err(|_| invalid("sort", value))?,
            None => Sort::default(),
        };
        let limit: u32 = match find(pairs, "limit") {
            Some(value) => value.parse().map_err(|_| invalid("limit", value))?,
            None => DEFAULT_TRADES_LIMIT,
        };
        Ok(Self {
            marker: find(pairs, "marker").map(str::to_string),
            sort,
            limit,
        })
    }
}

/// Recent public trades for one book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetTrades {
    pub book: Book,
    pub query: TradesQuery,
}

impl GetTrades {
    pub fn new(book: impl Into<Book>) -> Self {
        Self {
            book: book.into(),
            query: TradesQuery::default(),
        }
    }

    pub fn with_query(mut self, query: TradesQuery) -> Self {
        self.query = query;
        self
    }

    /// Rebuild the request from decoded query parameters
    pub fn from_query(pairs: &[(String, String)]) -> Result<Self, EndpointError> {
        let book = find(pairs, "book").ok_or(EndpointError::MissingParameter("book"))?;
        let book = Book::new(book);
        Ok(Self {
            book,
            query: TradesQuery::from_query(pairs)?,
        })
    }
}

impl ApiRequest for GetTrades {
    type Payload = Vec<Trade>;

    fn endpoint(&self) -> Endpoint {
        self.query
            .apply(Endpoint::fixed(Method::Get, TRADES).param("book", &self.book))
    }
}
