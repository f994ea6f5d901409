//! Main REST client implementation

use crate::config::{BaseUrl, ClientConfig};
use crate::endpoint::ApiRequest;
use crate::endpoints::{
    AvailableBooks, BankCodes, CryptoWithdrawal, GetAccountStatus, GetBalance, GetFees,
    GetFundingDestination, GetOpenOrders, GetOrderBook, GetTicker, GetTrades, GetUserTrades,
    PlaceOrder, RegisterPhoneNumber, SpeiWithdrawal, TradesQuery, VerifyPhoneNumber,
};
use crate::error::RestResult;
use crate::executor::RequestExecutor;
use crate::transport::{HttpTransport, ReqwestTransport};
use bitso_types::{
    AccountStatus, BankCode, Balances, Book, BookInfo, Fees, FundingDestination, OpenOrder,
    OrderBook, PhoneNumberStatus, PlacedOrder, Ticker, Trade, UserTrade, Withdrawal,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::info;

/// Bitso REST API client
///
/// Thin typed facade over a [`RequestExecutor`]. Cloning is cheap and clones
/// share the underlying transport.
///
/// # Example
///
/// ```no_run
/// use bitso_rest::BitsoRestClient;
/// use bitso_rest::endpoints::TradesQuery;
/// use bitso_rest::bitso_types::Sort;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = BitsoRestClient::new()?;
///
///     let book = client.order_book("btc_mxn", true).await?;
///     println!("Best bid: {:?}", book.best_bid());
///
///     let query = TradesQuery::builder().sort(Sort::Descending).limit(50).build();
///     let trades = client.trades("eth_mxn", query).await?;
///     println!("{} trades", trades.len());
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BitsoRestClient {
    executor: RequestExecutor,
}

impl BitsoRestClient {
    /// Client against the production API with default settings
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Client with custom configuration over the default reqwest transport
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let base = config.base()?;
        let transport = ReqwestTransport::new(&config)?;

        info!(base = %base, "Created Bitso REST client");

        Ok(Self::with_transport(base, Arc::new(transport)))
    }

    /// Client over a caller-provided transport (signing wrapper, test double)
    pub fn with_transport(base: BaseUrl, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            executor: RequestExecutor::new(base, transport),
        }
    }

    /// Underlying executor, for raw descriptors or three-way outcomes
    pub fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    /// Run any typed operation
    pub async fn call<R: ApiRequest>(&self, request: &R) -> RestResult<R::Payload> {
        self.executor.call(request).await
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// List tradable books with their order limits
    pub async fn available_books(&self) -> RestResult<Vec<BookInfo>> {
        self.call(&AvailableBooks).await
    }

    /// Get trading information for a book
    pub async fn ticker(&self, book: impl Into<Book>) -> RestResult<Ticker> {
        self.call(&GetTicker::new(book)).await
    }

    /// Get open orders in a book
    ///
    /// # Arguments
    /// * `book` - Book (e.g., "btc_mxn")
    /// * `aggregate` - Group orders by price level
    pub async fn order_book(&self, book: impl Into<Book>, aggregate: bool) -> RestResult<OrderBook> {
        let request = GetOrderBook {
            book: book.into(),
            aggregate,
        };
        self.call(&request).await
    }

    /// Get recent trades in a book
    pub async fn trades(&self, book: impl Into<Book>, query: TradesQuery) -> RestResult<Vec<Trade>> {
        self.call(&GetTrades::new(book).with_query(query)).await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account verification status and limits
    pub async fn account_status(&self) -> RestResult<AccountStatus> {
        self.call(&GetAccountStatus).await
    }

    /// Register a mobile number for verification
    pub async fn register_phone_number(
        &self,
        phone_number: impl Into<String>,
    ) -> RestResult<PhoneNumberStatus> {
        self.call(&RegisterPhoneNumber::new(phone_number)).await
    }

    /// Confirm a registered mobile number
    pub async fn verify_phone_number(
        &self,
        verification_code: impl Into<String>,
    ) -> RestResult<PhoneNumberStatus> {
        self.call(&VerifyPhoneNumber::new(verification_code)).await
    }

    /// Get account balances
    pub async fn balance(&self) -> RestResult<Balances> {
        self.call(&GetBalance).await
    }

    /// Get trading and withdrawal fees
    pub async fn fees(&self) -> RestResult<Fees> {
        self.call(&GetFees).await
    }

    /// Get the account's own trades
    pub async fn user_trades(
        &self,
        book: Option<Book>,
        query: TradesQuery,
    ) -> RestResult<Vec<UserTrade>> {
        let request = GetUserTrades { book, query };
        self.call(&request).await
    }

    /// Get open orders, optionally for a single book
    pub async fn open_orders(&self, book: Option<Book>) -> RestResult<Vec<OpenOrder>> {
        self.call(&GetOpenOrders { book }).await
    }

    // ========================================================================
    // Private Trading Endpoints
    // ========================================================================

    /// Place a new order
    pub async fn place_order(&self, order: &PlaceOrder) -> RestResult<PlacedOrder> {
        self.call(order).await
    }

    // ========================================================================
    // Private Funding Endpoints
    // ========================================================================

    /// Get the deposit destination for a currency
    pub async fn funding_destination(
        &self,
        fund_currency: impl Into<String>,
    ) -> RestResult<FundingDestination> {
        self.call(&GetFundingDestination::new(fund_currency)).await
    }

    /// Withdraw bitcoin to an address
    pub async fn bitcoin_withdrawal(
        &self,
        amount: Decimal,
        address: impl Into<String>,
    ) -> RestResult<Withdrawal> {
        self.call(&CryptoWithdrawal::bitcoin(amount, address)).await
    }

    /// Withdraw ether to an address
    pub async fn ether_withdrawal(
        &self,
        amount: Decimal,
        address: impl Into<String>,
    ) -> RestResult<Withdrawal> {
        self.call(&CryptoWithdrawal::ether(amount, address)).await
    }

    /// Withdraw pesos over SPEI
    pub async fn spei_withdrawal(&self, withdrawal: &SpeiWithdrawal) -> RestResult<Withdrawal> {
        self.call(withdrawal).await
    }

    /// Get Mexican bank codes
    pub async fn bank_codes(&self) -> RestResult<Vec<BankCode>> {
        self.call(&BankCodes).await
    }
}

impl std::fmt::Debug for BitsoRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitsoRestClient")
            .field("base", self.executor.base())
            .finish()
    }
}
