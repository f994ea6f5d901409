//! Private account endpoints
//!
//! These endpoints require an authenticated transport. Descriptors are
//! built here; signing is left to whatever [`HttpTransport`] the caller
//! installs.
//!
//! [`HttpTransport`]: crate::transport::HttpTransport

use crate::endpoint::{ApiRequest, Endpoint, Method};
use crate::endpoints::market::TradesQuery;
use bitso_types::{
    AccountStatus, BankCode, Balances, Book, Fees, FundingDestination, OpenOrder, OrderType,
    PhoneNumberStatus, PlacedOrder, Side, UserTrade, Withdrawal,
};
use rust_decimal::Decimal;
use typed_builder::TypedBuilder;

pub const ACCOUNT_STATUS: &str = "account_status/";
pub const PHONE_NUMBER: &str = "phone_number/";
pub const PHONE_VERIFICATION: &str = "phone_verification/";
pub const BALANCE: &str = "balance/";
pub const FEES: &str = "fees/";
pub const USER_TRADES: &str = "user_trades/";
pub const OPEN_ORDERS: &str = "open_orders";
pub const ORDERS: &str = "orders/";
pub const FUNDING_DESTINATION: &str = "funding_destination/";
pub const BITCOIN_WITHDRAWAL: &str = "bitcoin_withdrawal/";
pub const ETHER_WITHDRAWAL: &str = "ether_withdrawal/";
pub const SPEI_WITHDRAWAL: &str = "spei_withdrawal/";
pub const BANK_CODES: &str = "mx_bank_codes/";

/// Verification state and limits of the account
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetAccountStatus;

impl ApiRequest for GetAccountStatus {
    type Payload = AccountStatus;

    fn endpoint(&self) -> Endpoint {
        Endpoint::fixed(Method::Get, ACCOUNT_STATUS)
    }
}

/// Register a mobile number for verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterPhoneNumber {
    pub phone_number: String,
}

impl RegisterPhoneNumber {
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
        }
    }
}

impl ApiRequest for RegisterPhoneNumber {
    type Payload = PhoneNumberStatus;

    fn endpoint(&self) -> Endpoint {
        Endpoint::fixed(Method::Post, PHONE_NUMBER).field("phone_number", self.phone_number.as_str())
    }
}

/// Confirm a registered number with the code received by SMS
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyPhoneNumber {
    pub verification_code: String,
}

impl VerifyPhoneNumber {
    pub fn new(verification_code: impl Into<String>) -> Self {
        Self {
            verification_code: verification_code.into(),
        }
    }
}

impl ApiRequest for VerifyPhoneNumber {
    type Payload = PhoneNumberStatus;

    fn endpoint(&self) -> Endpoint {
        Endpoint::fixed(Method::Post, PHONE_VERIFICATION)
            .field("verification_code", self.verification_code.as_str())
    }
}

/// Per-currency balances
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetBalance;

impl ApiRequest for GetBalance {
    type Payload = Balances;

    fn endpoint(&self) -> Endpoint {
        Endpoint::fixed(Method::Get, BALANCE)
    }
}

/// Trading and withdrawal fees
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetFees;

impl ApiRequest for GetFees {
    type Payload = Fees;

    fn endpoint(&self) -> Endpoint {
        Endpoint::fixed(Method::Get, FEES)
    }
}

/// The account's own fills, optionally restricted to one book
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetUserTrades {
    pub book: Option<Book>,
    pub query: TradesQuery,
}

impl GetUserTrades {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_book(mut self, book: impl Into<Book>) -> Self {
        self.book = Some(book.into());
        self
    }

    pub fn with_query(mut self, query: TradesQuery) -> Self {
        self.query = query;
        self
    }
}

impl ApiRequest for GetUserTrades {
    type Payload = Vec<UserTrade>;

    fn endpoint(&self) -> Endpoint {
        self.query.apply(
            Endpoint::fixed(Method::Get, USER_TRADES).param_opt("book", self.book.as_ref()),
        )
    }
}

/// Resting orders, optionally restricted to one book
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetOpenOrders {
    pub book: Option<Book>,
}

impl GetOpenOrders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_book(mut self, book: impl Into<Book>) -> Self {
        self.book = Some(book.into());
        self
    }
}

impl ApiRequest for GetOpenOrders {
    type Payload = Vec<OpenOrder>;

    fn endpoint(&self) -> Endpoint {
        Endpoint::fixed(Method::Get, OPEN_ORDERS).param_opt("book", self.book.as_ref())
    }
}

/// Size of an order, in exactly one of the book's two currencies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAmount {
    /// Amount of the traded currency (btc in btc_mxn)
    Major(Decimal),
    /// Amount of the quote currency (mxn in btc_mxn)
    Minor(Decimal),
}

/// Place a market or limit order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceOrder {
    pub book: Book,
    pub side: Side,
    pub order_type: OrderType,
    pub amount: OrderAmount,
    /// Required for limit orders, absent for market orders
    pub price: Option<Decimal>,
}

impl PlaceOrder {
    /// Limit order for `major` units at `price`
    pub fn limit(book: impl Into<Book>, side: Side, major: Decimal, price: Decimal) -> Self {
        Self {
            book: book.into(),
            side,
            order_type: OrderType::Limit,
            amount: OrderAmount::Major(major),
            price: Some(price),
        }
    }

    /// Market order sized in either currency
    pub fn market(book: impl Into<Book>, side: Side, amount: OrderAmount) -> Self {
        Self {
            book: book.into(),
            side,
            order_type: OrderType::Market,
            amount,
            price: None,
        }
    }
}

impl ApiRequest for PlaceOrder {
    type Payload = PlacedOrder;

    fn endpoint(&self) -> Endpoint {
        let endpoint = Endpoint::fixed(Method::Post, ORDERS)
            .field("book", self.book.as_str())
            .field("side", self.side.as_str())
            .field("type", self.order_type.as_str());

        let endpoint = match self.amount {
            OrderAmount::Major(major) => endpoint.field("major", major.to_string()),
            OrderAmount::Minor(minor) => endpoint.field("minor", minor.to_string()),
        };

        endpoint.field_opt("price", self.price.map(|p| p.to_string()))
    }
}

/// Where to send deposits of one currency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetFundingDestination {
    /// Currency code, e.g. "btc" or "mxn"
    pub fund_currency: String,
}

impl GetFundingDestination {
    pub fn new(fund_currency: impl Into<String>) -> Self {
        Self {
            fund_currency: fund_currency.into(),
        }
    }
}

impl ApiRequest for GetFundingDestination {
    type Payload = FundingDestination;

    fn endpoint(&self) -> Endpoint {
        Endpoint::fixed(Method::Get, FUNDING_DESTINATION)
            .param("fund_currency", self.fund_currency.as_str())
    }
}

/// Chain a crypto withdrawal is sent on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CryptoNetwork {
    Bitcoin,
    Ether,
}

impl CryptoNetwork {
    fn path(&self) -> &'static str {
        match self {
            Self::Bitcoin => BITCOIN_WITHDRAWAL,
            Self::Ether => ETHER_WITHDRAWAL,
        }
    }
}

/// Withdraw bitcoin or ether to an external address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CryptoWithdrawal {
    pub network: CryptoNetwork,
    pub amount: Decimal,
    pub address: String,
}

impl CryptoWithdrawal {
    pub fn bitcoin(amount: Decimal, address: impl Into<String>) -> Self {
        Self {
            network: CryptoNetwork::Bitcoin,
            amount,
            address: address.into(),
        }
    }

    pub fn ether(amount: Decimal, address: impl Into<String>) -> Self {
        Self {
            network: CryptoNetwork::Ether,
            amount,
            address: address.into(),
        }
    }
}

impl ApiRequest for CryptoWithdrawal {
    type Payload = Withdrawal;

    fn endpoint(&self) -> Endpoint {
        Endpoint::fixed(Method::Post, self.network.path())
            .field("amount", self.amount.to_string())
            .field("address", self.address.as_str())
    }
}

/// Withdraw pesos to a Mexican bank account over SPEI
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct SpeiWithdrawal {
    /// Amount in MXN
    pub amount: Decimal,
    #[builder(setter(into))]
    pub recipient_given_names: String,
    #[builder(setter(into))]
    pub recipient_family_names: String,
    /// 18-digit CLABE of the destination account
    #[builder(setter(into))]
    pub clabe: String,
    /// Free-text reference shown to the recipient
    #[builder(default, setter(strip_option, into))]
    pub notes_ref: Option<String>,
    /// Numeric reference shown to the recipient
    #[builder(default, setter(strip_option, into))]
    pub numeric_ref: Option<String>,
}

impl ApiRequest for SpeiWithdrawal {
    type Payload = Withdrawal;

    fn endpoint(&self) -> Endpoint {
        Endpoint::fixed(Method::Post, SPEI_WITHDRAWAL)
            .field("amount", self.amount.to_string())
            .field("recipient_given_names", self.recipient_given_names.as_str())
            .field("recipient_family_names", self.recipient_family_names.as_str())
            .field("clabe", self.clabe.as_str())
            .field_opt("notes_ref", self.notes_ref.as_deref())
            .field_opt("numeric_ref", self.numeric_ref.as_deref())
    }
}

/// Mexican bank codes accepted by SPEI withdrawals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BankCodes;

impl ApiRequest for BankCodes {
    type Payload = Vec<BankCode>;

    fn endpoint(&self) -> Endpoint {
        Endpoint::fixed(Method::Get, BANK_CODES)
    }
}
