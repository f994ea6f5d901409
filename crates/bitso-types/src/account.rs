//! Private account payloads

use crate::book::Book;
use crate::enums::{OrderType, Side};
use crate::market::parse_timestamp;
use crate::serde_util;
use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Account verification state and trading limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountStatus {
    /// Client id
    pub client_id: String,
    /// Given name on file
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name on file
    #[serde(default)]
    pub last_name: Option<String>,
    /// Account status ("active", ...)
    pub status: String,
    /// Daily deposit limit in MXN
    #[serde(default, deserialize_with = "serde_util::optional_decimal")]
    pub daily_limit: Option<Decimal>,
    /// Monthly deposit limit in MXN
    #[serde(default, deserialize_with = "serde_util::optional_decimal")]
    pub monthly_limit: Option<Decimal>,
    /// Remaining daily deposit allowance
    #[serde(default, deserialize_with = "serde_util::optional_decimal")]
    pub daily_remaining: Option<Decimal>,
    /// Remaining monthly deposit allowance
    #[serde(default, deserialize_with = "serde_util::optional_decimal")]
    pub monthly_remaining: Option<Decimal>,
    /// Cellphone verification state
    #[serde(default)]
    pub cellphone_number: Option<String>,
    /// Official id verification state
    #[serde(default)]
    pub official_id: Option<String>,
    /// Proof of residency verification state
    #[serde(default)]
    pub proof_of_residency: Option<String>,
    /// Signed contract state
    #[serde(default)]
    pub signed_contract: Option<String>,
    /// Origin of funds state
    #[serde(default)]
    pub origin_of_funds: Option<String>,
}

/// Per-currency balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    /// Currency code, e.g. "mxn"
    pub currency: String,
    /// Total balance
    #[serde(deserialize_with = "serde_util::decimal")]
    pub total: Decimal,
    /// Balance locked in open orders
    #[serde(deserialize_with = "serde_util::decimal")]
    pub locked: Decimal,
    /// Balance available for trading
    #[serde(deserialize_with = "serde_util::decimal")]
    pub available: Decimal,
}

/// Balance endpoint payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balances {
    /// One entry per currency
    pub balances: Vec<Balance>,
}

impl Balances {
    /// Get balance for a specific currency
    pub fn get(&self, currency: &str) -> Option<&Balance> {
        self.balances
            .iter()
            .find(|b| b.currency.eq_ignore_ascii_case(currency))
    }

    /// Get all currencies with a non-zero total
    pub fn non_zero(&self) -> impl Iterator<Item = &Balance> {
        self.balances.iter().filter(|b| !b.total.is_zero())
    }
}

/// Trading fee for one book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookFee {
    /// Book identifier
    pub book: Book,
    /// Fee as a fraction (0.0065)
    #[serde(deserialize_with = "serde_util::decimal")]
    pub fee_decimal: Decimal,
    /// Fee as a percentage (0.65)
    #[serde(deserialize_with = "serde_util::decimal")]
    pub fee_percent: Decimal,
}

/// Fees endpoint payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fees {
    /// Trading fees per book
    pub fees: Vec<BookFee>,
    /// Flat withdrawal fee per currency
    #[serde(default)]
    pub withdrawal_fees: HashMap<String, Decimal>,
}

impl Fees {
    /// Trading fee for a book
    pub fn for_book(&self, book: &str) -> Option<&BookFee> {
        self.fees.iter().find(|f| f.book.as_str() == book)
    }
}

/// One of the user's own fills
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTrade {
    /// Book identifier
    pub book: Book,
    /// Major amount (signed: negative when sold)
    #[serde(deserialize_with = "serde_util::decimal")]
    pub major: Decimal,
    /// Minor amount (signed: negative when spent)
    #[serde(deserialize_with = "serde_util::decimal")]
    pub minor: Decimal,
    /// Execution price
    #[serde(deserialize_with = "serde_util::decimal")]
    pub price: Decimal,
    /// Fee charged
    #[serde(deserialize_with = "serde_util::decimal")]
    pub fees_amount: Decimal,
    /// Currency the fee was charged in
    pub fees_currency: String,
    /// Side of the user's order
    pub side: Side,
    /// Trade id; also the pagination marker
    #[serde(deserialize_with = "serde_util::id_string")]
    pub tid: String,
    /// Order id
    pub oid: String,
    /// Execution timestamp
    pub created_at: String,
}

impl UserTrade {
    /// Parsed `created_at`
    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.created_at)
    }
}

/// One resting order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenOrder {
    /// Book identifier
    pub book: Book,
    /// Amount when placed (major)
    #[serde(deserialize_with = "serde_util::decimal")]
    pub original_amount: Decimal,
    /// Amount still unfilled (major)
    #[serde(deserialize_with = "serde_util::decimal")]
    pub unfilled_amount: Decimal,
    /// Value when placed (minor)
    #[serde(deserialize_with = "serde_util::decimal")]
    pub original_value: Decimal,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
    /// Limit price
    #[serde(deserialize_with = "serde_util::decimal")]
    pub price: Decimal,
    /// Order id
    pub oid: String,
    /// Order side
    pub side: Side,
    /// Order status ("open", "partial-fill", ...)
    pub status: String,
    /// Order type
    #[serde(rename = "type")]
    pub order_type: OrderType,
}

impl OpenOrder {
    /// Amount already filled
    pub fn filled_amount(&self) -> Decimal {
        self.original_amount - self.unfilled_amount
    }
}

/// Order placement acknowledgement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedOrder {
    /// Id of the new order
    pub oid: String,
}

/// Deposit destination for one currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingDestination {
    /// What the identifier is ("Bitcoin address", "CLABE", ...)
    pub account_identifier_name: String,
    /// The identifier itself
    pub account_identifier: String,
}

/// Withdrawal acknowledgement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Withdrawal {
    /// Withdrawal id
    pub wid: String,
    /// Withdrawal status ("pending", "complete", ...)
    pub status: String,
    /// Creation timestamp
    pub created_at: String,
    /// Currency withdrawn
    pub currency: String,
    /// Withdrawal method ("Bitcoin", "SPEI Transfer", ...)
    pub method: String,
    /// Amount withdrawn
    #[serde(deserialize_with = "serde_util::decimal")]
    pub amount: Decimal,
    /// Method-specific details
    #[serde(default)]
    pub details: serde_json::Value,
}

/// Mexican bank code, for SPEI withdrawals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankCode {
    /// Bank code
    pub code: String,
    /// Bank name
    pub name: String,
}

/// Phone number registration / verification payload
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PhoneNumberStatus {
    /// Registered phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Verification state, when reported
    #[serde(default)]
    pub verified: Option<bool>,
}
