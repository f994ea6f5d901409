//! Typed endpoint catalog
//!
//! One [`ApiRequest`](crate::endpoint::ApiRequest) type per operation. Each
//! knows its method, path and parameter encoding, and the payload type its
//! success envelope carries.

pub mod account;
pub mod market;

pub use account::{
    BankCodes, CryptoNetwork, CryptoWithdrawal, GetAccountStatus, GetBalance, GetFees,
    GetFundingDestination, GetOpenOrders, GetUserTrades, OrderAmount, PlaceOrder,
    RegisterPhoneNumber, SpeiWithdrawal, VerifyPhoneNumber,
};
pub use market::{AvailableBooks, GetOrderBook, GetTicker, GetTrades, TradesQuery};
