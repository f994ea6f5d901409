//! Lenient deserializers for Bitso's string-or-number fields
//!
//! Bitso encodes amounts as JSON strings ("12.5"), but a few endpoints and
//! older payloads send bare numbers. Both must decode without going through
//! f64 so that precision is preserved.

use rust_decimal::Decimal;
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

impl StringOrNumber {
    fn into_decimal<E: Error>(self) -> Result<Decimal, E> {
        let s = match self {
            Self::String(s) => s,
            Self::Number(n) => n.to_string(),
        };
        Decimal::from_str(&s)
            .or_else(|_| Decimal::from_scientific(&s))
            .map_err(E::custom)
    }
}

pub(crate) fn decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer)?.into_decimal()
}

pub(crate) fn optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrNumber>::deserialize(deserializer)? {
        Some(StringOrNumber::String(s)) if s.is_empty() => Ok(None),
        Some(value) => value.into_decimal().map(Some),
        None => Ok(None),
    }
}

/// Error codes arrive as "0201" but some services emit the bare number 201.
/// Non-negative integers are left-padded back to four digits; any other
/// number is not a code.
pub(crate) fn code<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => Ok(s),
        StringOrNumber::Number(n) => n
            .as_u64()
            .map(|code| format!("{:04}", code))
            .ok_or_else(|| D::Error::custom(format!("invalid error code: {}", n))),
    }
}

/// Trade ids are numeric on public trades and strings on some account feeds.
pub(crate) fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => Ok(s),
        StringOrNumber::Number(n) => Ok(n.to_string()),
    }
}
