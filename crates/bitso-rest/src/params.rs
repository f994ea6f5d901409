//! Query parameter values and their wire encoding

use crate::error::EndpointError;
use bitso_types::{Book, Sort};
use std::borrow::Cow;

/// A typed query parameter value.
///
/// Each kind owns its wire spelling: flags are `true`/`false`, sort is
/// `asc`/`desc`, counts are base-10.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Free text (markers, currency codes)
    Text(String),
    /// Trading pair
    Book(Book),
    /// Boolean flag
    Flag(bool),
    /// Sort direction
    Sort(Sort),
    /// Non-negative count (limits)
    Count(u32),
}

impl ParamValue {
    /// Wire representation, before percent-encoding
    pub fn to_wire(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) => Cow::Borrowed(s),
            Self::Book(book) => Cow::Borrowed(book.as_str()),
            Self::Flag(true) => Cow::Borrowed("true"),
            Self::Flag(false) => Cow::Borrowed("false"),
            Self::Sort(sort) => Cow::Borrowed(sort.as_str()),
            Self::Count(n) => Cow::Owned(n.to_string()),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Book> for ParamValue {
    fn from(book: Book) -> Self {
        Self::Book(book)
    }
}

impl From<&Book> for ParamValue {
    fn from(book: &Book) -> Self {
        Self::Book(book.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<Sort> for ParamValue {
    fn from(sort: Sort) -> Self {
        Self::Sort(sort)
    }
}

impl From<u32> for ParamValue {
    fn from(n: u32) -> Self {
        Self::Count(n)
    }
}

/// Ordered query parameters.
///
/// Insertion order is preserved on the wire. Setting a name twice keeps the
/// first position and the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, ParamValue)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value for `name`
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// `name=value` pairs joined by `&`, percent-encoded, without the leading `?`
    pub fn to_query_string(&self) -> String {
        self.0
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(name),
                    urlencoding::encode(&value.to_wire())
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Split a query string (with or without a leading `?`) into decoded pairs
pub fn parse_query(query: &str) -> Result<Vec<(String, String)>, EndpointError> {
    let query = query.strip_prefix('?').unwrap_or(query);
    if query.is_empty() {
        return Ok(Vec::new());
    }

    query
        .split('&')
        .map(|pair| -> Result<(String, String), EndpointError> {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            let decode = |s: &str| {
                urlencoding::decode(s)
                    .map(Cow::into_owned)
                    .map_err(|e| EndpointError::MalformedQuery(e.to_string()))
            };
            Ok((decode(name)?, decode(value)?))
        })
        .collect()
}

/// Look up a decoded parameter by name
pub(crate) fn find<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .rev()
        .find(|(n, _)| n == name)
        .map(|(_, v)| v.as_str())
}

pub(crate) fn invalid(name: &str, value: &str) -> EndpointError {
    EndpointError::InvalidParameter {
        name: name.to_string(),
        value: value.to_string(),
    }
}

pub(crate) fn parse_flag(name: &str, value: &str) -> Result<bool, EndpointError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(invalid(name, other)),
    }
}
