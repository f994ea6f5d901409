//! Endpoint descriptors and request resolution
//!
//! An [`Endpoint`] says *what* to call: method, a path relative to the API
//! base, ordered query parameters and, for POST operations, a JSON body. It
//! does no I/O. [`Endpoint::resolve`] joins it onto a [`BaseUrl`] to
//! produce the [`ResolvedRequest`] handed to the transport.

use crate::config::BaseUrl;
use crate::error::EndpointError;
use crate::params::{ParamValue, QueryParams};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;

/// HTTP method, fixed per operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Reads (market data, account queries)
    Get,
    /// Writes (order placement, withdrawals, phone registration)
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declarative description of one API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    method: Method,
    path: String,
    query: QueryParams,
    body: Option<Map<String, Value>>,
}

impl Endpoint {
    /// Create a descriptor for an arbitrary relative path.
    ///
    /// Fails on an empty path, a path starting with `/` or a scheme, a path
    /// with `.`/`..` segments, or a path carrying its own query string.
    pub fn new(method: Method, path: impl Into<String>) -> Result<Self, EndpointError> {
        let path = path.into();
        if path.is_empty() {
            return Err(EndpointError::EmptyPath);
        }
        if path.starts_with('/') || path.contains("://") {
            return Err(EndpointError::AbsolutePath(path));
        }
        if path.contains(['?', '#']) {
            return Err(EndpointError::QueryInPath(path));
        }
        if path.split('/').any(|segment| segment == "." || segment == "..") {
            return Err(EndpointError::DotSegment(path));
        }
        Ok(Self::unchecked(method, path))
    }

    /// GET descriptor
    pub fn get(path: impl Into<String>) -> Result<Self, EndpointError> {
        Self::new(Method::Get, path)
    }

    /// POST descriptor
    pub fn post(path: impl Into<String>) -> Result<Self, EndpointError> {
        Self::new(Method::Post, path)
    }

    /// Catalog paths are compile-time constants known to be well formed.
    pub(crate) fn fixed(method: Method, path: &'static str) -> Self {
        debug_assert!(!path.is_empty() && !path.starts_with('/'));
        Self::unchecked(method, path.to_string())
    }

    fn unchecked(method: Method, path: String) -> Self {
        Self {
            method,
            path,
            query: QueryParams::new(),
            body: None,
        }
    }

    /// Add a query parameter
    pub fn param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.query.set(name, value);
        self
    }

    /// Add a query parameter when a value is present
    pub fn param_opt<V: Into<ParamValue>>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(name, value),
            None => self,
        }
    }

    /// Add a JSON body field
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.body
            .get_or_insert_with(Map::new)
            .insert(name.into(), value.into());
        self
    }

    /// Add a JSON body field when a value is present
    pub fn field_opt<V: Into<Value>>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.field(name, value),
            None => self,
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    pub fn body(&self) -> Option<&Map<String, Value>> {
        self.body.as_ref()
    }

    /// Join onto `base`. Deterministic: the same descriptor and base always
    /// give byte-identical URLs.
    pub fn resolve(&self, base: &BaseUrl) -> ResolvedRequest {
        let mut url = base.join(&self.path);
        if !self.query.is_empty() {
            url.push('?');
            url.push_str(&self.query.to_query_string());
        }

        let body = match self.method {
            Method::Get => None,
            Method::Post => Some(Value::Object(self.body.clone().unwrap_or_default())),
        };

        ResolvedRequest {
            method: self.method,
            url,
            body,
        }
    }
}

/// Absolute request ready for dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL including query string
    pub url: String,
    /// JSON body; always `None` for GET
    pub body: Option<Value>,
}

impl ResolvedRequest {
    /// Query string portion of the URL, without the `?`
    pub fn query_string(&self) -> Option<&str> {
        self.url.split_once('?').map(|(_, query)| query)
    }
}

/// A typed operation: knows its descriptor and the payload type it returns.
pub trait ApiRequest {
    /// Payload carried inside the success envelope
    type Payload: DeserializeOwned;

    /// Build the descriptor for this call
    fn endpoint(&self) -> Endpoint;
}
