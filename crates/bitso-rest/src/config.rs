//! Client configuration and the resolved API base

use crate::error::ConfigError;
use std::fmt;
use url::{ParseError, Url};

/// Production API base
pub const DEFAULT_BASE_URL: &str = "https://api.bitso.com/v3/";

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Scheme + host + version prefix that every endpoint path is joined onto.
///
/// Always ends with exactly one `/`. Immutable once parsed; executors hold
/// their own copy, so pointing a test executor at a mock host never affects
/// any other client.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Validate and normalize a base URL
    ///
    /// The scheme and host are lowercased and the result ends with exactly
    /// one `/`.
    pub fn parse(url: &str) -> Result<Self, ConfigError> {
        let parsed = Url::parse(url).map_err(|err| match err {
            ParseError::EmptyHost => ConfigError::MissingHost(url.to_string()),
            other => ConfigError::InvalidUrl(format!("{}: {}", url, other)),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(url.to_string()));
        }
        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(ConfigError::MissingHost(url.to_string()));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ConfigError::UnexpectedQuery(url.to_string()));
        }

        Ok(Self(format!("{}/", parsed.as_str().trim_end_matches('/'))))
    }

    /// The production base, `https://api.bitso.com/v3/`
    pub fn production() -> Self {
        Self(DEFAULT_BASE_URL.to_string())
    }

    /// Get the base as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Append a relative endpoint path
    pub fn join(&self, path: &str) -> String {
        let mut url = String::with_capacity(self.0.len() + path.len());
        url.push_str(&self.0);
        url.push_str(path);
        url
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self::production()
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base (scheme + host + version prefix)
    pub base_url: String,
    /// Request timeout in seconds, enforced by the transport
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at another host (sandbox, mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// User agent sent by the default transport
    pub fn user_agent(&self) -> &str {
        self.user_agent
            .as_deref()
            .unwrap_or(concat!("bitso-rest/", env!("CARGO_PKG_VERSION")))
    }

    /// Validate `base_url`
    pub fn base(&self) -> Result<BaseUrl, ConfigError> {
        BaseUrl::parse(&self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalizes_trailing_slash() {
        let base = BaseUrl::parse("https://api.bitso.com/v3").unwrap();
        assert_eq!(base.as_str(), "https://api.bitso.com/v3/");

        let base = BaseUrl::parse("https://api.bitso.com/v3//").unwrap();
        assert_eq!(base.as_str(), "https://api.bitso.com/v3/");
    }

    #[test]
    fn test_base_url_rejects_bad_input() {
        assert!(matches!(
            BaseUrl::parse("ftp://api.bitso.com/v3/"),
            Err(ConfigError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            BaseUrl::parse("https://"),
            Err(ConfigError::MissingHost(_))
        ));
        assert!(matches!(
            BaseUrl::parse("https://api bitso.com/v3"),
            Err(ConfigError::InvalidUrl(_))
        ));
        assert!(matches!(
            BaseUrl::parse("api.bitso.com/v3"),
            Err(ConfigError::InvalidUrl(_))
        ));
        assert!(matches!(
            BaseUrl::parse("https://api.bitso.com/v3/?x=1"),
            Err(ConfigError::UnexpectedQuery(_))
        ));
    }

    #[test]
    fn test_base_url_scheme_is_case_insensitive() {
        let base = BaseUrl::parse("HTTPS://API.bitso.com/v3/").unwrap();
        assert_eq!(base.as_str(), "https://api.bitso.com/v3/");

        let base = BaseUrl::parse("https://api.bitso.com").unwrap();
        assert_eq!(base.as_str(), "https://api.bitso.com/");
    }

    #[test]
    fn test_production_base() {
        assert_eq!(BaseUrl::default().as_str(), DEFAULT_BASE_URL);
        assert_eq!(
            BaseUrl::production().join("ticker/"),
            "https://api.bitso.com/v3/ticker/"
        );
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_base_url("http://127.0.0.1:8080/v3")
            .with_timeout(60)
            .with_user_agent("test-agent");

        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.user_agent(), "test-agent");
        assert_eq!(config.base().unwrap().as_str(), "http://127.0.0.1:8080/v3/");
    }

    #[test]
    fn test_default_user_agent() {
        let config = ClientConfig::default();
        assert!(config.user_agent().starts_with("bitso-rest/"));
    }
}
