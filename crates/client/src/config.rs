//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `THRIFTWEAR_API_URL` - Base URL of the API (e.g. `https://api.thriftwear.shop`)
//!
//! ## Optional
//! - `THRIFTWEAR_API_TOKEN` - Bearer token attached to every request
//! - `THRIFTWEAR_API_TIMEOUT_SECS` - Whole-request timeout (default: 30)

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Default whole-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    /// An environment variable is set but unparsable.
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Process-wide client configuration.
///
/// Set once at startup and shared by every call; updated at runtime only
/// through the explicit [`crate::ApiClient`] update operations.
///
/// Implements `Debug` manually to redact the token.
#[derive(Clone)]
pub struct ApiConfig {
    /// Base URL every endpoint path is resolved against.
    pub base_url: Url,
    /// Headers attached to every request.
    pub default_headers: HeaderMap,
    /// Bearer token, if the caller is signed in.
    pub token: Option<SecretString>,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url.as_str())
            .field("default_headers", &self.default_headers)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ApiConfig {
    /// Create a configuration with the given base URL and defaults for
    /// everything else.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            default_headers: HeaderMap::new(),
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `THRIFTWEAR_API_URL` is missing or
    /// unparsable, or if the timeout is not an integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = get_required_env("THRIFTWEAR_API_URL")?
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("THRIFTWEAR_API_URL".to_string(), e.to_string())
            })?;
        let token = get_optional_env("THRIFTWEAR_API_TOKEN").map(SecretString::from);
        let timeout_secs = match get_optional_env("THRIFTWEAR_API_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("THRIFTWEAR_API_TIMEOUT_SECS".to_string(), e.to_string())
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            default_headers: HeaderMap::new(),
            token,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Attach a bearer token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(SecretString::from(token.into()));
        self
    }

    /// Attach a header to every request.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.default_headers.insert(name, value);
        self
    }

    /// Override the whole-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        "https://api.thriftwear.test".parse().unwrap()
    }

    #[test]
    fn test_new_defaults() {
        let config = ApiConfig::new(base_url());
        assert!(config.token.is_none());
        assert!(config.default_headers.is_empty());
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_setters() {
        let config = ApiConfig::new(base_url())
            .with_token("tok_12345")
            .with_header(
                HeaderName::from_static("x-request-source"),
                HeaderValue::from_static("checkout"),
            )
            .with_timeout(Duration::from_secs(5));

        assert!(config.token.is_some());
        assert_eq!(
            config.default_headers.get("x-request-source").unwrap(),
            "checkout"
        );
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ApiConfig::new(base_url()).with_token("super_secret_token");
        let debug_output = format!("{config:?}");

        assert!(debug_output.contains("api.thriftwear.test"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_token"));
    }
}
