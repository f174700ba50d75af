//! Runtime configuration for the notice search server.
//!
//! Values are read once at startup. Environment variables are treated as
//! immutable afterwards.

use std::env;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://ai.start-hub.kr/search";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const ENDPOINT_ENV: &str = "NOTICE_SEARCH_ENDPOINT";
pub const TIMEOUT_ENV: &str = "NOTICE_SEARCH_TIMEOUT_MS";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl ConfigError {
    fn invalid(key: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            message: message.into(),
        }
    }
}

/// Where and how long to search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub endpoint: String,
    /// Upper bound for the whole remote exchange, send and body read.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

impl SearchConfig {
    /// Create from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(endpoint) = lookup(ENDPOINT_ENV) {
            let endpoint = endpoint.trim();
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(ConfigError::invalid(
                    ENDPOINT_ENV,
                    "must be an http(s) URL",
                ));
            }
            config.endpoint = endpoint.to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let ms: u64 = raw
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid(TIMEOUT_ENV, format!("{e}")))?;
            if ms == 0 {
                return Err(ConfigError::invalid(TIMEOUT_ENV, "must be greater than 0"));
            }
            config.timeout = Duration::from_millis(ms);
        }

        Ok(config)
    }

    /// Set the search endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
