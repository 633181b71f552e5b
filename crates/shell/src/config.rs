//! Shell configuration loaded from environment variables.

use std::time::Duration;

use thiserror::Error;

pub const CATALOG_URL_ENV: &str = "STOREFRONT_CATALOG_URL";
pub const FETCH_TIMEOUT_ENV: &str = "STOREFRONT_FETCH_TIMEOUT_SECS";

pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Endpoint returning the product list as a JSON array.
    pub catalog_url: String,
    pub fetch_timeout: Duration,
}

impl ShellConfig {
    pub fn new(catalog_url: impl Into<String>) -> Self {
        Self {
            catalog_url: catalog_url.into(),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let catalog_url = lookup(CATALOG_URL_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());

        let fetch_timeout = match lookup(FETCH_TIMEOUT_ENV) {
            None => Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
                    key: FETCH_TIMEOUT_ENV,
                    value: raw.clone(),
                    reason: e.to_string(),
                })?;
                if secs == 0 {
                    return Err(ConfigError::Invalid {
                        key: FETCH_TIMEOUT_ENV,
                        value: raw,
                        reason: "timeout must be at least one second".to_string(),
                    });
                }
                Duration::from_secs(secs)
            }
        };

        Ok(Self {
            catalog_url,
            fetch_timeout,
        })
    }
}
