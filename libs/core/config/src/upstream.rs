//! Settings for the third-party products store this service fronts.

use crate::{ConfigError, FromEnv, env_or_default, env_parse_or};
use std::time::Duration;

pub const DEFAULT_PRODUCTS_API_URL: &str = "https://api.restful-api.dev";

/// Upstream REST API configuration
#[derive(Clone, Debug)]
pub struct UpstreamConfig {
    /// Base URL; `/objects` is appended by the client
    pub base_url: String,
    /// Per-request timeout enforced by the HTTP client
    pub timeout: Duration,
}

impl UpstreamConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }
}

impl FromEnv for UpstreamConfig {
    /// - PRODUCTS_API_URL: defaults to https://api.restful-api.dev
    /// - PRODUCTS_API_TIMEOUT_SECS: defaults to 30
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = env_or_default("PRODUCTS_API_URL", DEFAULT_PRODUCTS_API_URL);
        if base_url.trim().is_empty() {
            return Err(ConfigError::ParseError {
                key: "PRODUCTS_API_URL".to_string(),
                details: "must not be empty".to_string(),
            });
        }

        let timeout_secs = env_parse_or("PRODUCTS_API_TIMEOUT_SECS", 30u64)?;

        Ok(Self::new(base_url.trim(), Duration::from_secs(timeout_secs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_config_defaults() {
        temp_env::with_vars(
            [
                ("PRODUCTS_API_URL", None::<&str>),
                ("PRODUCTS_API_TIMEOUT_SECS", None),
            ],
            || {
                let config = UpstreamConfig::from_env().unwrap();
                assert_eq!(config.base_url, DEFAULT_PRODUCTS_API_URL);
                assert_eq!(config.timeout, Duration::from_secs(30));
            },
        );
    }

    #[test]
    fn test_upstream_config_custom_values() {
        temp_env::with_vars(
            [
                ("PRODUCTS_API_URL", Some("http://localhost:9000")),
                ("PRODUCTS_API_TIMEOUT_SECS", Some("5")),
            ],
            || {
                let config = UpstreamConfig::from_env().unwrap();
                assert_eq!(config.base_url, "http://localhost:9000");
                assert_eq!(config.timeout, Duration::from_secs(5));
            },
        );
    }

    #[test]
    fn test_upstream_config_rejects_blank_url() {
        temp_env::with_var("PRODUCTS_API_URL", Some("  "), || {
            let err = UpstreamConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("PRODUCTS_API_URL"));
        });
    }

    #[test]
    fn test_upstream_config_invalid_timeout() {
        temp_env::with_vars(
            [
                ("PRODUCTS_API_URL", None::<&str>),
                ("PRODUCTS_API_TIMEOUT_SECS", Some("soon")),
            ],
            || {
                let err = UpstreamConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("PRODUCTS_API_TIMEOUT_SECS"));
            },
        );
    }
}
