//! Configuration for Products API

use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig, upstream::UpstreamConfig};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let upstream = UpstreamConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            upstream,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_config_from_env() {
        temp_env::with_vars(
            [
                ("APP_ENV", Some("production")),
                ("PORT", Some("5000")),
                ("PRODUCTS_API_URL", Some("http://upstream.local")),
                ("PRODUCTS_API_TIMEOUT_SECS", Some("3")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.environment.is_production());
                assert_eq!(config.server.port, 5000);
                assert_eq!(config.upstream.base_url, "http://upstream.local");
                assert_eq!(config.upstream.timeout, Duration::from_secs(3));
                assert_eq!(config.app.name, "products_api");
            },
        );
    }

    #[test]
    fn test_config_rejects_bad_port() {
        temp_env::with_var("PORT", Some("not-a-port"), || {
            assert!(Config::from_env().is_err());
        });
    }
}
