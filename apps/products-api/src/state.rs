//! Application state management

use domain_products::{ProductService, RestfulApiClient};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub products: ProductService<RestfulApiClient>,
}

impl AppState {
    /// Build the upstream client from config and wire the service over it
    pub fn new(config: Config) -> eyre::Result<Self> {
        let client = RestfulApiClient::new(&config.upstream.base_url, config.upstream.timeout)?;

        Ok(Self {
            config,
            products: ProductService::new(client),
        })
    }
}
