//! REST implementation of ProductApiClient
//!
//! Talks to an `/objects` style API (`GET /objects`, `POST /objects`,
//! `DELETE /objects/{id}`). The underlying `reqwest::Client` pools connections
//! and is shared by all concurrent requests.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::client::ProductApiClient;
use crate::error::ErrorCode;
use crate::models::{CreateProductRequest, Product};
use crate::result::{EmptyOutcome, Outcome};

const INVALID_RESPONSE: &str = "Invalid response from API.";

/// HTTP client for the upstream products store
#[derive(Clone)]
pub struct RestfulApiClient {
    client: Client,
    base_url: String,
}

impl RestfulApiClient {
    /// Create a client with its own connection pool and request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a client reusing an existing `reqwest::Client`
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn objects_url(&self) -> String {
        format!("{}/objects", self.base_url)
    }

    fn object_url(&self, id: &str) -> String {
        format!("{}/objects/{}", self.base_url, urlencoding::encode(id))
    }
}

fn transport_failure<T>(err: impl std::fmt::Display) -> Outcome<T> {
    warn!(error = %err, "Upstream request failed");
    Outcome::unexpected(format!("Unexpected error: {}", err))
}

fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}

#[async_trait]
impl ProductApiClient for RestfulApiClient {
    #[instrument(skip(self))]
    async fn get_all(&self) -> Outcome<Vec<Product>> {
        let response = match self.client.get(self.objects_url()).send().await {
            Ok(response) => response,
            Err(err) => return transport_failure(err),
        };

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Upstream rejected product listing");
            return Outcome::failure(
                format!("Failed to retrieve products. Status code: {}", status),
                ErrorCode::ExternalApiError,
            );
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(err) => return transport_failure(err),
        };

        if is_blank(&body) {
            return Outcome::success(Vec::new());
        }

        match serde_json::from_slice::<Option<Vec<Product>>>(&body) {
            Ok(products) => {
                let products = products.unwrap_or_default();
                debug!(count = products.len(), "Fetched products from upstream");
                Outcome::success(products)
            }
            Err(err) => transport_failure(err),
        }
    }

    #[instrument(skip(self, product), fields(product_name = %product.name))]
    async fn create(&self, product: Product) -> Outcome<Product> {
        let request = CreateProductRequest::from(&product);

        let response = match self
            .client
            .post(self.objects_url())
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => return transport_failure(err),
        };

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Upstream rejected product creation");
            return Outcome::failure(
                format!("Failed to create product. Status code: {}", status),
                ErrorCode::ExternalApiError,
            );
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(err) => return transport_failure(err),
        };

        match serde_json::from_slice::<Option<Product>>(&body) {
            Ok(Some(created)) => {
                debug!(id = ?created.id, "Product created upstream");
                Outcome::success(created)
            }
            Ok(None) | Err(_) => {
                warn!(%status, body_len = body.len(), "Upstream returned an unusable body");
                Outcome::unexpected(INVALID_RESPONSE)
            }
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> EmptyOutcome {
        let response = match self.client.delete(self.object_url(id)).send().await {
            Ok(response) => response,
            Err(err) => return transport_failure(err),
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Outcome::failure("Product not found.", ErrorCode::NotFound);
        }

        if !status.is_success() {
            warn!(%status, "Upstream rejected product deletion");
            return Outcome::failure(
                format!("Failed to delete product. Status code: {}", status),
                ErrorCode::ExternalApiError,
            );
        }

        Outcome::success(())
    }
}
