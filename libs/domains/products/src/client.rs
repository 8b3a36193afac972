use async_trait::async_trait;

use crate::models::Product;
use crate::result::{EmptyOutcome, Outcome};

/// Access to the upstream products store.
///
/// Implementations never return `Err` or panic on upstream trouble: every
/// transport, status and decoding problem is folded into a failed
/// [`Outcome`] before it reaches the service layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductApiClient: Send + Sync {
    /// Fetch every product, in upstream order
    async fn get_all(&self) -> Outcome<Vec<Product>>;

    /// Create a product from its name and payload; the id is assigned upstream
    async fn create(&self, product: Product) -> Outcome<Product>;

    /// Delete a product by its upstream id
    async fn delete(&self, id: &str) -> EmptyOutcome;
}
