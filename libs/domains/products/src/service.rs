//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::{debug, instrument};

use crate::client::ProductApiClient;
use crate::error::ErrorCode;
use crate::models::{MAX_PAGE_SIZE, Product};
use crate::result::{EmptyOutcome, Outcome};
use crate::validation::{ProductValidator, RuleValidator};

/// Product service providing business logic operations
///
/// Validates input, filters and paginates listings, and otherwise forwards
/// the client's outcomes untouched. Failures from the client are never
/// reclassified here.
pub struct ProductService<C: ProductApiClient> {
    client: Arc<C>,
    validator: Arc<dyn ProductValidator>,
}

impl<C: ProductApiClient> ProductService<C> {
    /// Create a new ProductService using the default validation rules
    pub fn new(client: C) -> Self {
        Self::with_validator(client, RuleValidator)
    }

    /// Create a new ProductService with a custom validator
    pub fn with_validator(client: C, validator: impl ProductValidator + 'static) -> Self {
        Self {
            client: Arc::new(client),
            validator: Arc::new(validator),
        }
    }

    /// List one page of products, optionally filtered by name
    ///
    /// The filter is a case-insensitive substring match and is skipped when
    /// `name` is `None` or empty. The reported total is the size of the
    /// filtered set. No sorting happens here, so pages are only stable while
    /// the upstream keeps a stable order.
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        name: Option<&str>,
        page: i64,
        page_size: i64,
    ) -> Outcome<Vec<Product>> {
        if page < 1 {
            return Outcome::failure(
                "Page must be greater than or equal to 1",
                ErrorCode::ValidationError,
            );
        }
        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Outcome::failure(
                format!("Page size must be between 1 and {}", MAX_PAGE_SIZE),
                ErrorCode::ValidationError,
            );
        }

        let products = match self.client.get_all().await {
            Outcome::Success { value, .. } => value,
            failure => return failure,
        };

        let needle = name
            .filter(|name| !name.is_empty())
            .map(str::to_lowercase);

        let filtered: Vec<Product> = match needle {
            Some(needle) => products
                .into_iter()
                .filter(|product| product.name.to_lowercase().contains(&needle))
                .collect(),
            None => products,
        };
        let total = filtered.len();

        // Both bounds were checked above, so the casts cannot wrap.
        let page_size = page_size as usize;
        let skip = (page as usize - 1).saturating_mul(page_size);

        let items: Vec<Product> = filtered.into_iter().skip(skip).take(page_size).collect();

        debug!(total, returned = items.len(), "Paginated products");
        Outcome::paginated(items, total)
    }

    /// Validate and create a new product
    #[instrument(skip(self, product), fields(product_name = %product.name))]
    pub async fn create(&self, product: Product) -> Outcome<Product> {
        let messages = self.validator.validate(&product);
        if !messages.is_empty() {
            debug!(?messages, "Product failed validation");
            return Outcome::failure(messages.join(", "), ErrorCode::ValidationError);
        }

        self.client.create(product).await
    }

    /// Delete a product by its upstream id
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> EmptyOutcome {
        if id.trim().is_empty() {
            return Outcome::failure("Product ID is required", ErrorCode::ValidationError);
        }

        self.client.delete(id).await
    }
}

impl<C: ProductApiClient> Clone for ProductService<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            validator: Arc::clone(&self.validator),
        }
    }
}
