use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// Default page number when the query omits `page`.
pub const DEFAULT_PAGE: i64 = 1;
/// Default page size when the query omits `pageSize`.
pub const DEFAULT_PAGE_SIZE: i64 = 10;
/// Largest page a single request may ask for.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Product as stored by the upstream API.
///
/// `id` is assigned upstream and absent on create requests; `data` is an
/// arbitrary JSON document passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Product {
    /// Upstream-assigned identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Product name; `null` reads as empty so validation reports it
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,
    /// Opaque payload, preserved verbatim
    #[serde(default)]
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
}

impl Product {
    pub fn new(name: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            id: None,
            name: name.into(),
            data,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Body sent upstream on create; the id is never part of it.
#[derive(Debug, Serialize)]
pub(crate) struct CreateProductRequest<'a> {
    pub name: &'a str,
    pub data: &'a serde_json::Value,
}

impl<'a> From<&'a Product> for CreateProductRequest<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            name: &product.name,
            data: &product.data,
        }
    }
}

/// Query parameters for listing products
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Case-insensitive substring to match against product names
    pub name: Option<String>,
    /// 1-based page number
    #[serde(default = "default_page")]
    pub page: i64,
    /// Number of items per page (1 to 100)
    #[serde(default = "default_page_size", alias = "page_size")]
    pub page_size: i64,
}

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            name: None,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
