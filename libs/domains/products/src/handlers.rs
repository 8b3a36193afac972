//! HTTP handlers for Products API
//!
//! Every response, success or failure, is an [`Envelope`]. The status code is
//! derived from the outcome's [`ErrorCode`] in [`status_for`].

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use serde::Serialize;
use std::any::Any;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::client::ProductApiClient;
use crate::error::ErrorCode;
use crate::models::{Product, ProductQuery};
use crate::result::{EmptyOutcome, Envelope, Outcome};
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, create_product, delete_product),
    components(schemas(Product, ProductPageEnvelope, ProductEnvelope, EmptyEnvelope)),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<C: ProductApiClient + 'static>(service: ProductService<C>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/",
            get(list_products)
                .post(create_product)
                .fallback(method_not_allowed),
        )
        .route("/{id}", delete(delete_product).fallback(method_not_allowed))
        .with_state(shared_service)
}

/// Map a failure kind to its transport status.
///
/// Unauthorized, Forbidden and Conflict are reserved in the taxonomy but not
/// produced by this service, so they fall back to 500 like Unexpected.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::None => StatusCode::OK,
        ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ExternalApiError => StatusCode::FAILED_DEPENDENCY,
        ErrorCode::Unexpected
        | ErrorCode::Unauthorized
        | ErrorCode::Forbidden
        | ErrorCode::Conflict => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl<T: Serialize> IntoResponse for Outcome<T> {
    fn into_response(self) -> Response {
        let status = status_for(self.error_code());

        if let Outcome::Failure { message, code } = &self {
            if status.is_server_error() || *code == ErrorCode::ExternalApiError {
                tracing::error!(error_code = code.code(), %status, "{}", message);
            } else {
                tracing::warn!(error_code = code.code(), %status, "{}", message);
            }
        }

        (status, Json(Envelope::from(self))).into_response()
    }
}

/// Fallback for routes that do not exist
pub async fn not_found() -> EmptyOutcome {
    Outcome::failure("The requested resource was not found", ErrorCode::NotFound)
}

/// Fallback for a known path called with a method it does not serve.
///
/// Reported as a `ValidationError`, since the status mapping has no 405.
pub async fn method_not_allowed(method: Method) -> EmptyOutcome {
    Outcome::failure(
        format!("Method {} is not allowed on this resource", method),
        ErrorCode::ValidationError,
    )
}

/// Response for `tower_http::catch_panic::CatchPanicLayer`.
///
/// Any panic below the layer becomes an `Unexpected` envelope with status 500.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "Unhandled fault while serving request");

    EmptyOutcome::unexpected("Unexpected error").into_response()
}

/// List products with optional name filter and pagination
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ProductQuery),
    responses(
        (status = 200, description = "One page of products", body = ProductPageEnvelope),
        (status = 400, description = "Invalid paging parameters", body = EmptyEnvelope),
        (status = 424, description = "Upstream API failed", body = EmptyEnvelope),
        (status = 500, description = "Unexpected error", body = EmptyEnvelope)
    )
)]
async fn list_products<C: ProductApiClient>(
    State(service): State<Arc<ProductService<C>>>,
    query: Result<Query<ProductQuery>, QueryRejection>,
) -> Outcome<Vec<Product>> {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            return Outcome::failure(rejection.body_text(), ErrorCode::ValidationError);
        }
    };

    service
        .get(query.name.as_deref(), query.page, query.page_size)
        .await
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = Product,
    responses(
        (status = 200, description = "Product created", body = ProductEnvelope),
        (status = 400, description = "Validation failed", body = EmptyEnvelope),
        (status = 424, description = "Upstream API failed", body = EmptyEnvelope),
        (status = 500, description = "Unexpected error", body = EmptyEnvelope)
    )
)]
async fn create_product<C: ProductApiClient>(
    State(service): State<Arc<ProductService<C>>>,
    payload: Result<Json<Product>, JsonRejection>,
) -> Outcome<Product> {
    let Json(product) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return Outcome::failure(rejection.body_text(), ErrorCode::ValidationError);
        }
    };

    service.create(product).await
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Upstream product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = EmptyEnvelope),
        (status = 400, description = "Blank or undecodable product ID", body = EmptyEnvelope),
        (status = 404, description = "Product not found", body = EmptyEnvelope),
        (status = 424, description = "Upstream API failed", body = EmptyEnvelope),
        (status = 500, description = "Unexpected error", body = EmptyEnvelope)
    )
)]
async fn delete_product<C: ProductApiClient>(
    State(service): State<Arc<ProductService<C>>>,
    id: Result<Path<String>, PathRejection>,
) -> EmptyOutcome {
    let Path(id) = match id {
        Ok(id) => id,
        Err(rejection) => {
            return Outcome::failure(rejection.body_text(), ErrorCode::ValidationError);
        }
    };

    service.delete(&id).await
}

// Schema-only mirrors of `Envelope<T>` for the generated docs.

/// Envelope carrying one page of products
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct ProductPageEnvelope {
    is_success: bool,
    error: Option<String>,
    value: Option<Vec<Product>>,
    /// 0 None, 1 ValidationError, 2 NotFound, 3 ExternalApiError,
    /// 4 Unauthorized, 5 Forbidden, 6 Conflict, 999 Unexpected
    error_code: i32,
    /// Number of products matching the filter
    total_records: Option<u64>,
}

/// Envelope carrying a single product
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct ProductEnvelope {
    is_success: bool,
    error: Option<String>,
    value: Option<Product>,
    error_code: i32,
    total_records: Option<u64>,
}

/// Envelope without a value, used by delete and by every failure
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct EmptyEnvelope {
    is_success: bool,
    error: Option<String>,
    #[schema(value_type = Option<Object>)]
    value: Option<()>,
    error_code: i32,
    total_records: Option<u64>,
}
