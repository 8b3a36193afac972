use super::shutdown::shutdown_signal;
use crate::http::{cors::create_cors_layer, security::security_headers};
use axum::{Router, handler::Handler, middleware};
use core_config::server::ServerConfig;
use std::io;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Starts the Axum server with graceful shutdown.
///
/// # Errors
/// Returns an error if:
/// - The TCP listener fails to bind to the configured address
/// - The server encounters an error during operation
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Creates a configured Axum router with common middleware and documentation.
///
/// This function sets up:
/// - Swagger UI at `/swagger-ui`, document at `/api-docs/openapi.json`
/// - API routes nested under `/api`
/// - `fallback` for every unmatched path
/// - Common middleware (tracing, security headers, compression)
/// - CORS, only when `server_config.cors_origins` is non-empty
///
/// Health endpoints should be merged by the app using `health_router()`.
///
/// # Type Parameters
/// * `T` - A type implementing `utoipa::OpenApi` for API documentation
///
/// # Errors
/// Returns `InvalidInput` if a configured CORS origin is not a valid header value.
///
/// # Example
/// ```ignore
/// let api_routes = Router::new().nest("/products", handlers::router(service));
/// let router = create_router::<ApiDoc, _, _>(api_routes, handlers::not_found, &config)?;
/// ```
pub fn create_router<T, H, X>(
    apis: Router,
    fallback: H,
    server_config: &ServerConfig,
) -> io::Result<Router>
where
    T: OpenApi + 'static,
    H: Handler<X, ()>,
    X: 'static,
{
    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .nest("/api", apis)
        .fallback(fallback)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        // gzip, br, deflate, zstd according to Accept-Encoding
        .layer(CompressionLayer::new());

    if server_config.cors_origins.is_empty() {
        info!("CORS disabled: CORS_ALLOWED_ORIGIN not set");
        return Ok(router);
    }

    let cors_layer = create_cors_layer(&server_config.cors_origins)?;
    info!(
        "CORS configured with allowed origins: {}",
        server_config.cors_origins.join(",")
    );

    Ok(router.layer(cors_layer))
}
