//! API routes module

pub mod products;

use axum::Router;
use axum_helpers::server::{create_router, health_router};
use domain_products::handlers;
use tower_http::catch_panic::CatchPanicLayer;

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

/// Full HTTP application: API under `/api`, docs, `/health`, envelope
/// fallback for unknown paths, and a panic guard around all of it.
pub fn app(state: &AppState) -> std::io::Result<Router> {
    let router = create_router::<ApiDoc, _, _>(
        routes(state),
        handlers::not_found,
        &state.config.server,
    )?;

    Ok(router
        .merge(health_router(state.config.app))
        .layer(CatchPanicLayer::custom(handlers::handle_panic)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use core_config::{app_info, server::ServerConfig, upstream::UpstreamConfig};
    use http_body_util::BodyExt;
    use httpmock::prelude::*;
    use serde_json::{Value, json};
    use std::time::Duration;
    use tower::ServiceExt;

    fn state_for(server: &MockServer) -> AppState {
        let config = Config {
            app: app_info!(),
            server: ServerConfig::default(),
            upstream: UpstreamConfig::new(server.base_url(), Duration::from_secs(5)),
            environment: Environment::Development,
        };
        AppState::new(config).unwrap()
    }

    async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_products_are_served_under_api_prefix() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/objects");
            then.status(200)
                .json_body(json!([{"id": "1", "name": "Widget", "data": null}]));
        });

        let (status, body) = send(app(&state_for(&server)).unwrap(), "GET", "/api/products").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalRecords"], json!(1));
        assert_eq!(body["value"][0]["name"], json!("Widget"));
    }

    #[tokio::test]
    async fn test_delete_maps_upstream_404() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(DELETE).path("/objects/42");
            then.status(404);
        });

        let (status, body) =
            send(app(&state_for(&server)).unwrap(), "DELETE", "/api/products/42").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["errorCode"], json!(2));
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let server = MockServer::start();

        let (status, body) = send(app(&state_for(&server)).unwrap(), "GET", "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], json!("healthy"));
        assert_eq!(body["name"], json!("products_api"));
    }

    #[tokio::test]
    async fn test_unknown_path_returns_not_found_envelope() {
        let server = MockServer::start();

        let (status, body) = send(app(&state_for(&server)).unwrap(), "GET", "/nowhere").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["isSuccess"], json!(false));
        assert_eq!(body["errorCode"], json!(2));
    }

    #[tokio::test]
    async fn test_unsupported_method_returns_envelope() {
        let server = MockServer::start();

        let (status, body) = send(app(&state_for(&server)).unwrap(), "PUT", "/api/products").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["isSuccess"], json!(false));
        assert_eq!(body["errorCode"], json!(1));
    }

    async fn explode() -> &'static str {
        panic!("handler exploded")
    }

    #[tokio::test]
    async fn test_panic_becomes_unexpected_envelope() {
        let app = Router::new()
            .route("/boom", get(explode))
            .layer(CatchPanicLayer::custom(handlers::handle_panic));

        let (status, body) = send(app, "GET", "/boom").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({
                "isSuccess": false,
                "error": "Unexpected error",
                "value": null,
                "errorCode": 999,
                "totalRecords": null
            })
        );
    }
}
