//! Products Domain
//!
//! Product CRUD gateway in front of an `/objects` style REST API. Nothing is
//! stored locally: every call goes upstream, and every answer, including every
//! failure, comes back as an [`Outcome`] that the HTTP layer renders as an
//! [`Envelope`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, ErrorCode → status mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, name filter, pagination
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Client    │  ← Upstream access (trait + reqwest implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product, query parameters, Outcome/ErrorCode
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use domain_products::{handlers, RestfulApiClient, ProductService};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = RestfulApiClient::new("https://api.restful-api.dev", Duration::from_secs(30))?;
//! let service = ProductService::new(client);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod handlers;
pub mod models;
pub mod restful;
pub mod result;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use client::ProductApiClient;
pub use error::{ErrorCode, UnknownErrorCode};
pub use handlers::ApiDoc;
pub use models::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, Product, ProductQuery};
pub use restful::RestfulApiClient;
pub use result::{EmptyOutcome, Envelope, Outcome};
pub use service::ProductService;
pub use validation::{ProductValidator, RuleValidator};
