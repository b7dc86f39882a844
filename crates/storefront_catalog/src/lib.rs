//! Category and product catalog endpoints for Storefront
//!
//! This crate exposes the catalog over HTTP: DTOs and their validation,
//! entity/DTO mapping, the axum handlers and the router that wires them.
//!
//! # Features
//!
//! - Paginated listing with an `X-Pagination` header
//! - Case-insensitive name uniqueness for categories and products
//! - Products always resolve their category by name
//! - OpenAPI/Swagger documentation (with the `openapi` feature)
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::Router;
//! use storefront_catalog::{routes, API_BASE};
//! use storefront_db::{init_schema, DbClient};
//!
//! async fn setup_app() -> Result<Router, storefront_db::error::DbError> {
//!     let db_client = DbClient::from_url("sqlite://storefront.db").await?;
//!     init_schema(&db_client).await?;
//!     Ok(Router::new().nest(API_BASE, routes(db_client)))
//! }
//! ```

#[cfg(feature = "openapi")]
pub mod doc;
pub mod handlers;
pub mod mapping;
pub mod models;
pub mod routes;

pub use handlers::CatalogState;
pub use routes::{routes, API_BASE};

#[cfg(feature = "openapi")]
pub mod openapi {
    pub use crate::doc::CatalogApiDoc;
}
