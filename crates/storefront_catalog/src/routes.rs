use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use storefront_db::DbClient;
use tracing::info;

use crate::handlers::{
    create_category, create_product, delete_category, delete_product, get_all_categories,
    get_all_products, get_all_products_by_category, get_category, get_product, health,
    update_category, update_product, CatalogState,
};

/// Prefix the catalog router is mounted under; `Location` headers include it.
pub const API_BASE: &str = "/api";

/// Create the catalog routes
///
/// Builds the shared [`CatalogState`] around `db_client` and wires the
/// category, product and health endpoints. The returned router expects to be
/// nested under [`API_BASE`].
///
/// # Arguments
///
/// * `db_client` - A connected database client with the schema in place
pub fn routes(db_client: DbClient) -> Router {
    let state = Arc::new(CatalogState::new(db_client));

    info!("Catalog routes initialized");

    Router::new()
        .route("/Category/GetAllCategories", get(get_all_categories))
        .route("/Category/GetCategory/{id}", get(get_category))
        .route("/Category/CreateCategory", post(create_category))
        .route("/Category/UpdateCategory/{id}", put(update_category))
        .route("/Category/DeleteCategory/{id}", delete(delete_category))
        .route(
            "/Product/GetAllProductsByCategory",
            get(get_all_products_by_category),
        )
        .route("/Product/GetAllProducts", get(get_all_products))
        .route("/Product/GetProduct/{id}", get(get_product))
        .route("/Product/CreateProduct", post(create_product))
        .route("/Product/UpdateProduct/{id}", put(update_product))
        .route("/Product/DeleteProduct/{id}", delete(delete_product))
        .route("/health", get(health))
        .with_state(state)
}
