//! Liveness of the service and its store

use axum::{extract::State, http::StatusCode, response::Response};
use std::sync::Arc;
use storefront_common::ApiResponse;
use tracing::warn;

use super::CatalogState;
use crate::models::HealthStatus;

/// Handler for `GET /health`
///
/// Answers 503 when the database does not respond to a trivial query.
#[axum::debug_handler]
pub async fn health(State(state): State<Arc<CatalogState>>) -> Response {
    let database = state.db_client.is_healthy().await;
    let status = if database {
        StatusCode::OK
    } else {
        warn!("Health check failed: database unreachable");
        StatusCode::SERVICE_UNAVAILABLE
    };

    let mut envelope = ApiResponse::ok(status, HealthStatus { database });
    envelope.is_success = database;
    envelope.respond(status)
}
