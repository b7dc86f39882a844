//! HTTP handlers for the catalog
//!
//! Category and product handlers share [`CatalogState`] and the helpers in
//! this module for reading bodies and shaping envelopes.

pub mod category;
pub mod health;
pub mod product;

use axum::{
    body::Bytes,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{de::DeserializeOwned, Serialize};
use storefront_common::{
    validation_error, with_cache_control, ApiResponse, Pagination, StorefrontError,
    PAGINATION_HEADER,
};
use storefront_db::{error::DbError, DbClient, SqlCategoryRepository, SqlProductRepository};
use tracing::{error, warn};
use validator::Validate;

use crate::models::PageQuery;

pub use category::{
    create_category, delete_category, get_all_categories, get_category, update_category,
};
pub use health::health;
pub use product::{
    create_product, delete_product, get_all_products, get_all_products_by_category, get_product,
    update_product,
};

/// Error text for a body that is malformed or fails validation.
pub(crate) const INVALID_PAYLOAD: &str = "Error";

/// Shared state for catalog handlers
#[derive(Debug, Clone)]
pub struct CatalogState {
    pub categories: SqlCategoryRepository,
    pub products: SqlProductRepository,
    /// Kept for health checks
    pub db_client: DbClient,
}

impl CatalogState {
    pub fn new(db_client: DbClient) -> Self {
        Self {
            categories: SqlCategoryRepository::new(db_client.clone()),
            products: SqlProductRepository::new(db_client.clone()),
            db_client,
        }
    }
}

/// A request body after deserialization.
#[derive(Debug)]
pub(crate) enum Payload<T> {
    Present(T),
    /// Empty body or JSON `null`
    Absent,
    /// Not JSON, or JSON of the wrong shape
    Malformed,
}

pub(crate) fn parse_payload<T: DeserializeOwned>(body: &Bytes) -> Payload<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Payload::Absent;
    }
    match serde_json::from_slice::<Option<T>>(body) {
        Ok(Some(value)) => Payload::Present(value),
        Ok(None) => Payload::Absent,
        Err(e) => {
            warn!("Rejected request body: {}", e);
            Payload::Malformed
        }
    }
}

/// Turns an extractor rejection (unparsable path id or query value) into a
/// 400 envelope instead of axum's plain-text body.
pub(crate) fn reject_input(rejection: impl std::fmt::Display) -> StorefrontError {
    warn!("Rejected request input: {}", rejection);
    validation_error(rejection)
}

pub(crate) fn is_valid<T: Validate>(payload: &T) -> bool {
    match payload.validate() {
        Ok(()) => true,
        Err(e) => {
            warn!("Request body failed validation: {}", e);
            false
        }
    }
}

/// A 400 response whose envelope reports `envelope_status`.
pub(crate) fn bad_request(envelope_status: StatusCode, message: &str) -> Response {
    ApiResponse::<()>::failure(envelope_status, message).respond(StatusCode::BAD_REQUEST)
}

/// Envelope-only failure, sent with the status it reports.
pub(crate) fn empty_failure(status: StatusCode) -> Response {
    ApiResponse::<()>::failure(status, "").into_response()
}

/// Successful write with nothing to return: 204 in the envelope, 200 on the wire.
pub(crate) fn no_content() -> Response {
    ApiResponse::<()> {
        status_code: StatusCode::NO_CONTENT.as_u16(),
        ..ApiResponse::new()
    }
    .respond(StatusCode::OK)
}

/// 201 with a `Location` header pointing at the new resource.
pub(crate) fn created<T: Serialize>(location: &str, result: T) -> Response {
    let mut response = ApiResponse::ok(StatusCode::CREATED, result).into_response();
    match HeaderValue::from_str(location) {
        Ok(value) => {
            response.headers_mut().insert(header::LOCATION, value);
        }
        Err(e) => warn!("Skipping Location header {}: {}", location, e),
    }
    response
}

/// Renders a page of results.
///
/// Failures are reported inside a 200 envelope with `isSuccess=false` and no
/// pagination header.
pub(crate) fn list_response<T: Serialize>(
    items: Result<Vec<T>, DbError>,
    page: PageQuery,
    max_age_secs: u32,
) -> Response {
    match items {
        Ok(items) => {
            let mut response = ApiResponse::ok(StatusCode::OK, items).into_response();
            let pagination = Pagination {
                page_number: page.page_number,
                page_size: page.page_size,
            };
            match pagination.header_value() {
                Ok(value) => {
                    response.headers_mut().insert(PAGINATION_HEADER, value);
                }
                Err(e) => warn!("Failed to encode pagination header: {}", e),
            }
            with_cache_control(response, max_age_secs)
        }
        Err(e) => {
            error!("Failed to list catalog entries: {}", e);
            ApiResponse::<Vec<T>>::new()
                .fail_with(e.to_string())
                .respond(StatusCode::OK)
        }
    }
}
