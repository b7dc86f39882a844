// --- File: crates/storefront_common/src/http.rs ---
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::envelope::ApiResponse;
use crate::error::{HttpStatusCode, StorefrontError};

/// Extension trait for StorefrontError to convert it to an Axum HTTP response.
pub trait IntoHttpResponse {
    /// Converts the error into an Axum HTTP response.
    fn into_http_response(self) -> Response;
}

impl IntoHttpResponse for StorefrontError {
    fn into_http_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status_code.is_server_error() {
            error!("Request failed: {}", self);
        }

        ApiResponse::<()>::failure(status_code, self.to_string()).respond(status_code)
    }
}

/// Implement IntoResponse for StorefrontError to make it easier to use in Axum handlers.
impl IntoResponse for StorefrontError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}

/// Adds an advisory `Cache-Control: public, max-age=<seconds>` header.
///
/// This is a hint for clients and intermediaries only; the service itself
/// keeps no response cache.
pub fn with_cache_control(mut response: Response, max_age_secs: u32) -> Response {
    if let Ok(value) = HeaderValue::from_str(&format!("public, max-age={}", max_age_secs)) {
        response.headers_mut().insert(header::CACHE_CONTROL, value);
    }
    response
}
