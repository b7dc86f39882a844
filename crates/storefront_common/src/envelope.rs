//! The uniform response envelope returned by every catalog endpoint, and the
//! pagination metadata carried in the `X-Pagination` header of list endpoints.

use axum::{
    http::{header::HeaderValue, HeaderName, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Name of the response header carrying [`Pagination`] on list endpoints.
pub const PAGINATION_HEADER: HeaderName = HeaderName::from_static("x-pagination");

/// Response envelope: `{statusCode, isSuccess, errorMessages, result}`.
///
/// `status_code` mirrors the outcome the handler decided on and is not always
/// the transport status: delete and update report 204 in the envelope while
/// answering 200, and not-found during those flows is reported as 404 inside a
/// 400 response. A value of 0 means the handler never set it.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub is_success: bool,
    pub error_messages: Vec<String>,
    pub result: Option<T>,
}

impl<T> Default for ApiResponse<T> {
    fn default() -> Self {
        Self {
            status_code: 0,
            is_success: true,
            error_messages: Vec::new(),
            result: None,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Successful envelope carrying `result`.
    pub fn ok(status: StatusCode, result: T) -> Self {
        Self {
            status_code: status.as_u16(),
            result: Some(result),
            ..Self::default()
        }
    }

    /// Failed envelope with a single error message (or none, if `message` is empty).
    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            status_code: status.as_u16(),
            is_success: false,
            error_messages: if message.is_empty() {
                Vec::new()
            } else {
                vec![message]
            },
            result: None,
        }
    }

    /// Marks the envelope as failed and replaces the error list with `message`,
    /// leaving `status_code` untouched.
    pub fn fail_with(mut self, message: impl Into<String>) -> Self {
        self.is_success = false;
        self.error_messages = vec![message.into()];
        self
    }

    /// Pairs the envelope with the transport status it is sent with.
    pub fn respond(self, transport: StatusCode) -> Response
    where
        T: Serialize,
    {
        (transport, Json(self)).into_response()
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let transport =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::OK);
        self.respond(transport)
    }
}

/// Paging parameters echoed back to the client, serialized with PascalCase
/// keys: `{"PageNumber":1,"PageSize":0}`.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Pagination {
    pub page_number: i64,
    pub page_size: i64,
}

impl Pagination {
    /// Encodes the pagination as an `X-Pagination` header value.
    pub fn header_value(&self) -> Result<HeaderValue, serde_json::Error> {
        let json = serde_json::to_string(self)?;
        // serde_json only emits visible ASCII for this struct
        Ok(HeaderValue::from_str(&json).unwrap_or_else(|_| HeaderValue::from_static("{}")))
    }
}
