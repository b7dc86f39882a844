// --- File: crates/storefront_common/src/lib.rs ---

pub mod envelope; // Response envelope and pagination metadata
pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities

// Re-export error types and utilities for easier access
pub use error::{not_found, validation_error, Context, HttpStatusCode, StorefrontError};

pub use envelope::{ApiResponse, Pagination, PAGINATION_HEADER};

pub use http::{with_cache_control, IntoHttpResponse};

pub use logging::{init_with_level, log_result, parse_level};
