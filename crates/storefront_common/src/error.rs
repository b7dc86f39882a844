// --- File: crates/storefront_common/src/error.rs ---
use std::fmt;
use storefront_db::error::DbError;
use thiserror::Error;

/// The base error type for all Storefront errors.
///
/// Crate-specific errors are folded into this enum through `From` impls so
/// handlers can use `?` and let [`IntoResponse`](axum::response::IntoResponse)
/// render the envelope.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Request input (path or query) that could not be parsed
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during database operation
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for StorefrontError {
    fn status_code(&self) -> u16 {
        match self {
            StorefrontError::ConfigError(_) => 500,
            StorefrontError::ValidationError(_) => 400,
            StorefrontError::DatabaseError(_) => 500,
            StorefrontError::NotFoundError(_) => 404,
            StorefrontError::InternalError(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, StorefrontError>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, StorefrontError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| StorefrontError::InternalError(format!("{}: {}", context, error)))
    }
}

impl From<DbError> for StorefrontError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ConfigError(msg) | DbError::UrlError(msg) => StorefrontError::ConfigError(msg),
            DbError::RowNotFound(msg) => StorefrontError::NotFoundError(msg),
            other => StorefrontError::DatabaseError(other.to_string()),
        }
    }
}

pub fn validation_error<T: fmt::Display>(message: T) -> StorefrontError {
    StorefrontError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> StorefrontError {
    StorefrontError::NotFoundError(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(validation_error("bad").status_code(), 400);
        assert_eq!(not_found("gone").status_code(), 404);
        assert_eq!(
            StorefrontError::InternalError("boom".to_string()).status_code(),
            500
        );
        assert_eq!(
            validation_error("Invalid URL").to_string(),
            "Validation error: Invalid URL"
        );
    }

    #[test]
    fn db_errors_become_database_or_config_errors() {
        let err: StorefrontError = DbError::QueryError("no such table".to_string()).into();
        assert!(matches!(err, StorefrontError::DatabaseError(_)));
        assert_eq!(err.status_code(), 500);

        let err: StorefrontError = DbError::UrlError("empty".to_string()).into();
        assert!(matches!(err, StorefrontError::ConfigError(ref m) if m == "empty"));
    }

    #[test]
    fn context_prefixes_the_source_error() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        let err = result.context("writing snapshot").unwrap_err();
        assert_eq!(err.to_string(), "Internal error: writing snapshot: disk full");
    }
}
