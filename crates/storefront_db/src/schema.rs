//! Schema bootstrap
//!
//! Creates the catalog tables if they are missing. There is no versioned
//! migration runner; every statement here must stay idempotent.
//!
//! `NameKey` holds [`name_key`](crate::repository::name_key) of `Name` and
//! carries the case-insensitive uniqueness constraint.

use crate::error::DbError;
use crate::DbClient;
use tracing::{debug, info};

const CREATE_CATEGORIES: &str = r#"
    CREATE TABLE IF NOT EXISTS Categories (
        Id INTEGER PRIMARY KEY AUTOINCREMENT,
        Name TEXT NOT NULL,
        NameKey TEXT NOT NULL UNIQUE
    )
"#;

const CREATE_PRODUCTS: &str = r#"
    CREATE TABLE IF NOT EXISTS Products (
        Id INTEGER PRIMARY KEY AUTOINCREMENT,
        Name TEXT NOT NULL,
        NameKey TEXT NOT NULL UNIQUE,
        CategoryId INTEGER NOT NULL REFERENCES Categories(Id) ON DELETE RESTRICT
    )
"#;

const CREATE_PRODUCTS_CATEGORY_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS IX_Products_CategoryId ON Products (CategoryId)";

/// Initialize the catalog schema
///
/// # Errors
///
/// Returns an error if any of the DDL statements fail.
pub async fn init_schema(db_client: &DbClient) -> Result<(), DbError> {
    debug!("Initializing catalog schema");

    for statement in [
        CREATE_CATEGORIES,
        CREATE_PRODUCTS,
        CREATE_PRODUCTS_CATEGORY_INDEX,
    ] {
        db_client.execute(statement).await?;
    }

    info!("Catalog schema initialized successfully");
    Ok(())
}
