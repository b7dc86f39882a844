//! Database integration for Storefront
//!
//! This crate owns everything that touches the catalog store: a pooled
//! [`DbClient`] built on SQLx's `Any` driver, the schema bootstrap, the
//! generic [`Repository`] contract and the category and product repositories.
//!
//! # Example
//!
//! ```rust,no_run
//! use storefront_config::DatabaseConfig;
//! use storefront_db::{init_schema, DbClient, SqlCategoryRepository};
//!
//! async fn setup() -> Result<SqlCategoryRepository, storefront_db::error::DbError> {
//!     let db_client = DbClient::from_config(&DatabaseConfig::default()).await?;
//!     init_schema(&db_client).await?;
//!     Ok(SqlCategoryRepository::new(db_client))
//! }
//! ```

pub mod client;
pub mod error;
pub mod repositories;
pub mod repository;
pub mod schema;

pub use client::DbClient;
pub use repository::{FilterValue, PageRequest, QueryFilter, Repository};
pub use schema::init_schema;

pub use repositories::{
    Category, CategoryFilter, CategoryRepository, Product, ProductFilter, ProductRepository,
    SqlCategoryRepository, SqlProductRepository,
};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::{init_schema, DbClient};
    use storefront_config::DatabaseConfig;

    /// A fresh in-memory database with the catalog schema.
    pub(crate) async fn memory_client() -> DbClient {
        let client = DbClient::from_config(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: Some(1),
        })
        .await
        .expect("in-memory database");
        init_schema(&client).await.expect("schema");
        client
    }
}
