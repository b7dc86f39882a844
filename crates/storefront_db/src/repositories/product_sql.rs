//! SQL implementation of the product repository

use crate::error::DbError;
use crate::repositories::category::Category;
use crate::repositories::product::{Product, ProductFilter, ProductRepository};
use crate::repository::{
    bind_values, name_key, where_clause, PageRequest, QueryFilter, Repository,
};
use crate::DbClient;
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, error, info};

/// SQL implementation of the product repository
#[derive(Debug, Clone)]
pub struct SqlProductRepository {
    db_client: DbClient,
}

impl SqlProductRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

fn product_from_row(row: &AnyRow, include_related: bool) -> Result<Product, DbError> {
    let category_id: i64 = row.try_get("category_id")?;
    let category_name: String = row.try_get("category_name")?;

    let category = include_related.then(|| Category {
        id: category_id,
        name: category_name.clone(),
        products: Vec::new(),
    });

    Ok(Product {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        category_id,
        category_name,
        category,
    })
}

/// Products joined with their category, ordered by id.
///
/// Shared with the category repository, which uses it to load a category's
/// products.
pub(crate) async fn fetch_products(
    db_client: &DbClient,
    filter: Option<&ProductFilter>,
    include_related: bool,
    page: PageRequest,
) -> Result<Vec<Product>, DbError> {
    let (where_sql, values) = where_clause(filter);
    let query = format!(
        "SELECT p.Id AS id, p.Name AS name, p.CategoryId AS category_id, c.Name AS category_name \
         FROM Products p JOIN Categories c ON c.Id = p.CategoryId \
         {} ORDER BY p.Id {}",
        where_sql,
        page.sql_suffix()
    );

    let rows = bind_values(sqlx::query(&query), &values)
        .fetch_all(db_client.pool())
        .await
        .map_err(|e| {
            error!("Failed to fetch products: {}", e);
            DbError::QueryError(e.to_string())
        })?;

    rows.iter()
        .map(|row| product_from_row(row, include_related))
        .collect()
}

impl Repository<Product> for SqlProductRepository {
    type Filter = ProductFilter;

    async fn get_all(
        &self,
        filter: Option<&ProductFilter>,
        include_related: bool,
        page: PageRequest,
    ) -> Result<Vec<Product>, DbError> {
        debug!("Fetching products matching {:?} ({:?})", filter, page);
        fetch_products(&self.db_client, filter, include_related, page).await
    }

    async fn does_exist(&self, filter: &ProductFilter) -> Result<bool, DbError> {
        let (condition, value) = filter.to_sql(1);
        let query = format!(
            "SELECT 1 AS found FROM Products p JOIN Categories c ON c.Id = p.CategoryId \
             WHERE {} LIMIT 1",
            condition
        );

        let found = bind_values(sqlx::query(&query), &[value])
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to check product existence: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(found.is_some())
    }

    async fn create(&self, product: Product) -> Result<Product, DbError> {
        debug!("Creating product: {}", product.name);

        let mut tx = self.db_client.begin().await?;
        let row = sqlx::query(
            "INSERT INTO Products (Name, NameKey, CategoryId) VALUES ($1, $2, $3) RETURNING Id AS id",
        )
        .bind(product.name.clone())
        .bind(name_key(&product.name))
        .bind(product.category_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            error!("Failed to insert product: {}", e);
            DbError::QueryError(e.to_string())
        })?;
        let id: i64 = row.try_get("id")?;
        tx.commit()
            .await
            .map_err(|e| DbError::TransactionError(e.to_string()))?;

        info!("Product {} created with id {}", product.name, id);
        Ok(Product { id, ..product })
    }

    async fn delete(&self, product: &Product) -> Result<bool, DbError> {
        debug!("Deleting product {}", product.id);

        let mut tx = self.db_client.begin().await?;
        let result = sqlx::query("DELETE FROM Products WHERE Id = $1")
            .bind(product.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("Failed to delete product {}: {}", product.id, e);
                DbError::QueryError(e.to_string())
            })?;
        tx.commit()
            .await
            .map_err(|e| DbError::TransactionError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

impl ProductRepository for SqlProductRepository {
    async fn update(&self, product: Product) -> Result<Product, DbError> {
        debug!("Updating product {}", product.id);

        let mut tx = self.db_client.begin().await?;
        let result = sqlx::query(
            "UPDATE Products SET Name = $1, NameKey = $2, CategoryId = $3 WHERE Id = $4",
        )
        .bind(product.name.clone())
        .bind(name_key(&product.name))
        .bind(product.category_id)
        .bind(product.id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            error!("Failed to update product {}: {}", product.id, e);
            DbError::QueryError(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            // dropping the transaction rolls it back
            return Err(DbError::RowNotFound(format!("Product {}", product.id)));
        }
        tx.commit()
            .await
            .map_err(|e| DbError::TransactionError(e.to_string()))?;

        info!("Product {} updated", product.id);
        Ok(product)
    }
}
