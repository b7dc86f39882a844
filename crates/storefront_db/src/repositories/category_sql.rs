//! SQL implementation of the category repository

use crate::error::DbError;
use crate::repositories::category::{Category, CategoryFilter, CategoryRepository};
use crate::repositories::product::ProductFilter;
use crate::repositories::product_sql::fetch_products;
use crate::repository::{
    bind_values, name_key, where_clause, PageRequest, QueryFilter, Repository,
};
use crate::DbClient;
use sqlx::Row;
use tracing::{debug, error, info};

/// SQL implementation of the category repository
#[derive(Debug, Clone)]
pub struct SqlCategoryRepository {
    /// The database client
    db_client: DbClient,
}

impl SqlCategoryRepository {
    /// Create a new SQL category repository
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

impl Repository<Category> for SqlCategoryRepository {
    type Filter = CategoryFilter;

    async fn get_all(
        &self,
        filter: Option<&CategoryFilter>,
        include_related: bool,
        page: PageRequest,
    ) -> Result<Vec<Category>, DbError> {
        debug!("Fetching categories matching {:?} ({:?})", filter, page);

        let (where_sql, values) = where_clause(filter);
        let query = format!(
            "SELECT c.Id AS id, c.Name AS name FROM Categories c {} ORDER BY c.Id {}",
            where_sql,
            page.sql_suffix()
        );

        let rows = bind_values(sqlx::query(&query), &values)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to fetch categories: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        let mut categories = Vec::with_capacity(rows.len());
        for row in rows {
            let mut category = Category::new(row.try_get::<String, _>("name")?);
            category.id = row.try_get("id")?;
            if include_related {
                category.products = fetch_products(
                    &self.db_client,
                    Some(&ProductFilter::CategoryId(category.id)),
                    false,
                    PageRequest::unpaged(),
                )
                .await?;
            }
            categories.push(category);
        }

        Ok(categories)
    }

    async fn does_exist(&self, filter: &CategoryFilter) -> Result<bool, DbError> {
        let (condition, value) = filter.to_sql(1);
        let query = format!("SELECT 1 AS found FROM Categories c WHERE {} LIMIT 1", condition);

        let found = bind_values(sqlx::query(&query), &[value])
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to check category existence: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(found.is_some())
    }

    async fn create(&self, category: Category) -> Result<Category, DbError> {
        debug!("Creating category: {}", category.name);

        let mut tx = self.db_client.begin().await?;
        let row = sqlx::query(
            "INSERT INTO Categories (Name, NameKey) VALUES ($1, $2) RETURNING Id AS id",
        )
        .bind(category.name.clone())
        .bind(name_key(&category.name))
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            error!("Failed to insert category: {}", e);
            DbError::QueryError(e.to_string())
        })?;
        let id: i64 = row.try_get("id")?;
        tx.commit()
            .await
            .map_err(|e| DbError::TransactionError(e.to_string()))?;

        info!("Category {} created with id {}", category.name, id);
        Ok(Category { id, ..category })
    }

    async fn delete(&self, category: &Category) -> Result<bool, DbError> {
        debug!("Deleting category {}", category.id);

        let mut tx = self.db_client.begin().await?;
        let result = sqlx::query("DELETE FROM Categories WHERE Id = $1")
            .bind(category.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("Failed to delete category {}: {}", category.id, e);
                DbError::QueryError(e.to_string())
            })?;
        tx.commit()
            .await
            .map_err(|e| DbError::TransactionError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

impl CategoryRepository for SqlCategoryRepository {
    async fn update(&self, category: Category) -> Result<Category, DbError> {
        debug!("Updating category {}", category.id);

        let mut tx = self.db_client.begin().await?;
        let result = sqlx::query("UPDATE Categories SET Name = $1, NameKey = $2 WHERE Id = $3")
            .bind(category.name.clone())
            .bind(name_key(&category.name))
            .bind(category.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("Failed to update category {}: {}", category.id, e);
                DbError::QueryError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(DbError::RowNotFound(format!("Category {}", category.id)));
        }
        tx.commit()
            .await
            .map_err(|e| DbError::TransactionError(e.to_string()))?;

        info!("Category {} updated", category.id);
        Ok(category)
    }
}
