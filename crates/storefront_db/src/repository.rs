//! Repository traits for database access
//!
//! This module defines the generic repository contract shared by the catalog
//! entities, together with the small query-building pieces the SQL
//! implementations use: predicates that render to parameterized `WHERE`
//! fragments, and page requests that render to `LIMIT`/`OFFSET`.

use crate::error::DbError;
use sqlx::any::AnyArguments;
use sqlx::query::Query;
use std::fmt::Debug;

/// A value bound to a filter placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Int(i64),
    Text(String),
}

/// Case-folded form of an entity name, stored in the `NameKey` columns.
///
/// Uses Unicode lowercasing, so "Éclairs" and "éclairs" share a key.
pub fn name_key(name: &str) -> String {
    name.to_lowercase()
}

/// A predicate over one entity table.
///
/// Implementations are closed enums; each variant renders to a SQL condition
/// using a single numbered placeholder.
pub trait QueryFilter {
    /// Renders the condition with its placeholder written as `$index`.
    fn to_sql(&self, index: usize) -> (String, FilterValue);
}

/// Renders an optional filter as a `WHERE` clause (or nothing) plus the values to bind.
pub(crate) fn where_clause<F: QueryFilter>(filter: Option<&F>) -> (String, Vec<FilterValue>) {
    match filter {
        Some(filter) => {
            let (condition, value) = filter.to_sql(1);
            (format!("WHERE {}", condition), vec![value])
        }
        None => (String::new(), Vec::new()),
    }
}

/// Binds filter values onto a query in placeholder order.
pub(crate) fn bind_values<'q>(
    mut query: Query<'q, sqlx::Any, AnyArguments<'q>>,
    values: &[FilterValue],
) -> Query<'q, sqlx::Any, AnyArguments<'q>> {
    for value in values {
        query = match value {
            FilterValue::Int(v) => query.bind(*v),
            FilterValue::Text(v) => query.bind(v.clone()),
        };
    }
    query
}

/// Which slice of a result set to return.
///
/// A `page_size` of zero (or less) means "everything"; `page_number` is
/// 1-based and values below 1 are treated as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_size: i64,
    pub page_number: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::unpaged()
    }
}

impl PageRequest {
    pub fn new(page_size: i64, page_number: i64) -> Self {
        Self {
            page_size,
            page_number,
        }
    }

    /// Every matching row.
    pub fn unpaged() -> Self {
        Self::new(0, 1)
    }

    /// Only the first matching row.
    pub fn first() -> Self {
        Self::new(1, 1)
    }

    pub fn is_paged(&self) -> bool {
        self.page_size > 0
    }

    /// Number of rows skipped before the page starts.
    pub fn offset(&self) -> i64 {
        if !self.is_paged() {
            return 0;
        }
        (self.page_number.max(1) - 1).saturating_mul(self.page_size)
    }

    /// `LIMIT ... OFFSET ...` suffix, empty when unpaged.
    pub fn sql_suffix(&self) -> String {
        if self.is_paged() {
            format!("LIMIT {} OFFSET {}", self.page_size, self.offset())
        } else {
            String::new()
        }
    }
}

/// A trait for database repositories
///
/// Absence is never an error: lookups return `None`, an empty `Vec` or
/// `false`. Every write runs in its own transaction and is committed before
/// the returned future resolves.
pub trait Repository<T>: Sync
where
    T: Clone + Debug + Send,
{
    /// Predicate type used to select rows of `T`.
    type Filter: QueryFilter + Debug + Send + Sync;

    /// Fetch all entities matching `filter`, ordered by id
    ///
    /// # Arguments
    ///
    /// * `filter` - Optional predicate; `None` matches every row
    /// * `include_related` - Also load the entity's related data
    /// * `page` - Which slice of the ordered result to return
    fn get_all(
        &self,
        filter: Option<&Self::Filter>,
        include_related: bool,
        page: PageRequest,
    ) -> impl std::future::Future<Output = Result<Vec<T>, DbError>> + Send;

    /// Fetch the first entity (by id) matching `filter`
    fn get(
        &self,
        filter: Option<&Self::Filter>,
        include_related: bool,
    ) -> impl std::future::Future<Output = Result<Option<T>, DbError>> + Send {
        async move {
            let found = self
                .get_all(filter, include_related, PageRequest::first())
                .await?;
            Ok(found.into_iter().next())
        }
    }

    /// Check whether any entity matches `filter`
    fn does_exist(
        &self,
        filter: &Self::Filter,
    ) -> impl std::future::Future<Output = Result<bool, DbError>> + Send;

    /// Insert a new entity
    ///
    /// # Returns
    ///
    /// The entity with its server-generated id
    fn create(&self, entity: T) -> impl std::future::Future<Output = Result<T, DbError>> + Send;

    /// Delete an entity by its id
    ///
    /// # Returns
    ///
    /// `true` if a row was removed, `false` if there was nothing to remove
    fn delete(&self, entity: &T) -> impl std::future::Future<Output = Result<bool, DbError>> + Send;
}
