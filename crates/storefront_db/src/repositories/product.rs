//! Product entity, its filters and repository contract

use crate::error::DbError;
use crate::repositories::category::Category;
use crate::repository::{name_key, FilterValue, QueryFilter, Repository};

/// A product as stored in the `Products` table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Product {
    /// Server-generated id; 0 until persisted
    pub id: i64,
    pub name: String,
    /// Foreign key into `Categories`
    pub category_id: i64,
    /// Name of the owning category, always resolved through the join on reads
    pub category_name: String,
    /// The owning category, only populated when related data is requested
    pub category: Option<Category>,
}

impl Product {
    /// A new, not yet persisted product.
    pub fn new(name: impl Into<String>, category_id: i64, category_name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            category_id,
            category_name: category_name.into(),
            category: None,
        }
    }
}

/// Row predicates for products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductFilter {
    Id(i64),
    /// Product name equality ignoring case, compared through `NameKey`
    NameIgnoreCase(String),
    /// Exact, case-sensitive match on the owning category's name
    CategoryName(String),
    CategoryId(i64),
}

impl QueryFilter for ProductFilter {
    fn to_sql(&self, index: usize) -> (String, FilterValue) {
        match self {
            ProductFilter::Id(id) => (format!("p.Id = ${}", index), FilterValue::Int(*id)),
            ProductFilter::NameIgnoreCase(name) => (
                format!("p.NameKey = ${}", index),
                FilterValue::Text(name_key(name)),
            ),
            ProductFilter::CategoryName(name) => (
                format!("c.Name = ${}", index),
                FilterValue::Text(name.clone()),
            ),
            ProductFilter::CategoryId(id) => {
                (format!("p.CategoryId = ${}", index), FilterValue::Int(*id))
            }
        }
    }
}

/// Repository for products
pub trait ProductRepository: Repository<Product, Filter = ProductFilter> {
    /// Replace the stored name and category of `product` (matched by id)
    ///
    /// # Errors
    ///
    /// Returns [`DbError::RowNotFound`] if no row has `product.id`.
    fn update(
        &self,
        product: Product,
    ) -> impl std::future::Future<Output = Result<Product, DbError>> + Send;
}
