//! Category entity, its filters and repository contract

use crate::error::DbError;
use crate::repositories::product::Product;
use crate::repository::{name_key, FilterValue, QueryFilter, Repository};

/// A product category as stored in the `Categories` table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Category {
    /// Server-generated id; 0 until persisted
    pub id: i64,
    pub name: String,
    /// Products in this category, only populated when related data is requested
    pub products: Vec<Product>,
}

impl Category {
    /// A new, not yet persisted category.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            products: Vec::new(),
        }
    }
}

/// Row predicates for categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    Id(i64),
    /// Name equality ignoring case, compared through the `NameKey` column
    NameIgnoreCase(String),
}

impl QueryFilter for CategoryFilter {
    fn to_sql(&self, index: usize) -> (String, FilterValue) {
        match self {
            CategoryFilter::Id(id) => (format!("c.Id = ${}", index), FilterValue::Int(*id)),
            CategoryFilter::NameIgnoreCase(name) => (
                format!("c.NameKey = ${}", index),
                FilterValue::Text(name_key(name)),
            ),
        }
    }
}

/// Repository for categories
///
/// Adds full-row replacement on top of the generic operations.
pub trait CategoryRepository: Repository<Category, Filter = CategoryFilter> {
    /// Replace the stored name of `category` (matched by id)
    ///
    /// # Errors
    ///
    /// Returns [`DbError::RowNotFound`] if no row has `category.id`.
    fn update(
        &self,
        category: Category,
    ) -> impl std::future::Future<Output = Result<Category, DbError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_render_against_the_category_alias() {
        assert_eq!(
            CategoryFilter::Id(3).to_sql(1),
            ("c.Id = $1".to_string(), FilterValue::Int(3))
        );
        assert_eq!(
            CategoryFilter::NameIgnoreCase("Éclairs".to_string()).to_sql(2),
            (
                "c.NameKey = $2".to_string(),
                FilterValue::Text("éclairs".to_string())
            )
        );
    }

    #[test]
    fn new_category_is_unsaved() {
        let category = Category::new("Garden");
        assert_eq!(category.id, 0);
        assert!(category.products.is_empty());
    }
}
