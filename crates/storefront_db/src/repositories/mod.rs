//! Repository modules for database access
//!
//! Entity types, their filters and repository traits live next to the SQL
//! implementations that back them.

pub mod category;
pub mod category_sql;
pub mod product;
pub mod product_sql;

pub use category::{Category, CategoryFilter, CategoryRepository};
pub use category_sql::SqlCategoryRepository;
pub use product::{Product, ProductFilter, ProductRepository};
pub use product_sql::SqlProductRepository;
