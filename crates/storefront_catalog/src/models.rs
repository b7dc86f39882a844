//! Transport shapes for the catalog endpoints
//!
//! All DTOs travel as camelCase JSON. Write DTOs carry `validator` rules; a
//! body that deserializes but fails them is rejected the same way as a
//! malformed one.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Rejects names that are empty or only whitespace.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// A category as returned by the read endpoints.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: i64,
    #[validate(custom(function = "not_blank"))]
    pub name: String,
}

/// Payload for creating a category (and the result echoed back on success).
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryDto {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
}

/// A product as returned by the read endpoints.
///
/// `categoryRef` carries the owning category's id.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i64,
    pub name: String,
    pub category_name: String,
    pub category_ref: i64,
}

/// Payload for creating a product.
///
/// `categoryId` is accepted but ignored: the category is always resolved from
/// `categoryName`.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductDto {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(custom(function = "not_blank"))]
    pub category_name: String,
    #[serde(default)]
    pub category_id: Option<i64>,
}

/// Payload for replacing a product.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductDto {
    pub id: i64,
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(custom(function = "not_blank"))]
    pub category_name: String,
    #[serde(default)]
    pub category_id: Option<i64>,
}

/// Paging query parameters shared by the list endpoints.
#[cfg_attr(
    feature = "openapi",
    derive(utoipa::IntoParams),
    into_params(parameter_in = Query)
)]
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    /// Rows per page; 0 returns every row
    #[serde(default)]
    pub page_size: i64,
    /// 1-based page number
    #[serde(default = "first_page")]
    pub page_number: i64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page_size: 0,
            page_number: first_page(),
        }
    }
}

fn first_page() -> i64 {
    1
}

/// Query parameters of `GetAllProductsByCategory`.
#[cfg_attr(
    feature = "openapi",
    derive(utoipa::IntoParams),
    into_params(parameter_in = Query)
)]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPageQuery {
    /// Exact (case-sensitive) category name
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub page_size: i64,
    #[serde(default = "first_page")]
    pub page_number: i64,
}

impl CategoryPageQuery {
    pub fn page(&self) -> PageQuery {
        PageQuery {
            page_size: self.page_size,
            page_number: self.page_number,
        }
    }
}

/// Body of `GET /health`.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub database: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_names_fail_validation() {
        assert!(CreateCategoryDto { name: "  ".to_string() }.validate().is_err());
        assert!(CreateCategoryDto { name: String::new() }.validate().is_err());
        assert!(CreateCategoryDto { name: "Books".to_string() }.validate().is_ok());

        let product = CreateProductDto {
            name: "Lamp".to_string(),
            category_name: "".to_string(),
            category_id: None,
        };
        assert!(product.validate().is_err());
    }

    #[test]
    fn product_dto_uses_category_ref_on_the_wire() {
        let dto = ProductDto {
            id: 1,
            name: "Lamp".to_string(),
            category_name: "Home".to_string(),
            category_ref: 3,
        };
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({"id": 1, "name": "Lamp", "categoryName": "Home", "categoryRef": 3})
        );
    }

    #[test]
    fn category_id_is_optional_on_create() {
        let dto: CreateProductDto =
            serde_json::from_value(json!({"name": "Lamp", "categoryName": "Home"})).unwrap();
        assert_eq!(dto.category_id, None);
    }

    #[test]
    fn page_query_defaults() {
        let query: PageQuery = serde_json::from_value(json!({})).unwrap();
        assert_eq!(query.page_size, 0);
        assert_eq!(query.page_number, 1);
    }
}
