//! Conversions between stored entities and transport DTOs
//!
//! One function per direction. Nothing here touches the store; related data
//! (`Category::products`, `Product::category`) is never carried over.

use storefront_db::{Category, Product};

use crate::models::{CategoryDto, CreateCategoryDto, CreateProductDto, ProductDto, UpdateProductDto};

pub fn category_from_create(dto: CreateCategoryDto) -> Category {
    Category::new(dto.name)
}

pub fn category_to_create(category: &Category) -> CreateCategoryDto {
    CreateCategoryDto {
        name: category.name.clone(),
    }
}

pub fn category_from_dto(dto: CategoryDto) -> Category {
    Category {
        id: dto.id,
        ..Category::new(dto.name)
    }
}

pub fn category_to_dto(category: &Category) -> CategoryDto {
    CategoryDto {
        id: category.id,
        name: category.name.clone(),
    }
}

/// A client-supplied `categoryId` is copied as-is; callers overwrite it with
/// the resolved category.
pub fn product_from_create(dto: CreateProductDto) -> Product {
    Product::new(dto.name, dto.category_id.unwrap_or_default(), dto.category_name)
}

pub fn product_to_create(product: &Product) -> CreateProductDto {
    CreateProductDto {
        name: product.name.clone(),
        category_name: product.category_name.clone(),
        category_id: Some(product.category_id),
    }
}

pub fn product_from_update(dto: UpdateProductDto) -> Product {
    Product {
        id: dto.id,
        ..Product::new(dto.name, dto.category_id.unwrap_or_default(), dto.category_name)
    }
}

pub fn product_to_update(product: &Product) -> UpdateProductDto {
    UpdateProductDto {
        id: product.id,
        name: product.name.clone(),
        category_name: product.category_name.clone(),
        category_id: Some(product.category_id),
    }
}

/// `category_id` travels as `categoryRef` on the read DTO.
pub fn product_to_dto(product: &Product) -> ProductDto {
    ProductDto {
        id: product.id,
        name: product.name.clone(),
        category_name: product.category_name.clone(),
        category_ref: product.category_id,
    }
}

pub fn product_from_dto(dto: ProductDto) -> Product {
    Product {
        id: dto.id,
        ..Product::new(dto.name, dto.category_ref, dto.category_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_ref_carries_the_category_id() {
        let product = Product {
            id: 5,
            ..Product::new("Lamp", 9, "Home")
        };
        let dto = product_to_dto(&product);
        assert_eq!(dto.category_ref, 9);
        assert_eq!(dto.category_name, "Home");
        assert_eq!(product_from_dto(dto), product);
    }

    #[test]
    fn related_data_is_not_mapped() {
        let mut category = Category::new("Home");
        category.id = 2;
        category.products.push(Product::new("Lamp", 2, "Home"));

        let back = category_from_dto(category_to_dto(&category));
        assert_eq!(back.id, 2);
        assert!(back.products.is_empty());
    }

    #[test]
    fn create_dtos_start_unsaved() {
        let category = category_from_create(CreateCategoryDto {
            name: "Garden".to_string(),
        });
        assert_eq!(category.id, 0);
        assert_eq!(category_to_create(&category).name, "Garden");

        let product = product_from_create(CreateProductDto {
            name: "Rake".to_string(),
            category_name: "Garden".to_string(),
            category_id: None,
        });
        assert_eq!(product.id, 0);
        assert_eq!(product.category_id, 0);
    }

    #[test]
    fn update_dto_keeps_the_id() {
        let product = product_from_update(UpdateProductDto {
            id: 11,
            name: "Rake".to_string(),
            category_name: "Garden".to_string(),
            category_id: Some(4),
        });
        assert_eq!(product.id, 11);
        assert_eq!(product_to_update(&product).category_id, Some(4));
        assert_eq!(product_to_create(&product).category_id, Some(4));
    }
}
