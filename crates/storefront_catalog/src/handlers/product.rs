//! Product endpoints (`/Product/...`)

use axum::{
    body::Bytes,
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use storefront_common::{with_cache_control, ApiResponse, StorefrontError};
use storefront_db::{
    Category, CategoryFilter, PageRequest, Product, ProductFilter, ProductRepository, Repository,
};
use tracing::{debug, info, warn};

use super::{
    bad_request, created, empty_failure, is_valid, list_response, no_content, parse_payload,
    reject_input, CatalogState, Payload, INVALID_PAYLOAD,
};
use crate::mapping::{product_from_create, product_from_update, product_to_create, product_to_dto};
use crate::models::{CategoryPageQuery, CreateProductDto, PageQuery, UpdateProductDto};
use crate::routes::API_BASE;

const NO_PRODUCT_GIVEN: &str = "Error No Product was given";
const PRODUCT_EXISTS: &str = "Product already exists";
const PRODUCT_MISSING: &str = "Error this Product doesnt exists";
const CATEGORY_UNKNOWN: &str = "Category does not exist";

/// Looks up the category a product names, ignoring case.
async fn resolve_category(
    state: &CatalogState,
    category_name: &str,
) -> Result<Option<Category>, StorefrontError> {
    let category = state
        .categories
        .get(
            Some(&CategoryFilter::NameIgnoreCase(category_name.to_string())),
            false,
        )
        .await?;
    if category.is_none() {
        warn!("Category {} does not exist", category_name);
    }
    Ok(category)
}

/// Points `product` at `category`, whatever category id the client sent.
fn assign_category(product: &mut Product, category: Category) {
    product.category_id = category.id;
    product.category_name = category.name;
}

/// Handler for listing the products of one category
///
/// The category name must match exactly, including case.
#[axum::debug_handler]
pub async fn get_all_products_by_category(
    State(state): State<Arc<CatalogState>>,
    query: Result<Query<CategoryPageQuery>, QueryRejection>,
) -> Result<Response, StorefrontError> {
    let Query(query) = query.map_err(reject_input)?;
    debug!("Listing products of category {:?}", query);

    let page = query.page();
    let products = state
        .products
        .get_all(
            Some(&ProductFilter::CategoryName(query.category_name.clone())),
            true,
            PageRequest::new(page.page_size, page.page_number),
        )
        .await
        .map(|products| products.iter().map(product_to_dto).collect::<Vec<_>>());

    Ok(list_response(products, page, 60))
}

/// Handler for listing all products
#[axum::debug_handler]
pub async fn get_all_products(
    State(state): State<Arc<CatalogState>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Response, StorefrontError> {
    let Query(page) = query.map_err(reject_input)?;
    debug!("Listing products: {:?}", page);

    let products = state
        .products
        .get_all(None, false, PageRequest::new(page.page_size, page.page_number))
        .await
        .map(|products| products.iter().map(product_to_dto).collect::<Vec<_>>());

    Ok(list_response(products, page, 30))
}

/// Handler for fetching one product by id
#[axum::debug_handler]
pub async fn get_product(
    State(state): State<Arc<CatalogState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Response, StorefrontError> {
    let Path(id) = path.map_err(reject_input)?;
    debug!("Fetching product {}", id);

    if id == 0 {
        return Ok(empty_failure(StatusCode::BAD_REQUEST));
    }

    let Some(product) = state
        .products
        .get(Some(&ProductFilter::Id(id)), false)
        .await?
    else {
        return Ok(empty_failure(StatusCode::NOT_FOUND));
    };

    let response = ApiResponse::ok(StatusCode::OK, product_to_dto(&product)).into_response();
    Ok(with_cache_control(response, 60))
}

/// Handler for creating a product
///
/// The owning category is resolved from `categoryName`; a client-supplied
/// `categoryId` is ignored.
#[axum::debug_handler]
pub async fn create_product(
    State(state): State<Arc<CatalogState>>,
    body: Bytes,
) -> Result<Response, StorefrontError> {
    let dto = match parse_payload::<CreateProductDto>(&body) {
        Payload::Present(dto) if is_valid(&dto) => dto,
        Payload::Present(_) | Payload::Malformed => {
            return Ok(bad_request(StatusCode::BAD_REQUEST, INVALID_PAYLOAD))
        }
        Payload::Absent => return Ok(bad_request(StatusCode::BAD_REQUEST, NO_PRODUCT_GIVEN)),
    };
    debug!("Creating product {}", dto.name);

    if state
        .products
        .does_exist(&ProductFilter::NameIgnoreCase(dto.name.clone()))
        .await?
    {
        warn!("Product {} already exists", dto.name);
        return Ok(bad_request(StatusCode::BAD_REQUEST, PRODUCT_EXISTS));
    }

    let Some(category) = resolve_category(&state, &dto.category_name).await? else {
        return Ok(bad_request(StatusCode::BAD_REQUEST, CATEGORY_UNKNOWN));
    };

    let mut product = product_from_create(dto);
    assign_category(&mut product, category);

    let product = state.products.create(product).await?;
    info!(
        "Created product {} ({}) in category {}",
        product.name, product.id, product.category_id
    );

    let location = format!("{}/Product/GetProduct/{}", API_BASE, product.id);
    Ok(created(&location, product_to_create(&product)))
}

/// Handler for deleting a product
#[axum::debug_handler]
pub async fn delete_product(
    State(state): State<Arc<CatalogState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Response, StorefrontError> {
    let Path(id) = path.map_err(reject_input)?;
    debug!("Deleting product {}", id);

    let Some(product) = state
        .products
        .get(Some(&ProductFilter::Id(id)), false)
        .await?
    else {
        warn!("Product {} does not exist", id);
        return Ok(bad_request(StatusCode::NOT_FOUND, PRODUCT_MISSING));
    };

    state.products.delete(&product).await?;
    info!("Deleted product {}", id);
    Ok(no_content())
}

/// Handler for replacing a product
///
/// The category is re-resolved by name on every update; an unknown name
/// leaves the stored product untouched.
#[axum::debug_handler]
pub async fn update_product(
    State(state): State<Arc<CatalogState>>,
    path: Result<Path<i64>, PathRejection>,
    body: Bytes,
) -> Result<Response, StorefrontError> {
    let Path(id) = path.map_err(reject_input)?;
    debug!("Updating product {}", id);

    if !state.products.does_exist(&ProductFilter::Id(id)).await? {
        warn!("Product {} does not exist", id);
        return Ok(bad_request(StatusCode::NOT_FOUND, PRODUCT_MISSING));
    }

    let dto = match parse_payload::<UpdateProductDto>(&body) {
        Payload::Present(dto) => dto,
        Payload::Absent => return Ok(bad_request(StatusCode::NOT_FOUND, PRODUCT_MISSING)),
        Payload::Malformed => return Ok(bad_request(StatusCode::BAD_REQUEST, INVALID_PAYLOAD)),
    };
    if dto.id != id {
        warn!("Product id {} does not match path id {}", dto.id, id);
        return Ok(bad_request(StatusCode::NOT_FOUND, PRODUCT_MISSING));
    }
    if !is_valid(&dto) {
        return Ok(bad_request(StatusCode::BAD_REQUEST, INVALID_PAYLOAD));
    }

    if let Some(other) = state
        .products
        .get(Some(&ProductFilter::NameIgnoreCase(dto.name.clone())), false)
        .await?
    {
        if other.id != id {
            warn!("Product {} already exists", dto.name);
            return Ok(bad_request(StatusCode::BAD_REQUEST, PRODUCT_EXISTS));
        }
    }

    let Some(category) = resolve_category(&state, &dto.category_name).await? else {
        return Ok(bad_request(StatusCode::BAD_REQUEST, CATEGORY_UNKNOWN));
    };

    let mut product = product_from_update(dto);
    assign_category(&mut product, category);

    state.products.update(product).await?;
    info!("Updated product {}", id);
    Ok(no_content())
}
