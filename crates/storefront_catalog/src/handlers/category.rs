//! Category endpoints (`/Category/...`)

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
    CategoryFilter, CategoryRepository, PageRequest, ProductFilter, Repository,
};
use tracing::{debug, info, warn};

use super::{
    bad_request, created, empty_failure, is_valid, list_response, no_content, parse_payload,
    reject_input, CatalogState, Payload, INVALID_PAYLOAD,
};
use crate::mapping::{category_from_create, category_from_dto, category_to_create, category_to_dto};
use crate::models::{CategoryDto, CreateCategoryDto, PageQuery};
use crate::routes::API_BASE;

const NO_CATEGORY_GIVEN: &str = "Error No Category was given";
const CATEGORY_EXISTS: &str = "Category already exists";
const CATEGORY_MISSING: &str = "Error this Category doesnt exists";
const CATEGORY_IN_USE: &str = "Category still has products";

/// Handler for listing categories, optionally paginated
#[axum::debug_handler]
pub async fn get_all_categories(
    State(state): State<Arc<CatalogState>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Response, StorefrontError> {
    let Query(page) = query.map_err(reject_input)?;
    debug!("Listing categories: {:?}", page);

    let categories = state
        .categories
        .get_all(None, false, PageRequest::new(page.page_size, page.page_number))
        .await
        .map(|categories| categories.iter().map(category_to_dto).collect::<Vec<_>>());

    Ok(list_response(categories, page, 60))
}

/// Handler for fetching one category by id
///
/// Id 0 is rejected with 400 before any lookup; an unknown id yields 404.
#[axum::debug_handler]
pub async fn get_category(
    State(state): State<Arc<CatalogState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Response, StorefrontError> {
    let Path(id) = path.map_err(reject_input)?;
    debug!("Fetching category {}", id);

    if id == 0 {
        return Ok(empty_failure(StatusCode::BAD_REQUEST));
    }

    let Some(category) = state
        .categories
        .get(Some(&CategoryFilter::Id(id)), false)
        .await?
    else {
        return Ok(empty_failure(StatusCode::NOT_FOUND));
    };

    let response = ApiResponse::ok(StatusCode::OK, category_to_dto(&category)).into_response();
    Ok(with_cache_control(response, 60))
}

/// Handler for creating a category
#[axum::debug_handler]
pub async fn create_category(
    State(state): State<Arc<CatalogState>>,
    body: Bytes,
) -> Result<Response, StorefrontError> {
    let dto = match parse_payload::<CreateCategoryDto>(&body) {
        Payload::Present(dto) if is_valid(&dto) => dto,
        Payload::Present(_) | Payload::Malformed => {
            return Ok(bad_request(StatusCode::BAD_REQUEST, INVALID_PAYLOAD))
        }
        Payload::Absent => return Ok(bad_request(StatusCode::BAD_REQUEST, NO_CATEGORY_GIVEN)),
    };
    debug!("Creating category {}", dto.name);

    if state
        .categories
        .does_exist(&CategoryFilter::NameIgnoreCase(dto.name.clone()))
        .await?
    {
        warn!("Category {} already exists", dto.name);
        return Ok(bad_request(StatusCode::BAD_REQUEST, CATEGORY_EXISTS));
    }

    let category = state.categories.create(category_from_create(dto)).await?;
    info!("Created category {} ({})", category.name, category.id);

    let location = format!("{}/Category/GetCategory/{}", API_BASE, category.id);
    Ok(created(&location, category_to_create(&category)))
}

/// Handler for deleting a category
///
/// A category that still owns products is not deleted.
#[axum::debug_handler]
pub async fn delete_category(
    State(state): State<Arc<CatalogState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Response, StorefrontError> {
    let Path(id) = path.map_err(reject_input)?;
    debug!("Deleting category {}", id);

    let Some(category) = state
        .categories
        .get(Some(&CategoryFilter::Id(id)), false)
        .await?
    else {
        warn!("Category {} does not exist", id);
        return Ok(bad_request(StatusCode::NOT_FOUND, CATEGORY_MISSING));
    };

    if state
        .products
        .does_exist(&ProductFilter::CategoryId(category.id))
        .await?
    {
        warn!("Category {} still has products", id);
        return Ok(bad_request(StatusCode::BAD_REQUEST, CATEGORY_IN_USE));
    }

    state.categories.delete(&category).await?;
    info!("Deleted category {}", id);
    Ok(no_content())
}

/// Handler for replacing a category
#[axum::debug_handler]
pub async fn update_category(
    State(state): State<Arc<CatalogState>>,
    path: Result<Path<i64>, PathRejection>,
    body: Bytes,
) -> Result<Response, StorefrontError> {
    let Path(id) = path.map_err(reject_input)?;
    debug!("Updating category {}", id);

    if !state.categories.does_exist(&CategoryFilter::Id(id)).await? {
        warn!("Category {} does not exist", id);
        return Ok(bad_request(StatusCode::NOT_FOUND, CATEGORY_MISSING));
    }

    let dto = match parse_payload::<CategoryDto>(&body) {
        Payload::Present(dto) => dto,
        Payload::Absent => return Ok(bad_request(StatusCode::NOT_FOUND, CATEGORY_MISSING)),
        Payload::Malformed => return Ok(bad_request(StatusCode::BAD_REQUEST, INVALID_PAYLOAD)),
    };
    if dto.id != id {
        warn!("Category id {} does not match path id {}", dto.id, id);
        return Ok(bad_request(StatusCode::NOT_FOUND, CATEGORY_MISSING));
    }
    if !is_valid(&dto) {
        return Ok(bad_request(StatusCode::BAD_REQUEST, INVALID_PAYLOAD));
    }

    // renaming onto another category's name would trip the unique index
    if let Some(other) = state
        .categories
        .get(Some(&CategoryFilter::NameIgnoreCase(dto.name.clone())), false)
        .await?
    {
        if other.id != id {
            warn!("Category {} already exists", dto.name);
            return Ok(bad_request(StatusCode::BAD_REQUEST, CATEGORY_EXISTS));
        }
    }

    state.categories.update(category_from_dto(dto)).await?;
    info!("Updated category {}", id);
    Ok(no_content())
}
