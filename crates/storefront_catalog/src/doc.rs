#![allow(dead_code)]
use utoipa::OpenApi;

use crate::models::{
    CategoryDto, CategoryPageQuery, CreateCategoryDto, CreateProductDto, HealthStatus, PageQuery,
    ProductDto, UpdateProductDto,
};
use storefront_common::{ApiResponse, Pagination};

#[utoipa::path(
    get,
    path = "/Category/GetAllCategories",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of categories; X-Pagination carries the paging echo",
         body = ApiResponse<Vec<CategoryDto>>,
         example = json!({
             "statusCode": 200,
             "isSuccess": true,
             "errorMessages": [],
             "result": [{"id": 1, "name": "Books"}]
         })
        )
    ),
    tag = "Category"
)]
fn doc_get_all_categories() {}

#[utoipa::path(
    get,
    path = "/Category/GetCategory/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "The category", body = ApiResponse<CategoryDto>),
        (status = 400, description = "Id 0"),
        (status = 404, description = "No such category")
    ),
    tag = "Category"
)]
fn doc_get_category() {}

#[utoipa::path(
    post,
    path = "/Category/CreateCategory",
    request_body(content = CreateCategoryDto, example = json!({"name": "Books"})),
    responses(
        (status = 201, description = "Created; Location points at GetCategory", body = ApiResponse<CreateCategoryDto>),
        (status = 400, description = "Malformed body, missing body or duplicate name",
         example = json!({
             "statusCode": 400,
             "isSuccess": false,
             "errorMessages": ["Category already exists"],
             "result": null
         })
        )
    ),
    tag = "Category"
)]
fn doc_create_category() {}

#[utoipa::path(
    put,
    path = "/Category/UpdateCategory/{id}",
    params(("id" = i64, Path, description = "Category id, must match the body")),
    request_body(content = CategoryDto, example = json!({"id": 1, "name": "Novels"})),
    responses(
        (status = 200, description = "Updated; envelope statusCode is 204"),
        (status = 400, description = "No such category, id mismatch or invalid body")
    ),
    tag = "Category"
)]
fn doc_update_category() {}

#[utoipa::path(
    delete,
    path = "/Category/DeleteCategory/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Deleted; envelope statusCode is 204"),
        (status = 400, description = "No such category, or it still has products")
    ),
    tag = "Category"
)]
fn doc_delete_category() {}

#[utoipa::path(
    get,
    path = "/Product/GetAllProductsByCategory",
    params(CategoryPageQuery),
    responses(
        (status = 200, description = "Page of products in the category", body = ApiResponse<Vec<ProductDto>>)
    ),
    tag = "Product"
)]
fn doc_get_all_products_by_category() {}

#[utoipa::path(
    get,
    path = "/Product/GetAllProducts",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of products", body = ApiResponse<Vec<ProductDto>>,
         example = json!({
             "statusCode": 200,
             "isSuccess": true,
             "errorMessages": [],
             "result": [{"id": 1, "name": "Dune", "categoryName": "Books", "categoryRef": 1}]
         })
        )
    ),
    tag = "Product"
)]
fn doc_get_all_products() {}

#[utoipa::path(
    get,
    path = "/Product/GetProduct/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = ApiResponse<ProductDto>),
        (status = 400, description = "Id 0"),
        (status = 404, description = "No such product")
    ),
    tag = "Product"
)]
fn doc_get_product() {}

#[utoipa::path(
    post,
    path = "/Product/CreateProduct",
    request_body(content = CreateProductDto, example = json!({"name": "Dune", "categoryName": "Books"})),
    responses(
        (status = 201, description = "Created; Location points at GetProduct", body = ApiResponse<CreateProductDto>),
        (status = 400, description = "Malformed body, missing body, duplicate name or unknown category")
    ),
    tag = "Product"
)]
fn doc_create_product() {}

#[utoipa::path(
    put,
    path = "/Product/UpdateProduct/{id}",
    params(("id" = i64, Path, description = "Product id, must match the body")),
    request_body(content = UpdateProductDto, example = json!({"id": 1, "name": "Dune", "categoryName": "Books"})),
    responses(
        (status = 200, description = "Updated; envelope statusCode is 204"),
        (status = 400, description = "No such product, id mismatch, invalid body or unknown category")
    ),
    tag = "Product"
)]
fn doc_update_product() {}

#[utoipa::path(
    delete,
    path = "/Product/DeleteProduct/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Deleted; envelope statusCode is 204"),
        (status = 400, description = "No such product")
    ),
    tag = "Product"
)]
fn doc_delete_product() {}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and database are up", body = ApiResponse<HealthStatus>),
        (status = 503, description = "Database unreachable")
    ),
    tag = "Health"
)]
fn doc_health() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_get_all_categories,
        doc_get_category,
        doc_create_category,
        doc_update_category,
        doc_delete_category,
        doc_get_all_products_by_category,
        doc_get_all_products,
        doc_get_product,
        doc_create_product,
        doc_update_product,
        doc_delete_product,
        doc_health,
    ),
    components(
        schemas(
            CategoryDto,
            CreateCategoryDto,
            ProductDto,
            CreateProductDto,
            UpdateProductDto,
            HealthStatus,
            Pagination,
        )
    ),
    tags(
        (name = "Category", description = "Category CRUD"),
        (name = "Product", description = "Product CRUD"),
        (name = "Health", description = "Service health")
    ),
    servers(
        (url = "/api", description = "Storefront catalog API server")
    )
)]
pub struct CatalogApiDoc;
