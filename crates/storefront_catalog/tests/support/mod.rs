//! Shared harness for the HTTP tests: a router over a fresh in-memory
//! database, driven with `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use storefront_catalog::{routes, API_BASE};
use storefront_config::DatabaseConfig;
use storefront_db::{init_schema, DbClient};
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub db_client: DbClient,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub fn envelope_status(&self) -> u64 {
        self.body["statusCode"].as_u64().expect("statusCode")
    }

    pub fn is_success(&self) -> bool {
        self.body["isSuccess"].as_bool().expect("isSuccess")
    }

    pub fn errors(&self) -> Vec<String> {
        serde_json::from_value(self.body["errorMessages"].clone()).expect("errorMessages")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Id at the end of the `Location` header.
    pub fn location_id(&self) -> i64 {
        let location = self.header("location").expect("Location header");
        location
            .rsplit('/')
            .next()
            .and_then(|id| id.parse().ok())
            .expect("numeric id in Location")
    }
}

impl TestApp {
    pub async fn new() -> Self {
        let db_client = DbClient::from_config(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: Some(1),
        })
        .await
        .expect("in-memory database");
        init_schema(&db_client).await.expect("schema");

        let router = Router::new().nest(API_BASE, routes(db_client.clone()));
        Self { router, db_client }
    }

    pub async fn send_raw(&self, method: Method, uri: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send_raw(Method::GET, uri, "").await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send_raw(Method::DELETE, uri, "").await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.send_raw(Method::POST, uri, &body.to_string()).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.send_raw(Method::PUT, uri, &body.to_string()).await
    }

    pub async fn create_category(&self, name: &str) -> i64 {
        let response = self
            .post("/api/Category/CreateCategory", json!({ "name": name }))
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.location_id()
    }

    pub async fn create_product(&self, name: &str, category_name: &str) -> i64 {
        let response = self
            .post(
                "/api/Product/CreateProduct",
                json!({ "name": name, "categoryName": category_name }),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.location_id()
    }
}
