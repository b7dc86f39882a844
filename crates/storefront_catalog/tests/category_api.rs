mod support;

use axum::http::{Method, StatusCode};
use serde_json::json;
use support::TestApp;

#[tokio::test]
async fn created_category_is_reachable_through_location() {
    let app = TestApp::new().await;

    let created = app
        .post("/api/Category/CreateCategory", json!({ "name": "Books" }))
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.envelope_status(), 201);
    assert_eq!(created.body["result"], json!({ "name": "Books" }));

    let id = created.location_id();
    assert_eq!(
        created.header("location"),
        Some(format!("/api/Category/GetCategory/{}", id).as_str())
    );

    let fetched = app.get(&format!("/api/Category/GetCategory/{}", id)).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["result"], json!({ "id": id, "name": "Books" }));
    assert_eq!(fetched.header("cache-control"), Some("public, max-age=60"));
}

#[tokio::test]
async fn duplicate_names_are_rejected_ignoring_case() {
    let app = TestApp::new().await;
    app.create_category("Garden").await;

    let duplicate = app
        .post("/api/Category/CreateCategory", json!({ "name": "gARDEN" }))
        .await;
    assert_eq!(duplicate.status, StatusCode::BAD_REQUEST);
    assert!(!duplicate.is_success());
    assert_eq!(duplicate.errors(), vec!["Category already exists"]);

    let all = app.get("/api/Category/GetAllCategories").await;
    assert_eq!(all.body["result"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn non_ascii_names_are_unique_ignoring_case() {
    let app = TestApp::new().await;
    app.create_category("Éclairs").await;

    let duplicate = app
        .post("/api/Category/CreateCategory", json!({ "name": "éclairs" }))
        .await;
    assert_eq!(duplicate.status, StatusCode::BAD_REQUEST);
    assert_eq!(duplicate.errors(), vec!["Category already exists"]);

    let all = app.get("/api/Category/GetAllCategories").await;
    assert_eq!(all.body["result"].as_array().map(Vec::len), Some(1));
    assert_eq!(all.body["result"][0]["name"], "Éclairs");
}

#[tokio::test]
async fn create_distinguishes_absent_and_malformed_bodies() {
    let app = TestApp::new().await;

    let absent = app
        .send_raw(Method::POST, "/api/Category/CreateCategory", "")
        .await;
    assert_eq!(absent.status, StatusCode::BAD_REQUEST);
    assert_eq!(absent.errors(), vec!["Error No Category was given"]);

    let null = app
        .send_raw(Method::POST, "/api/Category/CreateCategory", "null")
        .await;
    assert_eq!(null.errors(), vec!["Error No Category was given"]);

    for body in [r#"{"name": 12}"#, "{not json", r#"{"name": "   "}"#] {
        let malformed = app
            .send_raw(Method::POST, "/api/Category/CreateCategory", body)
            .await;
        assert_eq!(malformed.status, StatusCode::BAD_REQUEST, "{}", body);
        assert_eq!(malformed.errors(), vec!["Error"], "{}", body);
    }
}

#[tokio::test]
async fn id_zero_is_a_bad_request() {
    let app = TestApp::new().await;
    let response = app.get("/api/Category/GetCategory/0").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.envelope_status(), 400);
    assert!(!response.is_success());
}

#[tokio::test]
async fn id_zero_is_rejected_before_touching_the_store() {
    let app = TestApp::new().await;
    app.db_client
        .execute("DROP TABLE Products")
        .await
        .expect("drop products");
    app.db_client
        .execute("DROP TABLE Categories")
        .await
        .expect("drop categories");

    for uri in ["/api/Category/GetCategory/0", "/api/Product/GetProduct/0"] {
        let response = app.get(uri).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(response.envelope_status(), 400, "{}", uri);
    }
}

#[tokio::test]
async fn unparsable_ids_and_paging_get_an_envelope() {
    let app = TestApp::new().await;

    for (method, uri) in [
        (Method::GET, "/api/Category/GetCategory/abc"),
        (Method::DELETE, "/api/Category/DeleteCategory/abc"),
        (Method::GET, "/api/Category/GetAllCategories?pageSize=x"),
        (Method::GET, "/api/Product/GetProduct/abc"),
        (Method::GET, "/api/Product/GetAllProducts?pageNumber=first"),
    ] {
        let response = app.send_raw(method, uri, "").await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(response.envelope_status(), 400, "{}", uri);
        assert!(!response.is_success(), "{}", uri);
        assert!(
            response.errors()[0].starts_with("Validation error"),
            "{}: {:?}",
            uri,
            response.errors()
        );
    }
}

#[tokio::test]
async fn unknown_ids_are_not_found_on_get_and_bad_requests_on_writes() {
    let app = TestApp::new().await;

    let get = app.get("/api/Category/GetCategory/42").await;
    assert_eq!(get.status, StatusCode::NOT_FOUND);
    assert_eq!(get.envelope_status(), 404);

    let delete = app.delete("/api/Category/DeleteCategory/42").await;
    assert_eq!(delete.status, StatusCode::BAD_REQUEST);
    assert_eq!(delete.envelope_status(), 404);
    assert_eq!(delete.errors(), vec!["Error this Category doesnt exists"]);

    let update = app
        .put(
            "/api/Category/UpdateCategory/42",
            json!({ "id": 42, "name": "Nope" }),
        )
        .await;
    assert_eq!(update.status, StatusCode::BAD_REQUEST);
    assert_eq!(update.envelope_status(), 404);
}

#[tokio::test]
async fn listing_pages_in_id_order() {
    let app = TestApp::new().await;
    let mut ids = Vec::new();
    for name in ["A", "B", "C", "D", "E"] {
        ids.push(app.create_category(name).await);
    }

    let page = app
        .get("/api/Category/GetAllCategories?pageSize=2&pageNumber=2")
        .await;
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.envelope_status(), 200);
    assert_eq!(
        page.body["result"],
        json!([{ "id": ids[2], "name": "C" }, { "id": ids[3], "name": "D" }])
    );
    assert_eq!(
        page.header("x-pagination"),
        Some(r#"{"PageNumber":2,"PageSize":2}"#)
    );
    assert_eq!(page.header("cache-control"), Some("public, max-age=60"));

    let last = app
        .get("/api/Category/GetAllCategories?pageSize=2&pageNumber=3")
        .await;
    assert_eq!(last.body["result"].as_array().map(Vec::len), Some(1));

    let everything = app.get("/api/Category/GetAllCategories?pageSize=0").await;
    assert_eq!(everything.body["result"].as_array().map(Vec::len), Some(5));
    assert_eq!(
        everything.header("x-pagination"),
        Some(r#"{"PageNumber":1,"PageSize":0}"#)
    );
}

#[tokio::test]
async fn update_requires_matching_ids() {
    let app = TestApp::new().await;
    let id = app.create_category("Music").await;

    let mismatch = app
        .put(
            &format!("/api/Category/UpdateCategory/{}", id),
            json!({ "id": id + 1, "name": "Audio" }),
        )
        .await;
    assert_eq!(mismatch.status, StatusCode::BAD_REQUEST);
    assert_eq!(mismatch.envelope_status(), 404);
    assert_eq!(mismatch.errors(), vec!["Error this Category doesnt exists"]);

    let absent = app
        .send_raw(
            Method::PUT,
            &format!("/api/Category/UpdateCategory/{}", id),
            "",
        )
        .await;
    assert_eq!(absent.envelope_status(), 404);

    let updated = app
        .put(
            &format!("/api/Category/UpdateCategory/{}", id),
            json!({ "id": id, "name": "Audio" }),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.envelope_status(), 204);
    assert!(updated.is_success());

    let fetched = app.get(&format!("/api/Category/GetCategory/{}", id)).await;
    assert_eq!(fetched.body["result"]["name"], "Audio");
}

#[tokio::test]
async fn update_cannot_take_another_categorys_name() {
    let app = TestApp::new().await;
    app.create_category("Tools").await;
    let id = app.create_category("Toys").await;

    let response = app
        .put(
            &format!("/api/Category/UpdateCategory/{}", id),
            json!({ "id": id, "name": "TOOLS" }),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.errors(), vec!["Category already exists"]);

    // changing only the case of its own name is fine
    let recased = app
        .put(
            &format!("/api/Category/UpdateCategory/{}", id),
            json!({ "id": id, "name": "TOYS" }),
        )
        .await;
    assert_eq!(recased.envelope_status(), 204);
}

#[tokio::test]
async fn categories_with_products_are_not_deleted() {
    let app = TestApp::new().await;
    let id = app.create_category("Food").await;
    let product_id = app.create_product("Bread", "Food").await;

    let blocked = app
        .delete(&format!("/api/Category/DeleteCategory/{}", id))
        .await;
    assert_eq!(blocked.status, StatusCode::BAD_REQUEST);
    assert_eq!(blocked.errors(), vec!["Category still has products"]);
    assert_eq!(
        app.get(&format!("/api/Category/GetCategory/{}", id))
            .await
            .status,
        StatusCode::OK
    );

    app.delete(&format!("/api/Product/DeleteProduct/{}", product_id))
        .await;
    let deleted = app
        .delete(&format!("/api/Category/DeleteCategory/{}", id))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.envelope_status(), 204);
    assert_eq!(
        app.get(&format!("/api/Category/GetCategory/{}", id))
            .await
            .status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn health_reports_database_state() {
    let app = TestApp::new().await;
    let response = app.get("/api/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["result"], json!({ "database": true }));
}
