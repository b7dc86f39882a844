// File: services/storefront_backend/src/main.rs
use axum::{routing::get, Router};
use std::sync::Arc;
use storefront_catalog::{routes as catalog_routes, API_BASE};
use storefront_common::{init_with_level, log_result, parse_level, Context, StorefrontError};
use storefront_config::load_config;
use storefront_db::{init_schema, DbClient};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), StorefrontError> {
    let config = Arc::new(load_config().context("Failed to load config")?);

    init_with_level(parse_level(config.log_level.as_deref()));

    let db_client = DbClient::from_config(&config.database).await?;
    log_result(
        init_schema(&db_client).await,
        "Catalog schema ready",
        "Schema initialization failed",
    )?;

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to the Storefront API!" }))
        .merge(catalog_routes(db_client));

    #[allow(unused_mut)] // only the openapi feature adds routes
    let mut app = Router::new().nest(API_BASE, api_router);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use storefront_catalog::openapi::CatalogApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Storefront API",
                version = "0.1.0",
                description = "Category and product catalog",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            servers((url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(CatalogApiDoc::openapi());
        info!("Adding Swagger UI at {}/docs", API_BASE);

        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc);
        app = app.merge(swagger_ui);
    }

    let app = app.layer(TraceLayer::new_for_http());

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind {}", addr))?;
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}{}", addr, API_BASE);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
