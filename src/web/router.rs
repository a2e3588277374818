//! Router configuration for the board API.

use axum::{
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::{ErrorStyle, WebConfig};

use super::docs::ApiDoc;
use super::error::compat_error_status;
use super::handlers::{
    create_reply, create_thread, delete_reply, delete_thread, get_thread, list_threads,
    report_reply, report_thread, AppState,
};
use super::middleware::{create_cors_layer, security_headers};

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, config: &WebConfig) -> Router {
    let api_routes = Router::new()
        .route(
            "/threads/:board",
            get(list_threads)
                .post(create_thread)
                .put(report_thread)
                .delete(delete_thread),
        )
        .route(
            "/replies/:board",
            get(get_thread)
                .post(create_reply)
                .put(report_reply)
                .delete(delete_reply),
        );

    let router = Router::new().nest("/api", api_routes);

    // Error objects go out as 200 unless real status codes are configured.
    let router = match config.error_style {
        ErrorStyle::Compat => router.layer(middleware::map_response(compat_error_status)),
        ErrorStyle::Http => router,
    };

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(&config.cors_origins))
                .layer(middleware::from_fn(security_headers)),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Create the Swagger UI router serving the OpenAPI document.
pub fn create_swagger_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
