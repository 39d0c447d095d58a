//! linref Service Library
//!
//! HTTP handlers, configuration and routing for the linear referencing
//! service. This library is used by both the linref-service binary and
//! integration tests.

pub mod config;
pub mod handlers;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use config::ServiceConfig;

/// Application state shared across handlers.
pub struct AppState {
    /// Service configuration.
    pub config: ServiceConfig,
}

/// OpenAPI documentation for the linref service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Linear Referencing Service",
        version = "0.1.0",
        description = "Locate points along routes by measure using great-circle math.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(handlers::locate_point_along_route, handlers::health_check),
    components(schemas(
        handlers::LocateRequest,
        handlers::ErrorResponse,
        handlers::HealthResponse,
        linref::Line,
        linref::Path,
        linref::Point,
    )),
    tags(
        (name = "linear referencing", description = "Locate points along routes"),
        (name = "system", description = "System and health endpoints")
    )
)]
pub struct ApiDoc;

/// Build the service router with tracing and CORS middleware.
pub fn router(state: Arc<AppState>) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_body_bytes);

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route(
            "/api/linearreferencing",
            post(handlers::locate_point_along_route).layer(body_limit),
        )
        .route("/health", get(handlers::health_check))
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}

// Re-export commonly used types for convenience
pub use handlers::{ErrorResponse, HealthResponse, LocateRequest};
