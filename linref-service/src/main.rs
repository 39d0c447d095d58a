//! linref Service - HTTP microservice for linear referencing.
//!
//! Locates points along routes by measure using great-circle math.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `LINREF_PORT` | HTTP server port | 8080 |
//! | `LINREF_REQUEST_TIMEOUT_MS` | Traversal deadline in milliseconds | 30000 |
//! | `LINREF_PRETTY_JSON` | Indent JSON responses | false |
//! | `LINREF_MAX_BODY_BYTES` | Request body limit in bytes | 30000000 |
//! | `RUST_LOG` | Log level (e.g., "info", "debug") | "info" |
//!
//! ## Endpoints
//!
//! - `POST /api/linearreferencing` - Locate the point at a measure along a route
//! - `GET /health` - Health check
//! - `GET /docs` - OpenAPI documentation (Swagger UI)

use std::net::SocketAddr;
use std::sync::Arc;

use linref_service::{router, AppState, ServiceConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "linref_service=info,linref=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServiceConfig::from_env();

    tracing::info!(
        port = config.port,
        request_timeout_ms = config.request_timeout.as_millis() as u64,
        pretty_json = config.pretty_json,
        max_body_bytes = config.max_body_bytes,
        "Starting linref service"
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = router(Arc::new(AppState { config }));

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
