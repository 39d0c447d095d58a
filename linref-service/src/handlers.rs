//! HTTP request handlers for the linear referencing service.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use linref::{Line, LinrefError, Point};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinError;
use tokio_util::sync::CancellationToken;
use utoipa::ToSchema;

use crate::AppState;

/// Request body for locating a point along a route.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocateRequest {
    /// Route to walk. Paths are walked in order.
    #[serde(default)]
    pub route: Line,
    /// Target measure: vertex measure units for measured routes, meters
    /// otherwise.
    #[serde(default)]
    pub measure: f64,
}

/// Error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Outcome of a traversal run on the blocking pool.
pub type LocateOutcome = Result<linref::Result<Option<Point>>, JoinError>;

/// Locate the point at a measure along a route.
///
/// # Returns
///
/// - `200 OK` with the located point
/// - `204 No Content` if the measure lies beyond the end of the route
/// - `408 Request Timeout` if the traversal was cancelled
/// - `500 Internal Server Error` on unexpected errors
#[utoipa::path(
    post,
    path = "/api/linearreferencing",
    tag = "linear referencing",
    request_body = LocateRequest,
    responses(
        (status = 200, description = "Point located", body = Point),
        (status = 204, description = "Measure lies beyond the end of the route"),
        (status = 408, description = "Traversal cancelled", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn locate_point_along_route(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LocateRequest>,
) -> Response {
    tracing::info!(
        measure = request.measure,
        paths = request.route.paths.len(),
        "Locate point along route"
    );

    let outcome =
        locate_with_deadline(request, CancellationToken::new(), state.config.request_timeout)
            .await;

    locate_response(outcome, state.config.pretty_json)
}

/// Run a traversal on the blocking pool, observing `token`.
pub async fn run_locate(request: LocateRequest, token: CancellationToken) -> LocateOutcome {
    tokio::task::spawn_blocking(move || {
        linref::locate_point_along_route_cancellable(&request.route, request.measure, &token)
    })
    .await
}

/// Run a traversal that is cancelled once `timeout` elapses.
///
/// The deadline timer lives inside this future. Dropping the future (client
/// disconnect) drops the timer and cancels `token`.
pub async fn locate_with_deadline(
    request: LocateRequest,
    token: CancellationToken,
    timeout: Duration,
) -> LocateOutcome {
    let guard = token.clone().drop_guard();

    let locate = run_locate(request, token.clone());
    tokio::pin!(locate);

    let outcome = tokio::select! {
        outcome = &mut locate => outcome,
        () = tokio::time::sleep(timeout) => {
            tracing::warn!(timeout_ms = timeout.as_millis() as u64, "Request deadline reached");
            token.cancel();
            locate.await
        }
    };

    let _ = guard.disarm();
    outcome
}

/// Map a traversal outcome onto an HTTP response.
pub fn locate_response(outcome: LocateOutcome, pretty: bool) -> Response {
    match outcome {
        Ok(Ok(Some(point))) => {
            tracing::info!(x = point.x, y = point.y, "Point located");
            json_response(StatusCode::OK, &point, pretty)
        }
        Ok(Ok(None)) => {
            tracing::info!("Measure beyond end of route");
            StatusCode::NO_CONTENT.into_response()
        }
        Ok(Err(e)) => error_response(e, pretty),
        Err(e) => {
            tracing::error!(error = %e, "Locate task failed");
            json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &ErrorResponse {
                    error: e.to_string(),
                },
                pretty,
            )
        }
    }
}

/// Create an error response for locate failures.
fn error_response(e: LinrefError, pretty: bool) -> Response {
    let status = match &e {
        LinrefError::Cancelled => StatusCode::REQUEST_TIMEOUT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    tracing::warn!(error = %e, "Locate failed");

    json_response(
        status,
        &ErrorResponse {
            error: e.to_string(),
        },
        pretty,
    )
}

/// Serialize `value` as the JSON body, indented if `pretty` is set.
fn json_response<T: Serialize>(status: StatusCode, value: &T, pretty: bool) -> Response {
    if !pretty {
        return (status, Json(value)).into_response();
    }

    match serde_json::to_string_pretty(value) {
        Ok(body) => (status, [(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

/// Health check endpoint.
///
/// Returns service status and version.
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
