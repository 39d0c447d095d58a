//! Integration tests for the HTTP API.

use axum::http::StatusCode;
use axum_test::TestServer;
use linref_service::{router, AppState, ServiceConfig};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

const LOCATE: &str = "/api/linearreferencing";

/// Create a test server with the given configuration.
fn create_test_server(config: ServiceConfig) -> TestServer {
    let state = Arc::new(AppState { config });
    TestServer::new(router(state)).unwrap()
}

/// One path heading north from the equator, measured in meters.
fn measured_route() -> Value {
    json!({
        "paths": [{
            "points": [
                {"x": 0.0, "y": 0.0, "m": 0.0},
                {"x": 0.0, "y": 1.0, "m": 111320.0}
            ]
        }]
    })
}

/// Two unmeasured paths: north along the meridian, then east.
fn unmeasured_route() -> Value {
    json!({
        "paths": [
            {"points": [{"x": 0.0, "y": 0.0}, {"x": 0.0, "y": 1.0}]},
            {"points": [{"x": 0.0, "y": 1.0}, {"x": 1.0, "y": 1.0}]}
        ]
    })
}

#[tokio::test]
async fn test_locate_measured_halfway() {
    let server = create_test_server(ServiceConfig::default());

    let response = server
        .post(LOCATE)
        .json(&json!({"route": measured_route(), "measure": 55660}))
        .await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert!(json["x"].as_f64().unwrap().abs() < 1e-9);
    assert!((json["y"].as_f64().unwrap() - 0.5).abs() < 0.01);
    assert!(json.get("m").is_none());
}

#[tokio::test]
async fn test_locate_measured_start() {
    let server = create_test_server(ServiceConfig::default());

    let response = server
        .post(LOCATE)
        .json(&json!({"route": measured_route(), "measure": 0}))
        .await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert!(json["x"].as_f64().unwrap().abs() < 1e-9);
    assert!(json["y"].as_f64().unwrap().abs() < 1e-9);
}

#[tokio::test]
async fn test_locate_beyond_end() {
    let server = create_test_server(ServiceConfig::default());

    let response = server
        .post(LOCATE)
        .json(&json!({"route": measured_route(), "measure": 200000}))
        .await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_locate_empty_route() {
    let server = create_test_server(ServiceConfig::default());

    let response = server
        .post(LOCATE)
        .json(&json!({"route": {"paths": []}, "measure": 0}))
        .await;
    response.assert_status(StatusCode::NO_CONTENT);

    // Missing route and measure default to an empty route at measure 0
    let response = server.post(LOCATE).json(&json!({})).await;
    response.assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_locate_single_point_path() {
    let server = create_test_server(ServiceConfig::default());

    let response = server
        .post(LOCATE)
        .json(&json!({
            "route": {"paths": [{"points": [{"x": 10.0, "y": 10.0}]}]},
            "measure": 0
        }))
        .await;

    response.assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_locate_unmeasured_second_path() {
    let server = create_test_server(ServiceConfig::default());

    // Past the first path (~111.2 km) and 1 km into the second, heading east
    let response = server
        .post(LOCATE)
        .json(&json!({"route": unmeasured_route(), "measure": 112194.93}))
        .await;

    response.assert_status_ok();
    let json: Value = response.json();
    let x = json["x"].as_f64().unwrap();
    let y = json["y"].as_f64().unwrap();
    assert!(x > 0.0 && x < 0.01, "x = {x}");
    assert!((y - 1.0).abs() < 1e-3, "y = {y}");
}

#[tokio::test]
async fn test_locate_mixed_measures_use_length() {
    let server = create_test_server(ServiceConfig::default());

    // One vertex lacks m, so 111320 (beyond the ~111195 m length) is not found
    let response = server
        .post(LOCATE)
        .json(&json!({
            "route": {"paths": [{"points": [{"x": 0.0, "y": 0.0, "m": 0.0}, {"x": 0.0, "y": 1.0}]}]},
            "measure": 111320
        }))
        .await;

    response.assert_status(StatusCode::NO_CONTENT);
}

/// A long unmeasured route of short steps along the equator.
fn long_route(vertices: u32) -> Value {
    let points: Vec<Value> = (0..vertices)
        .map(|i| json!({"x": f64::from(i) * 1e-4, "y": 0.0}))
        .collect();
    json!({"paths": [{"points": points}]})
}

#[tokio::test]
async fn test_locate_deadline_exceeded() {
    let server = create_test_server(
        ServiceConfig::default().request_timeout(Duration::from_millis(1)),
    );

    let response = server
        .post(LOCATE)
        .json(&json!({"route": long_route(300_000), "measure": 1e12}))
        .await;

    response.assert_status(StatusCode::REQUEST_TIMEOUT);
    let json: Value = response.json();
    assert_eq!(json["error"], "Operation was cancelled");
}

#[tokio::test]
async fn test_locate_body_too_large() {
    let server = create_test_server(ServiceConfig::default().max_body_bytes(1024));

    let response = server
        .post(LOCATE)
        .json(&json!({"route": long_route(1_000), "measure": 0}))
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_locate_invalid_body() {
    let server = create_test_server(ServiceConfig::default());

    let response = server
        .post(LOCATE)
        .json(&json!({"route": measured_route(), "measure": "halfway"}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_locate_wrong_method() {
    let server = create_test_server(ServiceConfig::default());

    let response = server.get(LOCATE).await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_locate_pretty_json() {
    let server = create_test_server(ServiceConfig::default().pretty_json(true));

    let response = server
        .post(LOCATE)
        .json(&json!({"route": measured_route(), "measure": 0}))
        .await;

    response.assert_status_ok();
    assert!(response.text().contains('\n'));
    let json: Value = response.json();
    assert!(json["y"].as_f64().unwrap().abs() < 1e-9);
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = create_test_server(ServiceConfig::default());

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].as_str().is_some());
}

#[tokio::test]
async fn test_openapi_document() {
    let server = create_test_server(ServiceConfig::default());

    let response = server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert!(json["paths"].get(LOCATE).is_some());
    assert!(json["paths"].get("/health").is_some());
}
