// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::body::Body;
use axum::http::{Request, StatusCode};
use config::ExplorerConfig;
use http_body_util::BodyExt;
use serde_json::json;
use store_explorer::metrics;
use store_explorer::{app::create_app, state::AppState};
use tower::ServiceExt;

// Every test in this binary shares one registry; `init` only runs once.
const PREFIX: &str = "test";

#[test]
fn test_metrics_initialization() {
    metrics::init(PREFIX);

    let metrics_text = metrics::gather_metrics().expect("metrics should be initialized");

    // Counters always appear even with zero values
    for name in [
        "test_http_requests",
        "test_http_request_success",
        "test_http_request_error",
        "test_records_decoded",
        "test_decode_errors",
    ] {
        assert!(metrics_text.contains(name), "Should contain {}", name);
    }
}

#[test]
fn test_decode_metrics_increment() {
    use store_explorer::metrics::registry::{DECODE_ERRORS, RECORDS_DECODED};

    metrics::init(PREFIX);

    let initial_records = RECORDS_DECODED.get();
    let initial_errors = DECODE_ERRORS.get();

    metrics::record_decoded("/v1/store/records/decode", 3);
    metrics::record_decode_error();

    assert!(RECORDS_DECODED.get() >= initial_records + 3.0);
    assert!(DECODE_ERRORS.get() >= initial_errors + 1.0);
}

#[test]
fn test_histogram_metrics() {
    use store_explorer::metrics::registry::REQUEST_DURATION_SECONDS;

    metrics::init(PREFIX);

    REQUEST_DURATION_SECONDS
        .with_label_values(&["GET", "/histogram-test", "200"])
        .observe(0.5);

    let metrics_text = metrics::gather_metrics().unwrap();
    assert!(metrics_text.contains("test_request_duration_seconds"));
    assert!(metrics_text.contains("route=\"/histogram-test\""));
}

#[tokio::test]
async fn test_metrics_endpoints_served_when_enabled() {
    let mut config = ExplorerConfig::default();
    config.metrics.enabled = true;
    config.metrics.prometheus_prefix = PREFIX.to_string();
    let app = create_app(AppState::new(config));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/store/schema/decode")
                .header("content-type", "application/json")
                .body(Body::from(json!({ "schema": "0x00" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8_lossy(&body);
    assert!(text.contains("route=\"/v1/store/schema/decode\""));
    assert!(text.contains("status_code=\"400\""));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/metrics.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let families: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(
        families
            .as_array()
            .unwrap()
            .iter()
            .any(|f| f["name"] == "test_decode_errors")
    );
}

#[tokio::test]
async fn test_routes_are_labelled_by_matched_path_only() {
    let mut config = ExplorerConfig::default();
    config.metrics.enabled = true;
    config.metrics.prometheus_prefix = PREFIX.to_string();
    let app = create_app(AppState::new(config));

    for uri in ["/v1/version?verbose=1", "/no/such/route"] {
        app.clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
    }

    let metrics_text = metrics::gather_metrics().unwrap();
    assert!(metrics_text.contains("route=\"/v1/version\""));
    assert!(!metrics_text.contains("verbose"));
    assert!(!metrics_text.contains("/no/such/route"));
}

#[tokio::test]
async fn test_metrics_endpoints_absent_when_disabled() {
    let app = create_app(AppState::new(ExplorerConfig::default()));
    let response = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
