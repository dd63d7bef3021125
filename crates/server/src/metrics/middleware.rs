// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{
    body::Body,
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use http_body_util::BodyExt;
use std::time::Instant;

use super::registry::{
    HTTP_REQUEST_ERROR, HTTP_REQUEST_SUCCESS, HTTP_REQUESTS, REQUEST_DURATION_SECONDS,
    RESPONSE_SIZE_BYTES,
};

/// Route label for requests that matched no route, so unknown paths do not
/// create new label values.
const UNMATCHED_ROUTE: &str = "unmatched";

/// Metrics middleware for tracking HTTP requests, labelled by matched route
pub async fn metrics_middleware(
    matched_path: Option<MatchedPath>,
    req: Request,
    next: Next,
) -> Response {
    // Skip metrics endpoints themselves
    let path = req.uri().path();
    if path == "/metrics" || path == "/metrics.json" {
        return next.run(req).await;
    }

    HTTP_REQUESTS.inc();
    let start = Instant::now();

    let method = req.method().to_string();
    let route = matched_path
        .as_ref()
        .map_or(UNMATCHED_ROUTE, MatchedPath::as_str)
        .to_string();

    let response = next.run(req).await;

    let duration = start.elapsed().as_secs_f64();
    let status = response.status();
    let status_code = status.as_u16().to_string();

    if status.is_client_error() || status.is_server_error() {
        HTTP_REQUEST_ERROR.inc();
    } else if status.is_success() {
        HTTP_REQUEST_SUCCESS.inc();
    }

    REQUEST_DURATION_SECONDS
        .with_label_values(&[&method, &route, &status_code])
        .observe(duration);

    // Collect the response body to measure its size
    let (parts, body) = response.into_parts();
    let bytes = body
        .collect()
        .await
        .map(|collected| collected.to_bytes())
        .unwrap_or_default();
    if !bytes.is_empty() {
        RESPONSE_SIZE_BYTES
            .with_label_values(&[&method, &route, &status_code])
            .observe(bytes.len() as f64);
    }

    Response::from_parts(parts, Body::from(bytes))
}
