// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{
    extract::{MatchedPath, Request},
    http::{StatusCode, header::CONTENT_LENGTH},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

/// HTTP logger middleware that logs request method, path, status code, and duration.
///
/// - DEBUG (target: http) for 2xx/3xx responses
/// - WARN for 4xx responses, which includes every decode failure
/// - ERROR for 5xx responses
///
/// Log format: "METHOD /path STATUS DURATIONms"
/// Example: "POST /v1/store/records/decode 200 3ms"
pub async fn http_logger_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = match req.uri().query() {
        Some(q) => format!("{}?{}", req.uri().path(), q),
        None => req.uri().path().to_string(),
    };
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());
    let body_bytes = req
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0);
    let start = Instant::now();

    let response = next.run(req).await;

    let duration_ms = start.elapsed().as_millis();
    let status = response.status();

    macro_rules! log_request {
        ($level:ident) => {
            tracing::$level!(
                target: "http",
                method = %method,
                path = %path,
                route = %route,
                status = status.as_u16(),
                body_bytes,
                duration_ms,
                "{} {} {} {}ms",
                method,
                path,
                status.as_u16(),
                duration_ms
            )
        };
    }

    let level = level_for(status);
    if level == tracing::Level::ERROR {
        log_request!(error);
    } else if level == tracing::Level::WARN {
        log_request!(warn);
    } else {
        log_request!(debug);
    }

    response
}

fn level_for(status: StatusCode) -> tracing::Level {
    if status.is_server_error() {
        tracing::Level::ERROR
    } else if status.is_client_error() {
        tracing::Level::WARN
    } else {
        tracing::Level::DEBUG
    }
}
