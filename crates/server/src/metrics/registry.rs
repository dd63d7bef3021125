// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use lazy_static::lazy_static;
use prometheus::proto::MetricFamily;
use prometheus::{Counter, Encoder, HistogramOpts, HistogramVec, Registry, TextEncoder};
use std::sync::{Mutex, Once};
use thiserror::Error;

lazy_static! {
    pub static ref REGISTRY: Mutex<Option<Registry>> = Mutex::new(None);
    static ref INIT_ONCE: Once = Once::new();

    // Counter metrics - created without registering to default registry
    pub static ref HTTP_REQUESTS: Counter = Counter::new(
        "http_requests",
        "Total number of HTTP requests"
    )
    .expect("Failed to create http_requests counter");

    pub static ref HTTP_REQUEST_SUCCESS: Counter = Counter::new(
        "http_request_success",
        "Number of successful HTTP requests"
    )
    .expect("Failed to create http_request_success counter");

    pub static ref HTTP_REQUEST_ERROR: Counter = Counter::new(
        "http_request_error",
        "Number of HTTP request errors"
    )
    .expect("Failed to create http_request_error counter");

    pub static ref RECORDS_DECODED: Counter = Counter::new(
        "records_decoded",
        "Number of store records decoded"
    )
    .expect("Failed to create records_decoded counter");

    pub static ref DECODE_ERRORS: Counter = Counter::new(
        "decode_errors",
        "Number of schema, record or metadata decode failures"
    )
    .expect("Failed to create decode_errors counter");

    // Histogram metrics - created without registering to default registry
    pub static ref REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "request_duration_seconds",
            "Duration of HTTP requests in seconds"
        ).buckets(vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 2.0]),
        &["method", "route", "status_code"]
    )
    .expect("Failed to create request_duration_seconds histogram");

    pub static ref RESPONSE_SIZE_BYTES: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "response_size_bytes",
            "Size of HTTP responses in bytes"
        ).buckets(vec![100.0, 500.0, 1000.0, 5000.0, 10000.0, 50000.0, 100000.0, 500000.0, 1000000.0, 5000000.0]),
        &["method", "route", "status_code"]
    )
    .expect("Failed to create response_size_bytes histogram");

    pub static ref RECORDS_PER_REQUEST: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "records_per_request",
            "Number of records decoded per request"
        ).buckets(vec![1.0, 5.0, 10.0, 50.0, 100.0, 500.0, 1000.0, 5000.0]),
        &["route"]
    )
    .expect("Failed to create records_per_request histogram");
}

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Metrics not initialized - call init() first")]
    NotInitialized,

    #[error("Metrics registry lock poisoned")]
    Poisoned,

    #[error("Failed to encode metrics: {0}")]
    Encode(#[from] prometheus::Error),

    #[error("Encoded metrics are not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Initialize metrics by registering them with the custom registry
pub fn init(prefix: &str) {
    // Only initialize once
    INIT_ONCE.call_once(|| {
        let prefix = (!prefix.is_empty()).then(|| prefix.to_string());
        let registry = match Registry::new_custom(prefix, None) {
            Ok(registry) => registry,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create Prometheus registry");
                return;
            }
        };

        let collectors: [(&str, Box<dyn prometheus::core::Collector>); 8] = [
            ("http_requests", Box::new(HTTP_REQUESTS.clone())),
            ("http_request_success", Box::new(HTTP_REQUEST_SUCCESS.clone())),
            ("http_request_error", Box::new(HTTP_REQUEST_ERROR.clone())),
            ("records_decoded", Box::new(RECORDS_DECODED.clone())),
            ("decode_errors", Box::new(DECODE_ERRORS.clone())),
            ("request_duration_seconds", Box::new(REQUEST_DURATION_SECONDS.clone())),
            ("response_size_bytes", Box::new(RESPONSE_SIZE_BYTES.clone())),
            ("records_per_request", Box::new(RECORDS_PER_REQUEST.clone())),
        ];
        for (name, collector) in collectors {
            if let Err(e) = registry.register(collector) {
                tracing::error!(metric = name, error = %e, "Failed to register metric");
            }
        }

        if let Ok(mut slot) = REGISTRY.lock() {
            *slot = Some(registry);
        }
    });
}

/// Gather all metric families from the initialized registry
pub fn gather_metric_families() -> Result<Vec<MetricFamily>, MetricsError> {
    let registry_guard = REGISTRY.lock().map_err(|_| MetricsError::Poisoned)?;
    let registry = registry_guard.as_ref().ok_or(MetricsError::NotInitialized)?;
    Ok(registry.gather())
}

/// Gather all metrics as Prometheus text format
pub fn gather_metrics() -> Result<String, MetricsError> {
    let metric_families = gather_metric_families()?;
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Count records decoded by one request. Counters exist even when metrics are
/// disabled; they are only exported once [`init`] has run.
pub fn record_decoded(route: &str, records: usize) {
    RECORDS_DECODED.inc_by(records as f64);
    RECORDS_PER_REQUEST
        .with_label_values(&[route])
        .observe(records as f64);
}

/// Count one schema, record or field-name decode failure.
pub fn record_decode_error() {
    DECODE_ERRORS.inc();
}
