// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{
    Json,
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use prometheus::proto::{Metric, MetricFamily};
use serde_json::{Map, Value, json};

use crate::metrics::{MetricsError, gather_metric_families, gather_metrics};

fn metrics_error(e: MetricsError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": format!("Failed to gather metrics: {}", e) })),
    )
        .into_response()
}

/// Handler for Prometheus metrics endpoint (text format)
pub async fn get_metrics() -> Response {
    match gather_metrics() {
        Ok(metrics) => (
            StatusCode::OK,
            [(CONTENT_TYPE, "text/plain; version=0.0.4")],
            metrics,
        )
            .into_response(),
        Err(e) => metrics_error(e),
    }
}

fn metric_value(metric: &Metric) -> Value {
    if metric.has_counter() {
        json!(metric.get_counter().get_value())
    } else if metric.has_gauge() {
        json!(metric.get_gauge().get_value())
    } else if metric.has_histogram() {
        let h = metric.get_histogram();
        json!({
            "sample_count": h.get_sample_count(),
            "sample_sum": h.get_sample_sum(),
        })
    } else {
        Value::Null
    }
}

fn family_to_json(family: &MetricFamily) -> Value {
    let metrics: Vec<Value> = family
        .get_metric()
        .iter()
        .map(|metric| {
            let labels: Map<String, Value> = metric
                .get_label()
                .iter()
                .map(|l| (l.get_name().to_string(), json!(l.get_value())))
                .collect();
            json!({ "labels": labels, "value": metric_value(metric) })
        })
        .collect();

    json!({
        "name": family.get_name(),
        "help": family.get_help(),
        "type": format!("{:?}", family.get_field_type()),
        "metrics": metrics,
    })
}

/// Handler for metrics in JSON format
pub async fn get_metrics_json() -> Response {
    match gather_metric_families() {
        Ok(families) => {
            let body: Vec<Value> = families.iter().map(family_to_json).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => metrics_error(e),
    }
}
