// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Instant;

use crate::state::AppState;

static STARTED_AT: OnceLock<Instant> = OnceLock::new();

/// Mark the process start; called once from `main` before serving.
pub fn mark_started() {
    STARTED_AT.get_or_init(Instant::now);
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Seconds since the server started, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<u64>,
}

#[utoipa::path(
    get,
    path = "/v1/health",
    tag = "health",
    summary = "Health check",
    description = "Returns the health status of the API service.",
    responses(
        (status = 200, description = "Service is healthy", body = Object)
    )
)]
pub async fn get_health(State(_state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "ok".to_string(),
        uptime: STARTED_AT.get().map(|started| started.elapsed().as_secs()),
    };

    (StatusCode::OK, Json(response))
}
