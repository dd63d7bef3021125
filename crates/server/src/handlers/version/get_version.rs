// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResponse {
    pub version: String,
}

#[utoipa::path(
    get,
    path = "/v1/version",
    tag = "version",
    summary = "API version",
    description = "Returns the version of the running store explorer.",
    responses(
        (status = 200, description = "Version information", body = Object)
    )
)]
pub async fn get_version() -> (StatusCode, Json<VersionResponse>) {
    let response = VersionResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
