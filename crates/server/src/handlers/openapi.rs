// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::response::Json;
use utoipa::OpenApi;

use crate::openapi::ApiDoc;

#[utoipa::path(
    get,
    path = "/v1/openapi.json",
    tag = "version",
    summary = "OpenAPI document",
    description = "Returns the OpenAPI 3 description of every versioned endpoint.",
    responses(
        (status = 200, description = "OpenAPI document", body = Object)
    )
)]
pub async fn get_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
