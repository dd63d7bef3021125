// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Deserialize;

use super::common::{SchemaResponse, StoreError, resolve_schema};
use crate::extractors::JsonBody;
use crate::types::HexBytes;
use axum::Json;

/// Request body for schema decoding.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DecodeSchemaRequest {
    /// Combined 64-byte schema: value word followed by key word.
    pub schema: Option<HexBytes>,
    pub value_schema: Option<HexBytes>,
    pub key_schema: Option<HexBytes>,
}

#[utoipa::path(
    post,
    path = "/v1/store/schema/decode",
    tag = "store",
    summary = "Decode table schema",
    description = "Decodes a raw table schema, given either as the combined 64-byte value+key words or as the two 32-byte words separately, into field types and the static data length of each side.",
    request_body(content = Object, description = "Either `schema` (combined hex) or `valueSchema` and `keySchema`"),
    responses(
        (status = 200, description = "Decoded schema", body = Object),
        (status = 400, description = "Malformed schema"),
        (status = 422, description = "Invalid request body")
    )
)]
pub async fn decode_schema(
    JsonBody(body): JsonBody<DecodeSchemaRequest>,
) -> Result<Json<SchemaResponse>, StoreError> {
    let schema = resolve_schema(
        body.schema.as_ref(),
        body.value_schema.as_ref(),
        body.key_schema.as_ref(),
    )?;

    if schema.value_schema.is_empty() {
        tracing::warn!("Decoded schema has an empty value side; the table is probably not registered");
    }

    Ok(Json(SchemaResponse::from(&schema)))
}
