// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use serde_json::json;
use store_codec::{CodecError, Schema, SchemaSide};
use thiserror::Error;

use crate::metrics;
use crate::types::HexBytes;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Codec(#[from] CodecError),

    #[error("Schema not found for table")]
    SchemaNotFound,

    #[error("Missing schema: provide `schema` or both `valueSchema` and `keySchema`")]
    MissingSchema,

    #[error("Provide either `schema` or `valueSchema` and `keySchema`, not both")]
    ConflictingSchema,

    #[error("Provide either `fieldNames` or `rawFieldNames`, not both")]
    ConflictingFieldNames,

    #[error("Too many records: {actual} exceeds the limit of {limit}")]
    TooManyRecords { limit: usize, actual: usize },
}

impl IntoResponse for StoreError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            StoreError::SchemaNotFound => StatusCode::NOT_FOUND,
            StoreError::Codec(_)
            | StoreError::MissingSchema
            | StoreError::ConflictingSchema
            | StoreError::ConflictingFieldNames
            | StoreError::TooManyRecords { .. } => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Wrap a codec failure and count it in the decode error metric.
pub fn decode_failed(err: CodecError) -> StoreError {
    metrics::record_decode_error();
    StoreError::Codec(err)
}

/// Build a schema from either the combined hex or the two separate words.
pub fn resolve_schema(
    schema: Option<&HexBytes>,
    value_schema: Option<&HexBytes>,
    key_schema: Option<&HexBytes>,
) -> Result<Schema, StoreError> {
    match (schema, value_schema, key_schema) {
        (Some(combined), None, None) => Schema::decode(combined.as_bytes()).map_err(decode_failed),
        (None, Some(value), Some(key)) => {
            Schema::from_words(value.as_bytes(), key.as_bytes()).map_err(decode_failed)
        }
        (Some(_), _, _) => Err(StoreError::ConflictingSchema),
        (None, _, _) => Err(StoreError::MissingSchema),
    }
}

/// One side of a decoded schema as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaSideResponse {
    pub static_fields: Vec<String>,
    pub dynamic_fields: Vec<String>,
    pub static_data_length: usize,
    pub is_empty: bool,
}

impl From<&SchemaSide> for SchemaSideResponse {
    fn from(side: &SchemaSide) -> Self {
        Self {
            static_fields: side.static_fields().iter().map(|t| t.to_string()).collect(),
            dynamic_fields: side.dynamic_fields().iter().map(|t| t.to_string()).collect(),
            static_data_length: side.static_data_length(),
            is_empty: side.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaResponse {
    pub value_schema: SchemaSideResponse,
    pub key_schema: SchemaSideResponse,
}

impl From<&Schema> for SchemaResponse {
    fn from(schema: &Schema) -> Self {
        Self {
            value_schema: SchemaSideResponse::from(&schema.value_schema),
            key_schema: SchemaSideResponse::from(&schema.key_schema),
        }
    }
}
