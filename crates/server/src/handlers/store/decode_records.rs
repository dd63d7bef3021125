// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use store_codec::{
    FieldValue, IndexedValues, RawTableRecord, Schema, TableId, decode_field_names, decode_record,
};

use super::common::{SchemaResponse, StoreError, decode_failed, resolve_schema};
use crate::extractors::JsonBody;
use crate::metrics;
use crate::state::AppState;
use crate::types::{HexBytes, KeyWord};

const ROUTE: &str = "/v1/store/records/decode";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableRef {
    pub namespace: String,
    pub name: String,
}

/// One record as fetched from the chain.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RecordInput {
    pub key_tuple: Vec<KeyWord>,
    pub value: HexBytes,
}

impl From<RecordInput> for RawTableRecord {
    fn from(record: RecordInput) -> Self {
        RawTableRecord {
            key_tuple: record.key_tuple.into_iter().map(KeyWord::into_inner).collect(),
            value: record.value.into_inner(),
        }
    }
}

/// Request body for record decoding.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DecodeRecordsRequest {
    pub schema: Option<HexBytes>,
    pub value_schema: Option<HexBytes>,
    pub key_schema: Option<HexBytes>,
    pub table: Option<TableRef>,
    /// Value field names, already decoded.
    pub field_names: Option<Vec<String>>,
    /// Value field names as the ABI-encoded `string[]` stored on chain.
    pub raw_field_names: Option<HexBytes>,
    #[serde(default)]
    pub records: Vec<RecordInput>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedField {
    pub name: String,
    pub value: FieldValue,
    /// Lets clients render the value as an account link.
    pub is_address: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordResponse {
    pub indexed_key: IndexedValues,
    pub indexed_values: IndexedValues,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<NamedField>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeRecordsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
    pub schema: SchemaResponse,
    pub field_names: Vec<String>,
    pub key_headers: Vec<String>,
    pub records: Vec<RecordResponse>,
}

fn resolve_field_names(
    field_names: Option<Vec<String>>,
    raw_field_names: Option<&HexBytes>,
) -> Result<Vec<String>, StoreError> {
    match (field_names, raw_field_names) {
        (Some(_), Some(_)) => Err(StoreError::ConflictingFieldNames),
        (Some(names), None) => Ok(names),
        (None, Some(raw)) => decode_field_names(raw.as_bytes()).map_err(decode_failed),
        (None, None) => Ok(Vec::new()),
    }
}

/// Column headers for the key tuple: "Key 0", "Key 1", ...
pub fn key_headers(schema: &Schema) -> Vec<String> {
    (0..schema.key_schema.len())
        .map(|i| format!("Key {}", i))
        .collect()
}

/// Zip value field names with values by position. Extra names or values
/// are dropped.
fn named_fields(field_names: &[String], values: &IndexedValues) -> Vec<NamedField> {
    field_names
        .iter()
        .zip(values.values())
        .map(|(name, value)| NamedField {
            name: name.clone(),
            value: value.clone(),
            is_address: value.is_address(),
        })
        .collect()
}

#[utoipa::path(
    post,
    path = "/v1/store/records/decode",
    tag = "store",
    summary = "Decode table records",
    description = "Decodes raw records of one table against its schema. Every record must decode or the request fails; no partial output is returned.",
    request_body(content = Object, description = "Schema (`schema` or `valueSchema` + `keySchema`), optional `table`, optional `fieldNames` or `rawFieldNames`, and `records` of `{keyTuple, value}`"),
    responses(
        (status = 200, description = "Decoded records", body = Object),
        (status = 400, description = "Malformed schema or record, or too many records"),
        (status = 404, description = "Schema not found for table"),
        (status = 422, description = "Invalid request body")
    )
)]
pub async fn decode_records(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<DecodeRecordsRequest>,
) -> Result<Json<DecodeRecordsResponse>, StoreError> {
    let limit = state.config.codec.max_records;
    if body.records.len() > limit {
        return Err(StoreError::TooManyRecords {
            limit,
            actual: body.records.len(),
        });
    }

    let table = body
        .table
        .map(|t| TableId::new(t.namespace, t.name))
        .transpose()
        .map_err(decode_failed)?;

    let schema = resolve_schema(
        body.schema.as_ref(),
        body.value_schema.as_ref(),
        body.key_schema.as_ref(),
    )?;
    if schema.value_schema.is_empty() {
        return Err(StoreError::SchemaNotFound);
    }

    let field_names = resolve_field_names(body.field_names, body.raw_field_names.as_ref())?;

    let records = body
        .records
        .into_iter()
        .map(|record| {
            let decoded =
                decode_record(&schema, &RawTableRecord::from(record)).map_err(decode_failed)?;
            let fields =
                (!field_names.is_empty()).then(|| named_fields(&field_names, &decoded.indexed_values));
            Ok(RecordResponse {
                indexed_key: decoded.indexed_key,
                indexed_values: decoded.indexed_values,
                fields,
            })
        })
        .collect::<Result<Vec<_>, StoreError>>()?;

    metrics::record_decoded(ROUTE, records.len());
    let table_label = table.as_ref().map(|t| t.to_string());
    tracing::debug!(
        table = ?table_label,
        records = records.len(),
        "Decoded table records"
    );

    Ok(Json(DecodeRecordsResponse {
        table: table_label,
        table_id: table.as_ref().map(|t| t.to_hex()),
        schema: SchemaResponse::from(&schema),
        field_names,
        key_headers: key_headers(&schema),
        records,
    }))
}
