// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Key tuple and record value decoding.
//!
//! A record value is laid out as:
//!
//! ```text
//! static data | length header (only with dynamic fields) | dynamic payloads
//! ```
//!
//! The length header holds one big-endian `u32` per dynamic field, in declared
//! order, followed directly by the payloads in the same order.

use crate::error::{CodecError, Result};
use crate::schema::{Schema, SchemaSide};
use crate::value::FieldValue;
use primitive_types::H256;
use serde::Serialize;
use std::collections::BTreeMap;

/// Width of one dynamic field length entry in the record header.
pub const DYNAMIC_LENGTH_WIDTH: usize = 4;

/// Field position to decoded value, in schema order.
pub type IndexedValues = BTreeMap<usize, FieldValue>;

/// A record as returned by the fetch layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTableRecord {
    pub key_tuple: Vec<H256>,
    pub value: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedRecord {
    pub indexed_key: IndexedValues,
    pub indexed_values: IndexedValues,
}

/// Decode a key tuple. Each word holds one static key field in its
/// low-order bytes.
pub fn decode_key_tuple(key_schema: &SchemaSide, key_tuple: &[H256]) -> Result<IndexedValues> {
    if !key_schema.dynamic_fields().is_empty() {
        return Err(CodecError::DynamicKeyFieldUnsupported(
            key_schema.dynamic_fields().len(),
        ));
    }

    let fields = key_schema.static_fields();
    if key_tuple.len() != fields.len() {
        return Err(CodecError::KeyArityMismatch {
            expected: fields.len(),
            actual: key_tuple.len(),
        });
    }

    fields
        .iter()
        .zip(key_tuple)
        .enumerate()
        .map(|(i, (field, word))| {
            field
                .decode_word(word.as_fixed_bytes())
                .map(|value| (i, value))
        })
        .collect()
}

/// Decode a record value blob.
pub fn decode_value(value_schema: &SchemaSide, value: &[u8]) -> Result<IndexedValues> {
    let static_length = value_schema.static_data_length();
    if value.len() < static_length {
        return Err(CodecError::TruncatedRecord {
            expected: static_length,
            actual: value.len(),
        });
    }

    let mut decoded = IndexedValues::new();
    let mut offset = 0;
    for (i, field) in value_schema.static_fields().iter().enumerate() {
        let width = field.byte_width();
        decoded.insert(i, field.decode(&value[offset..offset + width])?);
        offset += width;
    }

    let dynamic_fields = value_schema.dynamic_fields();
    if !dynamic_fields.is_empty() {
        let header_length = dynamic_fields.len() * DYNAMIC_LENGTH_WIDTH;
        let header = value
            .get(offset..offset + header_length)
            .ok_or(CodecError::DynamicHeaderTruncated {
                expected: header_length,
                actual: value.len() - offset,
            })?;
        offset += header_length;

        let static_count = value_schema.static_fields().len();
        for (i, (field, entry)) in dynamic_fields
            .iter()
            .zip(header.chunks_exact(DYNAMIC_LENGTH_WIDTH))
            .enumerate()
        {
            let index = static_count + i;
            let length = u32::from_be_bytes([entry[0], entry[1], entry[2], entry[3]]) as usize;
            let remaining = value.len() - offset;
            if length > remaining {
                return Err(CodecError::DynamicPayloadTruncated {
                    index,
                    expected: length,
                    actual: remaining,
                });
            }
            decoded.insert(index, field.decode(index, &value[offset..offset + length])?);
            offset += length;
        }
    }

    if offset < value.len() {
        tracing::warn!(
            expected = offset,
            actual = value.len(),
            "Record value has trailing bytes beyond its schema, ignoring them"
        );
    }

    Ok(decoded)
}

/// Decode one record against its table schema.
pub fn decode_record(schema: &Schema, record: &RawTableRecord) -> Result<DecodedRecord> {
    Ok(DecodedRecord {
        indexed_key: decode_key_tuple(&schema.key_schema, &record.key_tuple)?,
        indexed_values: decode_value(&schema.value_schema, &record.value)?,
    })
}
