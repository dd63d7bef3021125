// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Schema-driven decoding of on-chain store tables.
//!
//! A table publishes two 32-byte schema words (value and key). Once decoded
//! into a [`Schema`], they drive decoding of each record's key tuple and value
//! blob into positional [`FieldValue`]s. Every function here is pure: no I/O,
//! no caching, and every malformed input is reported as a [`CodecError`].
//!
//! ```
//! use store_codec::{decode_record, decode_schema, FieldValue, RawTableRecord};
//!
//! // value schema: one uint8 field; key schema: one bool field
//! let mut raw = vec![0u8; 64];
//! raw[1] = 1; // static length
//! raw[2] = 1; // static field count
//! raw[4] = 0; // uint8
//! raw[33] = 1;
//! raw[34] = 1;
//! raw[36] = 96; // bool
//!
//! let schema = decode_schema(&raw)?;
//! let mut word = [0u8; 32];
//! word[31] = 1;
//! let record = RawTableRecord { key_tuple: vec![word.into()], value: vec![7] };
//! let decoded = decode_record(&schema, &record)?;
//! assert_eq!(decoded.indexed_key[&0], FieldValue::Bool(true));
//! assert_eq!(decoded.indexed_values[&0].to_string(), "7");
//! # Ok::<(), store_codec::CodecError>(())
//! ```

pub mod error;
pub mod field_names;
pub mod field_type;
pub mod record;
pub mod schema;
pub mod table_id;
pub mod value;

pub use error::{CodecError, Result};
pub use field_names::decode_field_names;
pub use field_type::{Category, DynamicType, FieldType, StaticType};
pub use record::{
    DYNAMIC_LENGTH_WIDTH, DecodedRecord, IndexedValues, RawTableRecord, decode_key_tuple,
    decode_record, decode_value,
};
pub use schema::{MAX_FIELDS, SCHEMA_WORD_SIZE, Schema, SchemaSide};
pub use table_id::TableId;
pub use value::{FieldValue, I256};

pub use primitive_types::{H160, H256, U256};

/// Decode a combined raw schema (value word followed by key word).
pub fn decode_schema(raw: &[u8]) -> Result<Schema> {
    Schema::decode(raw)
}
