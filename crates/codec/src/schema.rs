// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Schema word decoding.
//!
//! A schema word is 32 bytes, most significant byte first:
//!
//! ```text
//! [0..2)   total static byte length (u16, big-endian)
//! [2]      number of static fields
//! [3]      number of dynamic fields
//! [4..32)  one type code per field, static fields first
//! ```
//!
//! A table's combined schema is its value word followed by its key word.

use crate::error::{CodecError, Result};
use crate::field_type::{DynamicType, FieldType, StaticType};
use serde::Serialize;

/// Size of one schema word in bytes.
pub const SCHEMA_WORD_SIZE: usize = 32;

/// Maximum number of fields one schema word can describe.
pub const MAX_FIELDS: usize = 28;

const HEADER_SIZE: usize = SCHEMA_WORD_SIZE - MAX_FIELDS;

/// One decoded schema word, either the key half or the value half of a table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaSide {
    static_fields: Vec<StaticType>,
    dynamic_fields: Vec<DynamicType>,
    static_data_length: usize,
}

impl SchemaSide {
    /// Build a side from explicit field lists, deriving the static length.
    ///
    /// Every static width, including array element widths, must lie in
    /// `1..=32` bytes.
    pub fn new(static_fields: Vec<StaticType>, dynamic_fields: Vec<DynamicType>) -> Result<Self> {
        if static_fields.len() + dynamic_fields.len() > MAX_FIELDS {
            return Err(CodecError::InvalidSchemaLayout(format!(
                "{} static and {} dynamic fields exceed the {} field capacity",
                static_fields.len(),
                dynamic_fields.len(),
                MAX_FIELDS
            )));
        }
        for field in &static_fields {
            field.check()?;
        }
        for field in &dynamic_fields {
            if let DynamicType::Array(element) = field {
                element.check()?;
            }
        }
        let static_data_length = static_fields.iter().map(|t| t.byte_width()).sum();
        Ok(Self {
            static_fields,
            dynamic_fields,
            static_data_length,
        })
    }

    /// Decode one schema word.
    ///
    /// An all-zero word decodes to an empty side, which is how the chain
    /// reports a table that has no registered schema.
    pub fn decode(word: &[u8]) -> Result<Self> {
        if word.len() < SCHEMA_WORD_SIZE {
            return Err(CodecError::TruncatedSchema {
                expected: SCHEMA_WORD_SIZE,
                actual: word.len(),
            });
        }

        let declared_length = u16::from_be_bytes([word[0], word[1]]) as usize;
        let static_count = word[2] as usize;
        let dynamic_count = word[3] as usize;

        if static_count + dynamic_count > MAX_FIELDS {
            return Err(CodecError::InvalidSchemaLayout(format!(
                "{} static and {} dynamic fields exceed the {} field capacity",
                static_count, dynamic_count, MAX_FIELDS
            )));
        }

        let codes = &word[HEADER_SIZE..HEADER_SIZE + static_count + dynamic_count];
        let (static_codes, dynamic_codes) = codes.split_at(static_count);

        let mut static_fields = Vec::with_capacity(static_count);
        for (i, code) in static_codes.iter().enumerate() {
            match FieldType::from_code(*code)? {
                FieldType::Static(t) => static_fields.push(t),
                FieldType::Dynamic(t) => {
                    return Err(CodecError::InvalidSchemaLayout(format!(
                        "static slot {} holds dynamic type {}",
                        i, t
                    )));
                }
            }
        }

        let mut dynamic_fields = Vec::with_capacity(dynamic_count);
        for (i, code) in dynamic_codes.iter().enumerate() {
            match FieldType::from_code(*code)? {
                FieldType::Dynamic(t) => dynamic_fields.push(t),
                FieldType::Static(t) => {
                    return Err(CodecError::InvalidSchemaLayout(format!(
                        "dynamic slot {} holds static type {}",
                        i, t
                    )));
                }
            }
        }

        let side = Self::new(static_fields, dynamic_fields)?;
        if side.static_data_length != declared_length {
            return Err(CodecError::SchemaLengthMismatch {
                declared: declared_length,
                computed: side.static_data_length,
            });
        }

        Ok(side)
    }

    pub fn static_fields(&self) -> &[StaticType] {
        &self.static_fields
    }

    pub fn dynamic_fields(&self) -> &[DynamicType] {
        &self.dynamic_fields
    }

    /// Total byte width of all static fields.
    pub fn static_data_length(&self) -> usize {
        self.static_data_length
    }

    /// Number of fields on this side, static and dynamic.
    pub fn len(&self) -> usize {
        self.static_fields.len() + self.dynamic_fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.static_fields.is_empty() && self.dynamic_fields.is_empty()
    }
}

/// Value and key schema of one table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    pub value_schema: SchemaSide,
    pub key_schema: SchemaSide,
}

impl Schema {
    /// Decode a combined schema: the value word followed by the key word.
    pub fn decode(raw: &[u8]) -> Result<Self> {
        let expected = 2 * SCHEMA_WORD_SIZE;
        if raw.len() < expected {
            return Err(CodecError::TruncatedSchema {
                expected,
                actual: raw.len(),
            });
        }
        if raw.len() > expected {
            return Err(CodecError::OversizedSchema {
                expected,
                actual: raw.len(),
            });
        }

        let (value_word, key_word) = raw.split_at(SCHEMA_WORD_SIZE);
        let schema = Self {
            value_schema: SchemaSide::decode(value_word)?,
            key_schema: SchemaSide::decode(key_word)?,
        };

        tracing::debug!(
            value_fields = schema.value_schema.len(),
            key_fields = schema.key_schema.len(),
            "Decoded table schema"
        );

        Ok(schema)
    }

    /// Decode a combined schema from hex, with or without a `0x` prefix.
    pub fn from_hex(raw: &str) -> Result<Self> {
        let bytes = decode_hex(raw)?;
        Self::decode(&bytes)
    }

    /// Decode a schema from its two separately fetched words.
    pub fn from_words(value_word: &[u8], key_word: &[u8]) -> Result<Self> {
        let mut raw = Vec::with_capacity(value_word.len() + key_word.len());
        raw.extend_from_slice(value_word);
        raw.extend_from_slice(key_word);
        Self::decode(&raw)
    }
}

/// Hex decoding shared by the `from_hex` constructors.
pub(crate) fn decode_hex(raw: &str) -> Result<Vec<u8>> {
    let hex_str = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .unwrap_or(raw);
    Ok(hex::decode(hex_str)?)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build a schema word from type codes, computing the static length from
    /// the registry.
    pub(crate) fn word(static_codes: &[u8], dynamic_codes: &[u8]) -> [u8; 32] {
        let static_length: usize = static_codes
            .iter()
            .map(|c| FieldType::from_code(*c).unwrap().byte_width().unwrap())
            .sum();
        word_with_length(static_length as u16, static_codes, dynamic_codes)
    }

    pub(crate) fn word_with_length(
        static_length: u16,
        static_codes: &[u8],
        dynamic_codes: &[u8],
    ) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[0..2].copy_from_slice(&static_length.to_be_bytes());
        word[2] = static_codes.len() as u8;
        word[3] = dynamic_codes.len() as u8;
        let mut offset = HEADER_SIZE;
        for code in static_codes.iter().chain(dynamic_codes) {
            word[offset] = *code;
            offset += 1;
        }
        word
    }

    #[test]
    fn test_all_zero_word_is_empty() {
        let side = SchemaSide::decode(&[0u8; 32]).unwrap();
        assert!(side.is_empty());
        assert!(side.static_fields().is_empty());
        assert!(side.dynamic_fields().is_empty());
        assert_eq!(side.static_data_length(), 0);
    }

    #[test]
    fn test_decode_static_and_dynamic_fields() {
        // uint256, address, bool | string, uint32[]
        let side = SchemaSide::decode(&word(&[31, 97, 96], &[99, 103])).unwrap();
        assert_eq!(
            side.static_fields(),
            &[StaticType::Uint(32), StaticType::Address, StaticType::Bool]
        );
        assert_eq!(
            side.dynamic_fields(),
            &[DynamicType::String, DynamicType::Array(StaticType::Uint(4))]
        );
        assert_eq!(side.static_data_length(), 53);
        assert!(!side.is_empty());
        assert_eq!(side.len(), 5);
    }

    #[test]
    fn test_static_length_must_match_field_widths() {
        let raw = word_with_length(52, &[31, 97, 96], &[]);
        assert_eq!(
            SchemaSide::decode(&raw),
            Err(CodecError::SchemaLengthMismatch {
                declared: 52,
                computed: 53
            })
        );
    }

    #[test]
    fn test_static_data_length_is_sum_of_widths() {
        for codes in [&[0u8][..], &[31, 31], &[64, 95, 97, 96], &[40, 12, 70]] {
            let side = SchemaSide::decode(&word(codes, &[])).unwrap();
            let sum: usize = side.static_fields().iter().map(|t| t.byte_width()).sum();
            assert_eq!(side.static_data_length(), sum);
        }
    }

    #[test]
    fn test_field_count_over_capacity() {
        let mut raw = [0u8; 32];
        raw[2] = 20;
        raw[3] = 9;
        assert!(matches!(
            SchemaSide::decode(&raw),
            Err(CodecError::InvalidSchemaLayout(_))
        ));
    }

    #[test]
    fn test_unknown_code_stops_decoding() {
        // 0xff sits between two valid static codes
        let raw = word_with_length(33, &[31, 0xff, 0], &[]);
        assert_eq!(
            SchemaSide::decode(&raw),
            Err(CodecError::UnknownFieldType(0xff))
        );

        let raw = word(&[], &[0xff]);
        assert_eq!(
            SchemaSide::decode(&raw),
            Err(CodecError::UnknownFieldType(0xff))
        );
    }

    #[test]
    fn test_category_must_match_slot() {
        let raw = word_with_length(0, &[99], &[]);
        assert!(matches!(
            SchemaSide::decode(&raw),
            Err(CodecError::InvalidSchemaLayout(_))
        ));

        let raw = word_with_length(0, &[], &[31]);
        assert!(matches!(
            SchemaSide::decode(&raw),
            Err(CodecError::InvalidSchemaLayout(_))
        ));
    }

    #[test]
    fn test_trailing_slots_are_ignored() {
        let mut raw = word(&[0], &[]);
        raw[31] = 0xff;
        let side = SchemaSide::decode(&raw).unwrap();
        assert_eq!(side.static_fields(), &[StaticType::Uint(1)]);
    }

    #[test]
    fn test_combined_schema_splits_value_then_key() {
        let value = word(&[31], &[99]);
        let key = word(&[97], &[]);
        let schema = Schema::from_words(&value, &key).unwrap();
        assert_eq!(schema.value_schema.static_fields(), &[StaticType::Uint(32)]);
        assert_eq!(schema.value_schema.dynamic_fields(), &[DynamicType::String]);
        assert_eq!(schema.key_schema.static_fields(), &[StaticType::Address]);

        let hex_str = format!("0x{}{}", hex::encode(value), hex::encode(key));
        assert_eq!(Schema::from_hex(&hex_str).unwrap(), schema);
    }

    #[test]
    fn test_hex_prefix_is_case_insensitive() {
        let raw = format!("{}{}", hex::encode(word(&[31], &[])), hex::encode([0u8; 32]));
        let lower = Schema::from_hex(&format!("0x{}", raw)).unwrap();
        assert_eq!(Schema::from_hex(&format!("0X{}", raw)).unwrap(), lower);
        assert_eq!(Schema::from_hex(&raw).unwrap(), lower);
    }

    #[test]
    fn test_new_rejects_out_of_range_widths() {
        assert!(matches!(
            SchemaSide::new(vec![StaticType::Uint(40)], vec![]),
            Err(CodecError::InvalidSchemaLayout(_))
        ));
        assert!(matches!(
            SchemaSide::new(vec![], vec![DynamicType::Array(StaticType::Uint(0))]),
            Err(CodecError::InvalidSchemaLayout(_))
        ));
        let side = SchemaSide::new(vec![StaticType::Int(32)], vec![DynamicType::Bytes]).unwrap();
        assert_eq!(side.static_data_length(), 32);
    }

    #[test]
    fn test_combined_schema_decode_is_idempotent() {
        let mut raw = word(&[31, 97], &[98]).to_vec();
        raw.extend_from_slice(&word(&[0, 64], &[]));
        assert_eq!(Schema::decode(&raw).unwrap(), Schema::decode(&raw).unwrap());
    }

    #[test]
    fn test_combined_schema_length_checks() {
        assert_eq!(
            Schema::decode(&[0u8; 63]),
            Err(CodecError::TruncatedSchema {
                expected: 64,
                actual: 63
            })
        );
        assert_eq!(
            Schema::decode(&[0u8; 65]),
            Err(CodecError::OversizedSchema {
                expected: 64,
                actual: 65
            })
        );
        assert!(matches!(
            Schema::from_hex("0xzz"),
            Err(CodecError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_schema_serialization() {
        let schema = Schema::from_words(&word(&[31, 97], &[99]), &word(&[], &[])).unwrap();
        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(
            json["valueSchema"]["staticFields"],
            serde_json::json!(["uint256", "address"])
        );
        assert_eq!(json["valueSchema"]["dynamicFields"], serde_json::json!(["string"]));
        assert_eq!(json["valueSchema"]["staticDataLength"], 52);
        assert_eq!(json["keySchema"]["staticFields"], serde_json::json!([]));
    }
}
