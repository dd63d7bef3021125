// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Type registry for store field types.
//!
//! A schema word carries one byte per field. The numbering follows the store
//! protocol's `SchemaType` enum:
//!
//! | Codes      | Type                                  |
//! |------------|---------------------------------------|
//! | `0..=31`   | `uint8` .. `uint256`                  |
//! | `32..=63`  | `int8` .. `int256`                    |
//! | `64..=95`  | `bytes1` .. `bytes32`                 |
//! | `96`       | `bool`                                |
//! | `97`       | `address`                             |
//! | `98`       | `bytes` (dynamic)                     |
//! | `99`       | `string` (dynamic)                    |
//! | `100..=197`| `T[]` for the static type `code - 100`|
//!
//! Everything above 197 is rejected.

use crate::error::{CodecError, Result};
use crate::value::{FieldValue, signed_from_be_slice};
use primitive_types::{H160, U256};
use serde::{Serialize, Serializer};
use std::fmt;

const UINT_BASE: u8 = 0;
const INT_BASE: u8 = 32;
const FIXED_BYTES_BASE: u8 = 64;
const BOOL_CODE: u8 = 96;
const ADDRESS_CODE: u8 = 97;
const BYTES_CODE: u8 = 98;
const STRING_CODE: u8 = 99;
const ARRAY_BASE: u8 = 100;
const LAST_ARRAY_CODE: u8 = ARRAY_BASE + ADDRESS_CODE;

/// Width of an `address` value in bytes.
pub const ADDRESS_WIDTH: usize = 20;

/// Widest numeric or fixed-bytes type in bytes.
pub const MAX_STATIC_WIDTH: u8 = 32;

/// A type whose encoded width is known from the type alone.
///
/// Numeric and fixed-bytes widths are in bytes and must lie in `1..=32`.
/// [`FieldType::from_code`] only produces such widths; hand-built types are
/// checked by [`StaticType::check`] and rejected by every decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaticType {
    Uint(u8),
    Int(u8),
    FixedBytes(u8),
    Bool,
    Address,
}

/// A type whose encoded length is carried in the record's length header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DynamicType {
    Bytes,
    String,
    Array(StaticType),
}

/// Whether a field has a fixed or a per-record width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Static,
    Dynamic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Static(StaticType),
    Dynamic(DynamicType),
}

impl StaticType {
    fn from_code(code: u8) -> Result<Self> {
        match code {
            0..=31 => Ok(StaticType::Uint(code - UINT_BASE + 1)),
            32..=63 => Ok(StaticType::Int(code - INT_BASE + 1)),
            64..=95 => Ok(StaticType::FixedBytes(code - FIXED_BYTES_BASE + 1)),
            BOOL_CODE => Ok(StaticType::Bool),
            ADDRESS_CODE => Ok(StaticType::Address),
            _ => Err(CodecError::UnknownFieldType(code)),
        }
    }

    /// Return `self` if its width is representable, `InvalidSchemaLayout`
    /// otherwise.
    pub fn check(self) -> Result<Self> {
        match self {
            StaticType::Uint(width) | StaticType::Int(width) | StaticType::FixedBytes(width)
                if width == 0 || width > MAX_STATIC_WIDTH =>
            {
                Err(CodecError::InvalidSchemaLayout(format!(
                    "{:?} has a width outside 1..={} bytes",
                    self, MAX_STATIC_WIDTH
                )))
            }
            _ => Ok(self),
        }
    }

    /// Type code. Out-of-range widths are clamped, see [`check`](Self::check).
    pub fn code(self) -> u8 {
        let offset = |width: u8| width.clamp(1, MAX_STATIC_WIDTH) - 1;
        match self {
            StaticType::Uint(width) => UINT_BASE + offset(width),
            StaticType::Int(width) => INT_BASE + offset(width),
            StaticType::FixedBytes(width) => FIXED_BYTES_BASE + offset(width),
            StaticType::Bool => BOOL_CODE,
            StaticType::Address => ADDRESS_CODE,
        }
    }

    pub fn byte_width(self) -> usize {
        match self {
            StaticType::Uint(width) | StaticType::Int(width) | StaticType::FixedBytes(width) => {
                width as usize
            }
            StaticType::Bool => 1,
            StaticType::Address => ADDRESS_WIDTH,
        }
    }

    /// Decode a natural-width slice of exactly [`byte_width`](Self::byte_width) bytes.
    pub fn decode(self, bytes: &[u8]) -> Result<FieldValue> {
        let width = self.check()?.byte_width();
        if bytes.len() != width {
            return Err(CodecError::TruncatedRecord {
                expected: width,
                actual: bytes.len(),
            });
        }
        Ok(match self {
            StaticType::Uint(_) => FieldValue::Uint(U256::from_big_endian(bytes)),
            StaticType::Int(_) => FieldValue::Int(signed_from_be_slice(bytes)),
            StaticType::Bool => FieldValue::Bool(bytes.iter().any(|b| *b != 0)),
            StaticType::Address => FieldValue::Address(H160::from_slice(bytes)),
            StaticType::FixedBytes(_) => FieldValue::FixedBytes(bytes.to_vec()),
        })
    }

    /// Decode a 32-byte key word by taking its low-order `byte_width` bytes.
    ///
    /// Bools look only at the lowest byte, addresses at the low 20 bytes and
    /// `bytesN` at the low N bytes. High-order bytes are ignored.
    pub fn decode_word(self, word: &[u8; 32]) -> Result<FieldValue> {
        let width = self.check()?.byte_width();
        self.decode(&word[word.len() - width..])
    }
}

impl DynamicType {
    pub fn code(self) -> u8 {
        match self {
            DynamicType::Bytes => BYTES_CODE,
            DynamicType::String => STRING_CODE,
            DynamicType::Array(element) => ARRAY_BASE + element.code(),
        }
    }

    /// Decode the payload of the dynamic field at `index` (the field's
    /// position in the whole record, used for error reporting).
    pub fn decode(self, index: usize, bytes: &[u8]) -> Result<FieldValue> {
        match self {
            DynamicType::Bytes => Ok(FieldValue::Bytes(bytes.to_vec())),
            DynamicType::String => std::str::from_utf8(bytes)
                .map(|s| FieldValue::String(s.to_string()))
                .map_err(|e| CodecError::InvalidUtf8 {
                    index,
                    reason: e.to_string(),
                }),
            DynamicType::Array(element) => {
                let element_width = element.check()?.byte_width();
                if bytes.len() % element_width != 0 {
                    return Err(CodecError::ArrayLengthNotAligned {
                        length: bytes.len(),
                        element_width,
                    });
                }
                bytes
                    .chunks_exact(element_width)
                    .map(|chunk| element.decode(chunk))
                    .collect::<Result<Vec<_>>>()
                    .map(FieldValue::Array)
            }
        }
    }
}

impl FieldType {
    /// Resolve a one-byte type code.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            BYTES_CODE => Ok(FieldType::Dynamic(DynamicType::Bytes)),
            STRING_CODE => Ok(FieldType::Dynamic(DynamicType::String)),
            ARRAY_BASE..=LAST_ARRAY_CODE => StaticType::from_code(code - ARRAY_BASE)
                .map(|element| FieldType::Dynamic(DynamicType::Array(element))),
            _ => StaticType::from_code(code).map(FieldType::Static),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            FieldType::Static(t) => t.code(),
            FieldType::Dynamic(t) => t.code(),
        }
    }

    pub fn category(self) -> Category {
        match self {
            FieldType::Static(_) => Category::Static,
            FieldType::Dynamic(_) => Category::Dynamic,
        }
    }

    /// Encoded width for static types, `None` for dynamic ones.
    pub fn byte_width(self) -> Option<usize> {
        match self {
            FieldType::Static(t) => Some(t.byte_width()),
            FieldType::Dynamic(_) => None,
        }
    }
}

impl fmt::Display for StaticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaticType::Uint(width) => write!(f, "uint{}", *width as usize * 8),
            StaticType::Int(width) => write!(f, "int{}", *width as usize * 8),
            StaticType::FixedBytes(width) => write!(f, "bytes{}", width),
            StaticType::Bool => f.write_str("bool"),
            StaticType::Address => f.write_str("address"),
        }
    }
}

impl fmt::Display for DynamicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DynamicType::Bytes => f.write_str("bytes"),
            DynamicType::String => f.write_str("string"),
            DynamicType::Array(element) => write!(f, "{}[]", element),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Static(t) => t.fmt(f),
            FieldType::Dynamic(t) => t.fmt(f),
        }
    }
}

/// Serialize as the type name, e.g. `"uint256"` or `"address[]"`
macro_rules! serialize_as_name {
    ($($ty:ty),*) => {
        $(
            impl Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    serializer.collect_str(self)
                }
            }
        )*
    };
}

serialize_as_name!(StaticType, DynamicType, FieldType);
