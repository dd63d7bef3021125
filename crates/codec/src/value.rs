// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Decoded field values and their textual forms.
//!
//! Numbers are rendered as decimal strings (they can exceed the JSON safe
//! integer range), addresses and byte values as `0x`-prefixed lowercase hex.

use primitive_types::{H160, U256};
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use std::fmt;

pub use alloy_primitives::I256;

/// Build a signed value from a big-endian two's complement slice of 1 to 32
/// bytes, sign-extending from the slice's top bit.
pub fn signed_from_be_slice(bytes: &[u8]) -> I256 {
    let negative = bytes.first().is_some_and(|b| b & 0x80 != 0);
    let mut word = if negative { [0xffu8; 32] } else { [0u8; 32] };
    let len = bytes.len().min(32);
    word[32 - len..].copy_from_slice(&bytes[bytes.len() - len..]);
    I256::from_raw(alloy_primitives::U256::from_be_bytes(word))
}

/// One decoded field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Uint(U256),
    Int(I256),
    Bool(bool),
    Address(H160),
    FixedBytes(Vec<u8>),
    Bytes(Vec<u8>),
    String(String),
    Array(Vec<FieldValue>),
}

impl FieldValue {
    pub fn is_address(&self) -> bool {
        matches!(self, FieldValue::Address(_))
    }
}

fn hex_with_prefix(data: &[u8]) -> String {
    format!("0x{}", hex::encode(data))
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Uint(v) => write!(f, "{}", v),
            FieldValue::Int(v) => write!(f, "{}", v),
            FieldValue::Bool(v) => write!(f, "{}", v),
            FieldValue::Address(addr) => f.write_str(&hex_with_prefix(addr.as_bytes())),
            FieldValue::FixedBytes(bytes) | FieldValue::Bytes(bytes) => {
                f.write_str(&hex_with_prefix(bytes))
            }
            FieldValue::String(s) => f.write_str(s),
            FieldValue::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FieldValue::Bool(v) => serializer.serialize_bool(*v),
            FieldValue::String(s) => serializer.serialize_str(s),
            FieldValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            other => serializer.serialize_str(&other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_signed_sign_extends_narrow_slices() {
        assert_eq!(signed_from_be_slice(&[0xff]).to_string(), "-1");
        assert_eq!(signed_from_be_slice(&[0x80, 0x00]).to_string(), "-32768");
        assert_eq!(signed_from_be_slice(&[0x7f]).to_string(), "127");
        assert_eq!(I256::try_from(-42i64).unwrap(), signed_from_be_slice(&[0xd6]));
    }

    #[test]
    fn test_signed_full_width_extremes() {
        let mut min = [0u8; 32];
        min[0] = 0x80;
        assert_eq!(signed_from_be_slice(&min), I256::MIN);
        assert_eq!(signed_from_be_slice(&[0xff; 32]), I256::MINUS_ONE);
    }

    #[test]
    fn test_is_address() {
        assert!(FieldValue::Address(H160::zero()).is_address());
        assert!(!FieldValue::FixedBytes(vec![0u8; 20]).is_address());
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::Uint(U256::from(42u64)).to_string(), "42");
        assert_eq!(
            FieldValue::Address(H160::repeat_byte(0xab)).to_string(),
            "0xabababababababababababababababababababab"
        );
        assert_eq!(FieldValue::Bytes(vec![0x01, 0xff]).to_string(), "0x01ff");
        let array = FieldValue::Array(vec![FieldValue::Bool(true), FieldValue::Bool(false)]);
        assert_eq!(array.to_string(), "[true, false]");
    }

    #[test]
    fn test_field_value_serialization() {
        let value = FieldValue::Array(vec![
            FieldValue::Uint(U256::from(7u64)),
            FieldValue::Int(I256::try_from(-7i64).unwrap()),
        ]);
        assert_eq!(serde_json::to_value(&value).unwrap(), json!(["7", "-7"]));
        assert_eq!(
            serde_json::to_value(FieldValue::Bool(true)).unwrap(),
            json!(true)
        );
        assert_eq!(
            serde_json::to_value(FieldValue::String("hello".into())).unwrap(),
            json!("hello")
        );
    }
}
