// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{CodecError, Result};
use crate::schema::decode_hex;
use std::fmt;

const COMPONENT_SIZE: usize = 16;

/// Identifier of a store table: a 16-byte namespace followed by a 16-byte
/// name, each right-padded with zero bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableId {
    namespace: String,
    name: String,
}

impl TableId {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let namespace = namespace.into();
        let name = name.into();
        for component in [&namespace, &name] {
            if component.len() > COMPONENT_SIZE {
                return Err(CodecError::TableIdTooLong(component.clone()));
            }
        }
        Ok(Self { namespace, name })
    }

    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self> {
        let (namespace, name) = bytes.split_at(COMPONENT_SIZE);
        Ok(Self {
            namespace: unpad(0, namespace)?,
            name: unpad(1, name)?,
        })
    }

    pub fn from_hex(raw: &str) -> Result<Self> {
        let bytes = decode_hex(raw)?;
        let bytes: [u8; 32] = bytes.as_slice().try_into().map_err(|_| {
            CodecError::InvalidHex(format!("Expected 32 bytes, got {}", bytes.len()))
        })?;
        Self::from_bytes(&bytes)
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        bytes[..self.namespace.len()].copy_from_slice(self.namespace.as_bytes());
        bytes[COMPONENT_SIZE..COMPONENT_SIZE + self.name.len()]
            .copy_from_slice(self.name.as_bytes());
        bytes
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.to_bytes()))
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn unpad(index: usize, component: &[u8]) -> Result<String> {
    let end = component
        .iter()
        .rposition(|b| *b != 0)
        .map_or(0, |last| last + 1);
    String::from_utf8(component[..end].to_vec()).map_err(|e| CodecError::InvalidUtf8 {
        index,
        reason: e.to_string(),
    })
}

/// Format: `namespace:name`
impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.name)
    }
}
