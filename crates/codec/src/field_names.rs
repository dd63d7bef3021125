// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Field names stored in the store metadata table.
//!
//! The metadata table keeps a table's field names as an ABI-encoded
//! `string[]`. The array is decoded as `bytes[]` (same layout) so that a
//! name with invalid UTF-8 is reported with its position.

use alloy_primitives::Bytes;
use alloy_sol_types::SolValue;

use crate::error::{CodecError, Result};

/// Decode an ABI-encoded `string[]` into field names.
pub fn decode_field_names(data: &[u8]) -> Result<Vec<String>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }

    let elements = <Vec<Bytes>>::abi_decode(data, true)
        .map_err(|e| CodecError::InvalidAbiEncoding(e.to_string()))?;

    elements
        .into_iter()
        .enumerate()
        .map(|(index, bytes)| {
            String::from_utf8(bytes.to_vec()).map_err(|e| CodecError::InvalidUtf8 {
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}
