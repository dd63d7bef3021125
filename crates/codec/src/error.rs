// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

/// Every way a schema word, key tuple or record blob can fail to decode.
///
/// All variants are produced synchronously by the decoders and are never
/// retried or recovered from inside this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Unknown field type code 0x{0:02x}")]
    UnknownFieldType(u8),

    #[error("Invalid schema layout: {0}")]
    InvalidSchemaLayout(String),

    #[error("Schema declares {declared} static bytes but its static fields sum to {computed}")]
    SchemaLengthMismatch { declared: usize, computed: usize },

    #[error("Schema input too short: expected {expected} bytes, got {actual}")]
    TruncatedSchema { expected: usize, actual: usize },

    #[error("Schema input too long: expected {expected} bytes, got {actual}")]
    OversizedSchema { expected: usize, actual: usize },

    #[error("Invalid hex format: {0}")]
    InvalidHex(String),

    #[error("Key tuple has {actual} words but the key schema declares {expected} fields")]
    KeyArityMismatch { expected: usize, actual: usize },

    #[error("Key schema declares {0} dynamic field(s), keys must be fixed-width")]
    DynamicKeyFieldUnsupported(usize),

    #[error("Record too short for static data: expected {expected} bytes, got {actual}")]
    TruncatedRecord { expected: usize, actual: usize },

    #[error("Dynamic length header truncated: expected {expected} bytes, got {actual}")]
    DynamicHeaderTruncated { expected: usize, actual: usize },

    #[error(
        "Dynamic field {index} payload truncated: expected {expected} bytes, got {actual}"
    )]
    DynamicPayloadTruncated {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid UTF-8 in field {index}: {reason}")]
    InvalidUtf8 { index: usize, reason: String },

    #[error("Array payload of {length} bytes is not a multiple of element width {element_width}")]
    ArrayLengthNotAligned { length: usize, element_width: usize },

    #[error("Table id component '{0}' exceeds 16 bytes")]
    TableIdTooLong(String),

    #[error("Invalid ABI encoding: {0}")]
    InvalidAbiEncoding(String),
}

impl From<hex::FromHexError> for CodecError {
    fn from(err: hex::FromHexError) -> Self {
        CodecError::InvalidHex(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
