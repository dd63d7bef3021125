// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Decoding endpoints for store tables.
//!
//! Callers hand over the raw schema words and records they fetched from the
//! chain; these handlers run them through `store_codec` and return JSON.

pub mod common;
pub mod decode_records;
pub mod decode_schema;

pub use common::{SchemaResponse, SchemaSideResponse, StoreError};
pub use decode_records::decode_records;
pub use decode_schema::decode_schema;
