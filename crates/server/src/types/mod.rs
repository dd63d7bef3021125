// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod encoding;

pub use encoding::{HexBytes, KeyWord};
