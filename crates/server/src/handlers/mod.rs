// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod health;
pub mod metrics;
pub mod openapi;
pub mod store;
pub mod version;
