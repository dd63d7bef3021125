// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod health;
pub mod metrics;
pub mod openapi;
pub mod registry;
pub mod root;
pub mod store;
pub mod version;

pub use registry::{API_VERSION, RegisterRoute, RouteInfo, RouteRegistry};
