// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! HTTP front end for the store codec.

pub mod app;
pub mod extractors;
pub mod handlers;
pub mod logging;
pub mod metrics;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod types;
