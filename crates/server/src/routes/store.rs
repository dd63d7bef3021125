// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Router, routing::post};

use crate::{
    handlers::store,
    routes::{API_VERSION, RegisterRoute, RouteRegistry},
    state::AppState,
};

pub fn routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new()
        .route_registered(
            registry,
            API_VERSION,
            "/store/schema/decode",
            "post",
            post(store::decode_schema),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/store/records/decode",
            "post",
            post(store::decode_records),
        )
}
