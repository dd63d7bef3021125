// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Router, extract::DefaultBodyLimit, middleware, routing::get};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::{
    logging::http_logger_middleware,
    metrics,
    routes::{self, API_VERSION},
    state::AppState,
};

/// Build the router with every route, middleware and shared state.
pub fn create_app(state: AppState) -> Router {
    let registry = &state.route_registry;

    let v1_routes = Router::new()
        .merge(routes::health::routes(registry))
        .merge(routes::version::routes(registry))
        .merge(routes::openapi::routes(registry))
        .merge(routes::store::routes(registry));

    let mut app = Router::new()
        .route("/", get(routes::root::root_handler))
        .nest(API_VERSION, v1_routes);

    if state.config.metrics.enabled {
        metrics::init(&state.config.metrics.prometheus_prefix);
        app = app.merge(routes::metrics::routes()).layer(
            middleware::from_fn(metrics::metrics_middleware),
        );
    }

    app.layer(middleware::from_fn(http_logger_middleware))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(state.config.express.request_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
