// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use config::ExplorerConfig;

use crate::routes::RouteRegistry;

#[derive(Clone)]
pub struct AppState {
    pub config: ExplorerConfig,
    /// Filled in by `create_app` as routes are registered.
    pub route_registry: RouteRegistry,
}

impl AppState {
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            config,
            route_registry: RouteRegistry::new(),
        }
    }

    /// Load and validate the configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = ExplorerConfig::from_env()?;
        Ok(Self::new(config))
    }
}
