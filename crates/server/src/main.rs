// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::Context;
use config::{Args, ExplorerConfig};
use std::net::SocketAddr;
use store_explorer::{app, handlers::health, logging, state::AppState};

#[cfg(not(target_os = "windows"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse_args();
    let config = ExplorerConfig::from_env_file(&args.env_file)?;

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = logging::init_with_config((&config.log).into())?;
    health::get_health::mark_started();

    let host: std::net::IpAddr = config
        .express
        .bind_host
        .parse()
        .with_context(|| format!("Invalid bind host '{}'", config.express.bind_host))?;
    let addr = SocketAddr::new(host, config.express.port);

    tracing::info!("Starting store explorer v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log level: {}", config.log.level);
    tracing::info!("Max records per request: {}", config.codec.max_records);
    if config.metrics.enabled {
        tracing::info!("Metrics enabled at http://{}/metrics", addr);
    }

    let app = app::create_app(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
