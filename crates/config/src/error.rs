// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration from environment: {0}")]
    EnvError(#[from] envy::Error),

    #[error("Failed to load env file '{path}': {source}")]
    EnvFileError {
        path: String,
        #[source]
        source: dotenv::Error,
    },

    #[error("Express configuration error: {0}")]
    ExpressError(#[from] crate::express::ExpressError),

    #[error("Log configuration error: {0}")]
    LogError(#[from] crate::log::LogError),

    #[error("Metrics configuration error: {0}")]
    MetricsError(#[from] crate::metrics::MetricsError),

    #[error("Codec configuration error: {0}")]
    CodecError(#[from] crate::codec::CodecConfigError),
}
