// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod args;
mod codec;
mod error;
mod express;
mod log;
mod metrics;

pub use args::Args;
pub use codec::{CodecConfig, CodecConfigError};
pub use error::ConfigError;
pub use express::{ExpressConfig, ExpressError};
pub use log::{LogConfig, LogError};
pub use metrics::{MetricsConfig, MetricsError};

use serde::Deserialize;
use std::path::Path;

/// Prefix of every environment variable read by [`ExplorerConfig::from_env`]
pub const ENV_PREFIX: &str = "STORE_EXPLORER_";

/// Flat view of the environment, one field per variable (without the prefix).
#[derive(Debug, Deserialize)]
struct EnvConfig {
    #[serde(default = "express::default_bind_host")]
    express_bind_host: String,
    #[serde(default = "express::default_port")]
    express_port: u16,
    #[serde(default = "express::default_request_limit")]
    express_request_limit: usize,

    #[serde(default = "log::default_level")]
    log_level: String,
    #[serde(default)]
    log_json: bool,
    #[serde(default)]
    log_strip_ansi: bool,
    #[serde(default)]
    log_write: bool,
    #[serde(default = "log::default_write_path")]
    log_write_path: String,
    #[serde(default = "log::default_write_max_file_size")]
    log_write_max_file_size: u64,
    #[serde(default = "log::default_write_max_files")]
    log_write_max_files: usize,

    #[serde(default)]
    metrics_enabled: bool,
    #[serde(default = "metrics::default_prometheus_prefix")]
    metrics_prometheus_prefix: String,

    #[serde(default = "codec::default_max_records")]
    codec_max_records: usize,
}

impl From<EnvConfig> for ExplorerConfig {
    fn from(env: EnvConfig) -> Self {
        Self {
            express: ExpressConfig {
                bind_host: env.express_bind_host,
                port: env.express_port,
                request_limit: env.express_request_limit,
            },
            log: LogConfig {
                level: env.log_level,
                json: env.log_json,
                strip_ansi: env.log_strip_ansi,
                write: env.log_write,
                write_path: env.log_write_path,
                write_max_file_size: env.log_write_max_file_size,
                write_max_files: env.log_write_max_files,
            },
            metrics: MetricsConfig {
                enabled: env.metrics_enabled,
                prometheus_prefix: env.metrics_prometheus_prefix,
            },
            codec: CodecConfig {
                max_records: env.codec_max_records,
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExplorerConfig {
    pub express: ExpressConfig,
    pub log: LogConfig,
    pub metrics: MetricsConfig,
    pub codec: CodecConfig,
}

impl ExplorerConfig {
    /// Load and validate the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = envy::prefixed(ENV_PREFIX).from_env::<EnvConfig>()?;
        let config = Self::from(env);
        config.validate()?;
        Ok(config)
    }

    /// Load and validate the configuration from explicit `(name, value)` pairs,
    /// names including the prefix.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let env = envy::prefixed(ENV_PREFIX).from_iter::<_, EnvConfig>(vars)?;
        let config = Self::from(env);
        config.validate()?;
        Ok(config)
    }

    /// Load variables from an env file into the process environment, then read
    /// the configuration. A missing file is not an error; variables already set
    /// in the environment win over the file.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            dotenv::from_path(path).map_err(|source| ConfigError::EnvFileError {
                path: path.display().to_string(),
                source,
            })?;
        }
        Self::from_env()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.express.validate()?;
        self.log.validate()?;
        self.metrics.validate()?;
        self.codec.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = ExplorerConfig::default();
        assert_eq!(config.express.port, 8080);
        assert_eq!(config.log.level, "info");
        assert!(!config.metrics.enabled);
        assert_eq!(config.codec.max_records, 1000);
    }

    #[test]
    fn test_empty_environment_matches_default() {
        let config = ExplorerConfig::from_vars(Vec::new()).unwrap();
        let default = ExplorerConfig::default();
        assert_eq!(config.express.bind_host, default.express.bind_host);
        assert_eq!(config.express.port, default.express.port);
        assert_eq!(config.express.request_limit, default.express.request_limit);
        assert_eq!(config.log.level, default.log.level);
        assert_eq!(config.log.write_max_files, default.log.write_max_files);
        assert_eq!(
            config.metrics.prometheus_prefix,
            default.metrics.prometheus_prefix
        );
        assert_eq!(config.codec.max_records, default.codec.max_records);
    }

    #[test]
    fn test_vars_override_defaults() {
        let config = ExplorerConfig::from_vars(vars(&[
            ("STORE_EXPLORER_EXPRESS_PORT", "3000"),
            ("STORE_EXPLORER_LOG_LEVEL", "debug"),
            ("STORE_EXPLORER_LOG_JSON", "true"),
            ("STORE_EXPLORER_METRICS_ENABLED", "true"),
            ("STORE_EXPLORER_CODEC_MAX_RECORDS", "25"),
            ("UNRELATED_VARIABLE", "ignored"),
        ]))
        .unwrap();
        assert_eq!(config.express.port, 3000);
        assert_eq!(config.log.level, "debug");
        assert!(config.log.json);
        assert!(config.metrics.enabled);
        assert_eq!(config.codec.max_records, 25);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let result = ExplorerConfig::from_vars(vars(&[("STORE_EXPLORER_EXPRESS_PORT", "0")]));
        assert!(matches!(result, Err(ConfigError::ExpressError(_))));

        let result = ExplorerConfig::from_vars(vars(&[("STORE_EXPLORER_LOG_LEVEL", "loud")]));
        assert!(matches!(result, Err(ConfigError::LogError(_))));

        let result =
            ExplorerConfig::from_vars(vars(&[("STORE_EXPLORER_EXPRESS_PORT", "not-a-port")]));
        assert!(matches!(result, Err(ConfigError::EnvError(_))));
    }
}
