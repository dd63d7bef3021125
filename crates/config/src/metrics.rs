// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error(
        "Invalid Prometheus prefix '{0}': must start with [a-zA-Z_:] and contain only [a-zA-Z0-9_:]"
    )]
    InvalidPrometheusPrefix(String),
}

/// Configuration for Prometheus metrics
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// Enable the `/metrics` endpoints and request instrumentation
    ///
    /// Env: STORE_EXPLORER_METRICS_ENABLED
    /// Default: false
    pub enabled: bool,

    /// Prometheus metric name prefix
    ///
    /// Env: STORE_EXPLORER_METRICS_PROMETHEUS_PREFIX
    /// Default: store_explorer
    pub prometheus_prefix: String,
}

pub(crate) fn default_prometheus_prefix() -> String {
    "store_explorer".to_string()
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            prometheus_prefix: default_prometheus_prefix(),
        }
    }
}

impl MetricsConfig {
    pub fn validate(&self) -> Result<(), MetricsError> {
        // Must match [a-zA-Z_:][a-zA-Z0-9_:]* or Prometheus drops the metrics
        let mut chars = self.prometheus_prefix.chars();
        if let Some(first) = chars.next() {
            let valid_first = first.is_ascii_alphabetic() || first == '_' || first == ':';
            let valid_rest = chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == ':');
            if !valid_first || !valid_rest {
                return Err(MetricsError::InvalidPrometheusPrefix(
                    self.prometheus_prefix.clone(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_metrics_config() {
        let config = MetricsConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.prometheus_prefix, "store_explorer");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_valid_prefixes() {
        for prefix in ["", "explorer", "_private", "ns:explorer_v2"] {
            let config = MetricsConfig {
                prometheus_prefix: prefix.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_ok(), "Prefix '{}' should be valid", prefix);
        }
    }

    #[test]
    fn test_invalid_prefixes() {
        for prefix in ["1explorer", "store-explorer", "store explorer"] {
            let config = MetricsConfig {
                prometheus_prefix: prefix.to_string(),
                ..Default::default()
            };
            assert!(
                config.validate().is_err(),
                "Prefix '{}' should be invalid",
                prefix
            );
        }
    }
}
