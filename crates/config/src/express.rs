// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use std::net::IpAddr;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExpressError {
    #[error("Invalid bind host: {0}")]
    InvalidHost(String),

    #[error("Express port cannot be 0")]
    InvalidPort,

    #[error("Request body limit cannot be 0")]
    InvalidRequestLimit,
}

/// Validates that a string is a valid host (IP address or hostname)
pub(crate) fn is_valid_host(host: &str) -> bool {
    if IpAddr::from_str(host).is_ok() {
        return true;
    }

    // RFC 1123 hostname
    if host.is_empty() || host.len() > 253 {
        return false;
    }

    host.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            && !label.starts_with('-')
            && !label.ends_with('-')
    })
}

#[derive(Debug, Clone)]
pub struct ExpressConfig {
    /// Host to bind the HTTP server to
    ///
    /// Env: STORE_EXPLORER_EXPRESS_BIND_HOST
    /// Default: 127.0.0.1
    pub bind_host: String,

    /// Port to bind the HTTP server to
    ///
    /// Env: STORE_EXPLORER_EXPRESS_PORT
    /// Default: 8080
    pub port: u16,

    /// Maximum request body size in bytes
    ///
    /// Env: STORE_EXPLORER_EXPRESS_REQUEST_LIMIT
    /// Default: 512000
    pub request_limit: usize,
}

pub(crate) fn default_bind_host() -> String {
    "127.0.0.1".to_string()
}

pub(crate) fn default_port() -> u16 {
    8080
}

pub(crate) fn default_request_limit() -> usize {
    512_000
}

impl ExpressConfig {
    pub(crate) fn validate(&self) -> Result<(), ExpressError> {
        if !is_valid_host(&self.bind_host) {
            return Err(ExpressError::InvalidHost(self.bind_host.clone()));
        }

        if self.port == 0 {
            return Err(ExpressError::InvalidPort);
        }

        if self.request_limit == 0 {
            return Err(ExpressError::InvalidRequestLimit);
        }

        Ok(())
    }
}

impl Default for ExpressConfig {
    fn default() -> Self {
        Self {
            bind_host: default_bind_host(),
            port: default_port(),
            request_limit: default_request_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_express_config() {
        let config = ExpressConfig::default();
        assert_eq!(config.bind_host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.request_limit, 512_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_port_zero() {
        let config = ExpressConfig {
            port: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ExpressError::InvalidPort)));
    }

    #[test]
    fn test_validate_request_limit_zero() {
        let config = ExpressConfig {
            request_limit: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ExpressError::InvalidRequestLimit)
        ));
    }

    #[test]
    fn test_valid_hosts() {
        for host in ["0.0.0.0", "::1", "localhost", "explorer.internal.svc"] {
            let config = ExpressConfig {
                bind_host: host.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_ok(), "Host {} should be valid", host);
        }
    }

    #[test]
    fn test_invalid_hosts() {
        for host in ["", "-bad.host", "under_score", "a..b"] {
            let config = ExpressConfig {
                bind_host: host.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_err(), "Host {} should be invalid", host);
        }
    }
}
