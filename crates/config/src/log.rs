// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

const VALID_LEVELS: [&str; 6] = ["trace", "debug", "info", "http", "warn", "error"];

#[derive(Debug, Error)]
pub enum LogError {
    #[error("Invalid log level '{0}'. Must be one of: trace, debug, info, http, warn, error")]
    InvalidLevel(String),

    #[error("Log write path cannot be empty when file logging is enabled")]
    EmptyWritePath,

    #[error("Log max file size must be greater than 0")]
    InvalidMaxFileSize,

    #[error("Log max files must be greater than 0")]
    InvalidMaxFiles,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log Level
    ///
    /// Env: STORE_EXPLORER_LOG_LEVEL
    /// Valid values: trace, debug, info, http, warn, error
    /// Default: info
    pub level: String,

    /// Output logs in JSON format
    ///
    /// Env: STORE_EXPLORER_LOG_JSON
    /// Default: false
    pub json: bool,

    /// Strip ANSI color codes from logs
    ///
    /// Env: STORE_EXPLORER_LOG_STRIP_ANSI
    /// Default: false
    pub strip_ansi: bool,

    /// Also write logs to a size-rotated file
    ///
    /// Env: STORE_EXPLORER_LOG_WRITE
    /// Default: false
    pub write: bool,

    /// Directory for log files
    ///
    /// Env: STORE_EXPLORER_LOG_WRITE_PATH
    /// Default: ./logs
    pub write_path: String,

    /// Maximum log file size in bytes before rotation
    ///
    /// Env: STORE_EXPLORER_LOG_WRITE_MAX_FILE_SIZE
    /// Default: 5242880 (5MB)
    pub write_max_file_size: u64,

    /// Number of log files kept, including the current one
    ///
    /// Env: STORE_EXPLORER_LOG_WRITE_MAX_FILES
    /// Default: 5
    pub write_max_files: usize,
}

pub(crate) fn default_level() -> String {
    "info".to_string()
}

pub(crate) fn default_write_path() -> String {
    "./logs".to_string()
}

pub(crate) fn default_write_max_file_size() -> u64 {
    5_242_880
}

pub(crate) fn default_write_max_files() -> usize {
    5
}

impl LogConfig {
    pub(crate) fn validate(&self) -> Result<(), LogError> {
        if !VALID_LEVELS.contains(&self.level.as_str()) {
            return Err(LogError::InvalidLevel(self.level.clone()));
        }

        if self.write && self.write_path.is_empty() {
            return Err(LogError::EmptyWritePath);
        }

        if self.write_max_file_size == 0 {
            return Err(LogError::InvalidMaxFileSize);
        }

        if self.write_max_files == 0 {
            return Err(LogError::InvalidMaxFiles);
        }

        Ok(())
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
            strip_ansi: false,
            write: false,
            write_path: default_write_path(),
            write_max_file_size: default_write_max_file_size(),
            write_max_files: default_write_max_files(),
        }
    }
}
