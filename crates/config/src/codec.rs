// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecConfigError {
    #[error("Max records per request must be greater than 0")]
    InvalidMaxRecords,
}

/// Limits applied when decoding records on behalf of a request
#[derive(Debug, Clone)]
pub struct CodecConfig {
    /// Maximum number of records accepted by one decode request
    ///
    /// Env: STORE_EXPLORER_CODEC_MAX_RECORDS
    /// Default: 1000
    pub max_records: usize,
}

pub(crate) fn default_max_records() -> usize {
    1000
}

impl CodecConfig {
    pub(crate) fn validate(&self) -> Result<(), CodecConfigError> {
        if self.max_records == 0 {
            return Err(CodecConfigError::InvalidMaxRecords);
        }
        Ok(())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_records: default_max_records(),
        }
    }
}
