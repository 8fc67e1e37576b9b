// s3dotenv: exec a program with environment loaded from S3
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Launcher settings.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. --config FILE (TOML)
//! 3. S3DOTENV_* env vars
//! 4. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! S3DOTENV_REGION=eu-west-1         → region = "eu-west-1"
//! S3DOTENV_ENDPOINT=http://minio:9000 → endpoint = "http://minio:9000"
//! S3DOTENV_FORCE_PATH_STYLE=false   → force_path_style = false
//! S3DOTENV_LOG_LEVEL=4              → log_level = 4
//! S3DOTENV_LOG_FILE=/tmp/launch.log → log_file = "/tmp/launch.log"
//! ```
//!
//! `S3DOTENV` itself (the env file URL) is not a setting; it is read by the
//! CLI.

pub mod loader;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::LOCATOR_VAR;
use crate::logging::LogLevel;

/// Prefix of the environment variables read by [`loader::ConfigLoader`].
pub const ENV_PREFIX: &str = LOCATOR_VAR;

/// Complete launcher configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Region used when the env file URL has no `?region=` parameter.
    pub region: Option<String>,
    /// Custom S3-compatible endpoint (MinIO, localstack).
    pub endpoint: Option<String>,
    /// Path-style addressing; defaults to on when `endpoint` is set.
    pub force_path_style: Option<bool>,
    /// Console log level (0-6).
    pub log_level: LogLevel,
    /// Optional log file.
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Store client settings derived from this configuration.
    #[must_use]
    pub fn s3(&self) -> S3Settings {
        let endpoint = self.endpoint.clone().filter(|e| !e.is_empty());
        S3Settings {
            force_path_style: self.force_path_style.unwrap_or(endpoint.is_some()),
            region: self.region.clone().filter(|r| !r.is_empty()),
            endpoint,
        }
    }
}

/// Settings consumed by [`crate::remote::S3Fetcher`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct S3Settings {
    /// Fallback region.
    pub region: Option<String>,
    /// Endpoint override.
    pub endpoint: Option<String>,
    /// Use `endpoint/bucket/key` instead of `bucket.endpoint/key`.
    pub force_path_style: bool,
}
