// s3dotenv: exec a program with environment loaded from S3
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Launcher options.
//!
//! # Option Precedence
//!
//! ```text
//! --url URL         ← env file (or S3DOTENV)
//! --config FILE     ← TOML settings
//! --log-level N     ← Console verbosity (0-6)
//! --log-file FILE   ← Log file
//!
//! Precedence: CLI flags > S3DOTENV_* > --config > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::loader::ConfigLoader;
use crate::error::{LOCATOR_VAR, Result};

/// Options accepted before the program name.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// URL of the env file, `s3://bucket/key[?region=...]`. Empty means none.
    #[arg(long = "url", value_name = "S3_URL", env = LOCATOR_VAR, hide_env_values = true)]
    pub url: Option<String>,

    /// Path to a TOML settings file.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// The env file URL, with an empty value treated as unset.
    #[must_use]
    pub fn locator(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }

    /// Applies `--config` and the CLI overrides to `loader`.
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be stored.
    pub fn apply_to(&self, mut loader: ConfigLoader) -> Result<ConfigLoader> {
        if let Some(path) = &self.config {
            loader = loader.add_toml_file(path);
        }
        if let Some(level) = self.log_level {
            loader = loader.set("log_level", i64::from(level))?;
        }
        if let Some(path) = &self.log_file {
            loader = loader.set("log_file", path.display().to_string())?;
        }
        Ok(loader)
    }
}
