// s3dotenv: exec a program with environment loaded from S3
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Launch pipeline.
//!
//! ```text
//! resolve_program ──> S3Locator::parse ──> fetch ──> envfile::parse ──> merge
//!   (always)            (S3DOTENV set)                                   |
//!                                                                        v
//!                                                    LaunchPlan { program, env }
//!                                                                        |
//!                                                                     exec()
//! ```
//!
//! The program is resolved first, so a bad program name never costs a
//! download.

use std::ffi::OsStr;

use tracing::info;

use crate::core::env::{MergedEnv, ProcessEnv, merge};
use crate::core::process::{ResolvedProgram, resolve_program};
use crate::envfile;
use crate::error::{LaunchError, LaunchResult};
use crate::remote::{ObjectFetcher, S3Locator};

/// Everything needed to replace the process.
#[derive(Debug, Clone)]
pub struct LaunchPlan {
    pub program: ResolvedProgram,
    pub env: MergedEnv,
}

impl LaunchPlan {
    /// Replaces the current process. Only returns on failure.
    #[must_use]
    pub fn exec(self) -> LaunchError {
        self.program.exec(&self.env)
    }
}

/// Runs every step up to, but not including, process replacement.
///
/// `locator` is the raw `S3DOTENV` value; `None` skips the download and
/// passes `baseline` through unchanged.
///
/// # Errors
///
/// Returns the first stage error: usage, lookup, locator, fetch or parse.
pub async fn prepare_launch<S, F>(
    invocation: &[S],
    locator: Option<&str>,
    baseline: ProcessEnv,
    fetcher: &F,
) -> LaunchResult<LaunchPlan>
where
    S: AsRef<OsStr>,
    F: ObjectFetcher,
{
    let program = resolve_program(invocation)?;

    let env = match locator {
        Some(raw) => {
            let locator = S3Locator::parse(raw)?;
            info!("loading env from {locator}");
            let scratch = fetcher.fetch(&locator).await?;
            let remote = envfile::parse(scratch)?;
            merge(&baseline, &remote)
        }
        None => MergedEnv::from(baseline),
    };

    Ok(LaunchPlan { program, env })
}

#[cfg(test)]
mod tests;
