// s3dotenv: exec a program with environment loaded from S3
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment merging.
//!
//! # Precedence
//!
//! ```text
//! ProcessEnv (baseline, vars_os order)     ParsedEnv (remote)
//!        |                                      |
//!        +------------------+-------------------+
//!                           v
//!                       merge()
//!   1. copy baseline unchanged, in order
//!   2. for each remote (name, value):
//!        name set locally?  yes -> skip (local wins)
//!                           no  -> append once
//!                           |
//!                           v
//!                      MergedEnv
//! ```
//!
//! The baseline is never mutated; the merged list is built fresh and handed
//! to exec in one piece.


use std::collections::HashSet;
use std::ffi::{OsStr, OsString};

use tracing::debug;

use crate::envfile::ParsedEnv;

/// Snapshot of the current process environment.
///
/// Order and duplicate entries are preserved as reported by the OS. Name
/// lookups go through a separate existence index.
#[derive(Debug, Clone, Default)]
pub struct ProcessEnv {
    vars: Vec<(OsString, OsString)>,
    names: HashSet<OsString>,
}

impl ProcessEnv {
    /// Captures the environment of the running process.
    #[must_use]
    pub fn current() -> Self {
        std::env::vars_os().collect()
    }

    /// Whether `name` is set, whatever its value (empty counts as set).
    #[must_use]
    pub fn contains(&self, name: impl AsRef<OsStr>) -> bool {
        self.names.contains(name.as_ref())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ProcessEnv
where
    K: Into<OsString>,
    V: Into<OsString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars: Vec<(OsString, OsString)> = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        let names = vars.iter().map(|(k, _)| k.clone()).collect();
        Self { vars, names }
    }
}

/// Final environment for the replaced process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedEnv {
    vars: Vec<(OsString, OsString)>,
}

impl MergedEnv {
    /// Entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }

    /// First value of `name`, if present.
    #[must_use]
    pub fn get(&self, name: impl AsRef<OsStr>) -> Option<&OsStr> {
        let name = name.as_ref();
        self.vars
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_os_str())
    }

    /// Entries rendered as `NAME=VALUE`.
    #[must_use]
    pub fn to_strings(&self) -> Vec<OsString> {
        self.vars
            .iter()
            .map(|(k, v)| {
                let mut entry = OsString::with_capacity(k.len() + v.len() + 1);
                entry.push(k);
                entry.push("=");
                entry.push(v);
                entry
            })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl From<ProcessEnv> for MergedEnv {
    fn from(baseline: ProcessEnv) -> Self {
        Self {
            vars: baseline.vars,
        }
    }
}

/// Adds remote variables to the baseline without overriding any local one.
///
/// Only names absent from `baseline` are appended; the check is made against
/// the baseline, not the growing result, so merging is idempotent.
#[must_use]
pub fn merge(baseline: &ProcessEnv, remote: &ParsedEnv) -> MergedEnv {
    let mut vars = baseline.vars.clone();
    let mut added = 0_usize;

    for (name, value) in remote {
        if baseline.contains(name) {
            debug!(name = %name, "keeping local value");
            continue;
        }
        vars.push((OsString::from(name), OsString::from(value)));
        added += 1;
    }

    debug!(
        added,
        skipped = remote.len() - added,
        "merged remote env into process env"
    );
    MergedEnv { vars }
}
