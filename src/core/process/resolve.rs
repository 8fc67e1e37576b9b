// s3dotenv: exec a program with environment loaded from S3
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{LaunchError, LaunchResult, ProcessError, bail_out};

/// Target program located on `PATH`, with the argument vector to pass it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProgram {
    pub(super) path: PathBuf,
    pub(super) argv: Vec<OsString>,
}

impl ResolvedProgram {
    /// Absolute (or `PATH`-relative) executable path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full argument vector; `argv[0]` is the program name as given.
    #[must_use]
    pub fn argv(&self) -> &[OsString] {
        &self.argv
    }
}

/// Splits an invocation into the program to run and its arguments.
///
/// `invocation[0]` is this tool's own name, `invocation[1]` the program,
/// looked up on `PATH`. The returned argv starts at `invocation[1]`.
///
/// # Errors
///
/// - [`LaunchError::Bailed`] if `invocation` is empty.
/// - [`LaunchError::Usage`] if no program was given.
/// - [`ProcessError::ExecutableNotFound`] if the program is not on `PATH` or
///   not executable.
pub fn resolve_program<S: AsRef<OsStr>>(invocation: &[S]) -> LaunchResult<ResolvedProgram> {
    let (tool, rest) = invocation
        .split_first()
        .ok_or_else(|| bail_out("missing argv[0]"))?;
    let Some(program) = rest.first() else {
        return Err(LaunchError::Usage(
            tool.as_ref().to_string_lossy().into_owned().into_boxed_str(),
        ));
    };

    let program = program.as_ref();
    let path = which::which(program).map_err(|source| ProcessError::ExecutableNotFound {
        name: program.to_string_lossy().into_owned(),
        source,
    })?;
    debug!(program = %path.display(), "resolved program");

    Ok(ResolvedProgram {
        path,
        argv: rest.iter().map(|arg| arg.as_ref().to_os_string()).collect(),
    })
}
