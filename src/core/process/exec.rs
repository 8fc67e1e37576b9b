// s3dotenv: exec a program with environment loaded from S3
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

#[cfg(unix)]
use std::ffi::{CString, OsString};
#[cfg(unix)]
use std::io;
#[cfg(unix)]
use std::os::unix::ffi::OsStringExt;

use super::ResolvedProgram;
use crate::core::env::MergedEnv;
use crate::error::{LaunchError, ProcessError};

/// The exact `execve` arguments: program path, argv and envp.
///
/// `envp` is the merged environment entry for entry, duplicates and order
/// included.
#[cfg(unix)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecImage {
    pub path: CString,
    pub argv: Vec<CString>,
    pub envp: Vec<CString>,
}

#[cfg(unix)]
fn c_string(value: OsString) -> io::Result<CString> {
    Ok(CString::new(value.into_vec())?)
}

#[cfg(unix)]
impl ExecImage {
    /// Calls `execve`. Only returns on failure.
    fn exec(&self) -> io::Error {
        nix::unistd::execve(&self.path, &self.argv, &self.envp)
            .map_or_else(io::Error::from, |never| match never {})
    }
}

impl ResolvedProgram {
    /// Builds the `execve` arguments for this program under `env`.
    ///
    /// # Errors
    ///
    /// Fails with [`io::ErrorKind::InvalidInput`] if the path, an argument or
    /// an environment entry contains a NUL byte.
    #[cfg(unix)]
    pub fn image(&self, env: &MergedEnv) -> io::Result<ExecImage> {
        Ok(ExecImage {
            path: c_string(self.path.clone().into_os_string())?,
            argv: self
                .argv
                .iter()
                .cloned()
                .map(c_string)
                .collect::<io::Result<_>>()?,
            envp: env
                .to_strings()
                .into_iter()
                .map(c_string)
                .collect::<io::Result<_>>()?,
        })
    }

    /// Replaces the current process image with the program.
    ///
    /// Same PID, same open descriptors, no child. Only returns if the
    /// replacement failed, and then always with an error.
    #[cfg(unix)]
    #[must_use]
    pub fn exec(self, env: &MergedEnv) -> LaunchError {
        let source = match self.image(env) {
            Ok(image) => image.exec(),
            Err(e) => e,
        };
        ProcessError::ExecFailed {
            program: self.path.display().to_string(),
            source,
        }
        .into()
    }

    /// Process replacement needs `execve`; other platforms report an error.
    #[cfg(not(unix))]
    #[must_use]
    pub fn exec(self, _env: &MergedEnv) -> LaunchError {
        ProcessError::Unsupported {
            program: self.path.display().to_string(),
        }
        .into()
    }
}
