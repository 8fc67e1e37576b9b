// s3dotenv: exec a program with environment loaded from S3
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              LaunchError (~24 bytes)
//!                     |
//!   +-------+------+-------+-------+-------+
//!   |       |      |       |       |       |
//!   v       v      v       v       v       v
//! Bail   Usage  Process Locator  Fetch  EnvFile
//!                Box     Box     Box     Box
//!
//! Sub-errors (unboxed internally):
//!   Process  ExecutableNotFound, ExecFailed, Unsupported
//!   Locator  InvalidUrl, WrongScheme, MissingBucket, MissingKey
//!   Fetch    Session, GetObject, ReadBody, Scratch, Close
//!   EnvFile  Parse
//!
//! Every stage error is terminal: printed once, then exit non-zero.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`LaunchError`].
pub type LaunchResult<T> = std::result::Result<T, LaunchError>;

/// Name of the environment variable holding the S3 env file URL.
pub const LOCATOR_VAR: &str = "S3DOTENV";

/// Top-level error type of the launch pipeline.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Internal invariant violation that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// No program was given on the command line. Holds the tool's own name.
    #[error("{0} expected program as first argument")]
    Usage(Box<str>),

    /// Program lookup or process replacement failed.
    #[error("{0}")]
    Process(#[from] Box<ProcessError>),

    /// The `S3DOTENV` value is not a usable `s3://` URL.
    #[error("{var} expects s3://... env file URL: {0}", var = LOCATOR_VAR)]
    Locator(#[from] Box<LocatorError>),

    /// The env file could not be downloaded.
    #[error("download from S3: {0}")]
    Fetch(#[from] Box<FetchError>),

    /// The downloaded env file is malformed.
    #[error("{0}")]
    EnvFile(#[from] Box<EnvFileError>),
}

/// Create a fatal [`LaunchError::Bailed`].
pub fn bail_out(message: impl Into<String>) -> LaunchError {
    LaunchError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for LaunchError {
                fn from(err: $error) -> Self {
                    LaunchError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ProcessError => Process,
    LocatorError => Locator,
    FetchError => Fetch,
    EnvFileError => EnvFile,
}

// --- Process Errors ---

/// Program lookup and process replacement errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH (or not executable).
    #[error("searching PATH for '{name}': {source}")]
    ExecutableNotFound {
        name: String,
        #[source]
        source: which::Error,
    },

    /// The exec syscall failed; the current process is still running.
    #[error("exec {program}: {source}")]
    ExecFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Process replacement is not available on this platform.
    #[error("exec {program}: process replacement is not supported on this platform")]
    Unsupported { program: String },
}

// --- Locator Errors ---

/// Reasons an `S3DOTENV` value is rejected.
#[derive(Debug, Error)]
pub enum LocatorError {
    /// Not a URL at all.
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A URL with a scheme other than `s3`.
    #[error("unsupported scheme '{scheme}'")]
    WrongScheme { scheme: String },

    /// No bucket in the host position.
    #[error("missing bucket in '{url}'")]
    MissingBucket { url: String },

    /// Nothing after the bucket.
    #[error("missing object key in '{url}'")]
    MissingKey { url: String },
}

// --- Fetch Errors ---

/// S3 download errors. None of these are retried.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The client session could not be set up.
    #[error("S3 session: {message}")]
    Session { message: String },

    /// The `GetObject` request failed (not found, access denied, network).
    #[error("S3 GetObject s3://{bucket}/{key}: {message}")]
    GetObject {
        bucket: String,
        key: String,
        message: String,
    },

    /// The response body stream broke off.
    #[error("read S3 response: {message}")]
    ReadBody { message: String },

    /// The scratch file could not be created or written.
    #[error("create temp file: {0}")]
    Scratch(#[source] std::io::Error),

    /// Flushing or rewinding the scratch file failed.
    #[error("close file: {0}")]
    Close(#[source] std::io::Error),
}

// --- Env File Errors ---

/// Env file decoding errors.
#[derive(Debug, Error)]
pub enum EnvFileError {
    /// The dotenv decoder rejected the contents.
    #[error("parse env file: {0}")]
    Parse(#[from] dotenvy::Error),
}

#[cfg(test)]
mod tests;
