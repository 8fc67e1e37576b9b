// s3dotenv: exec a program with environment loaded from S3
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dotenv decoding.
//!
//! ```text
//! scratch file --> dotenvy::from_read_iter --> ParsedEnv (BTreeMap)
//! ```
//!
//! Quoting, escapes, comments and `${VAR}` expansion follow `dotenvy`.
//! A name assigned twice keeps its last value.


use std::collections::BTreeMap;
use std::io::Read;

use crate::error::EnvFileError;

/// Variables decoded from an env file, keyed by name.
pub type ParsedEnv = BTreeMap<String, String>;

/// Decodes dotenv text into name/value pairs.
///
/// # Errors
///
/// Returns [`EnvFileError::Parse`] on the first malformed line or read error.
pub fn parse<R: Read>(reader: R) -> Result<ParsedEnv, EnvFileError> {
    let mut vars = ParsedEnv::new();
    for item in dotenvy::from_read_iter(reader) {
        let (name, value) = item?;
        vars.insert(name, value);
    }
    Ok(vars)
}
