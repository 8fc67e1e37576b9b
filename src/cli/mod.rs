// s3dotenv: exec a program with environment loaded from S3
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for s3dotenv using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! s3dotenv [options] <program> [args...]
//!          ^^^^^^^^^ only before <program>; everything from <program> on
//!                    is passed through untouched
//! ```

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::Parser;
use std::ffi::OsString;

/// Exec a program with environment variables loaded from an S3 dotenv file.
#[derive(Debug, Parser)]
#[command(
    name = "s3dotenv",
    author,
    version,
    about = "Exec a program with environment variables loaded from S3",
    long_about = "s3dotenv Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Downloads the dotenv file named by S3DOTENV, adds every variable\n\
                  that is not already set to the environment, then replaces itself\n\
                  with <PROGRAM>. Variables already present in the environment\n\
                  always win over the ones from S3.",
    after_help = "ENVIRONMENT:\n\n\
                  S3DOTENV                   s3://bucket/key[?region=...] of the env file\n\
                  S3DOTENV_REGION            region when the URL has none\n\
                  S3DOTENV_ENDPOINT          S3-compatible endpoint URL\n\
                  S3DOTENV_FORCE_PATH_STYLE  path-style addressing (default: on with endpoint)\n\
                  S3DOTENV_LOG_LEVEL         same as --log-level\n\
                  S3DOTENV_LOG_FILE          same as --log-file\n\n\
                  AWS credentials are read the usual way (env, profile, instance role)."
)]
pub struct Cli {
    /// Launcher options
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Program to run, followed by its arguments
    #[arg(
        value_name = "PROGRAM",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<OsString>,
}

impl Cli {
    /// The invocation as the program resolver sees it: `argv0` followed by
    /// the program and its arguments. Empty when the OS gave no `argv0`.
    #[must_use]
    pub fn invocation(&self, argv0: Option<OsString>) -> Vec<OsString> {
        argv0.map_or_else(Vec::new, |argv0| {
            std::iter::once(argv0)
                .chain(self.command.iter().cloned())
                .collect()
        })
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
