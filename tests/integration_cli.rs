// s3dotenv: exec a program with environment loaded from S3
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic launcher command lines.

use clap::Parser;
use s3dotenv::cli::Cli;
use s3dotenv::core::process::resolve_program;
use s3dotenv::error::LaunchError;
use std::ffi::OsString;

// =============================================================================
// Pass-through
// =============================================================================

#[test]
fn cli_container_entrypoint() {
    let cli = Cli::try_parse_from(["s3dotenv", "node", "server.js", "--port", "8080"]).unwrap();
    assert_eq!(
        cli.command,
        ["node", "server.js", "--port", "8080"].map(OsString::from)
    );
    assert_eq!(cli.global.log_level, None);
}

#[test]
fn cli_program_flags_not_consumed() {
    // -c, -l and --url after the program belong to the program.
    let cli = Cli::try_parse_from([
        "s3dotenv",
        "sh",
        "-c",
        "exec app",
        "-l",
        "9",
        "--url",
        "x",
    ])
    .unwrap();
    assert!(cli.global.config.is_none());
    assert!(cli.global.log_level.is_none());
    assert_eq!(cli.command.len(), 7);
}

#[test]
fn cli_double_dash_separator() {
    let cli = Cli::try_parse_from(["s3dotenv", "-l", "2", "--", "--weird-program-name"]).unwrap();
    assert_eq!(cli.global.log_level, Some(2));
    assert_eq!(cli.command, [OsString::from("--weird-program-name")]);
}

#[test]
fn cli_config_file_option() {
    let cli = Cli::try_parse_from(["s3dotenv", "-c", "/etc/s3dotenv.toml", "true"]).unwrap();
    assert_eq!(
        cli.global.config.as_deref(),
        Some(std::path::Path::new("/etc/s3dotenv.toml"))
    );
}

// =============================================================================
// Invocation → program
// =============================================================================

#[test]
fn cli_without_program_is_usage_error() {
    let cli = Cli::try_parse_from(["s3dotenv", "--log-level", "0"]).unwrap();
    let invocation = cli.invocation(Some("s3dotenv".into()));
    let err = resolve_program(&invocation).unwrap_err();
    assert!(matches!(err, LaunchError::Usage(_)));
    insta::assert_snapshot!(err.to_string(), @"s3dotenv expected program as first argument");
}

#[cfg(unix)]
#[test]
fn cli_program_resolved_on_path() {
    let cli = Cli::try_parse_from(["s3dotenv", "sh", "-c", "true"]).unwrap();
    let invocation = cli.invocation(Some("s3dotenv".into()));
    let program = resolve_program(&invocation).unwrap();
    assert!(program.path().is_absolute());
    assert_eq!(program.argv()[0], OsString::from("sh"));
    assert_eq!(program.argv().len(), 3);
}
