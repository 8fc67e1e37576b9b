// s3dotenv: exec a program with environment loaded from S3
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::loader::ConfigLoader;
use super::{Config, ENV_PREFIX, S3Settings};
use crate::logging::LogLevel;
use std::path::PathBuf;

fn no_env() -> Vec<(String, String)> {
    Vec::new()
}

#[test]
fn test_default_config() {
    let config = ConfigLoader::new()
        .with_env_prefix(ENV_PREFIX)
        .with_env_source(no_env())
        .build()
        .unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.log_level, LogLevel::INFO);
    assert_eq!(config.s3(), S3Settings::default());
}

#[test]
fn test_env_vars_are_read_with_prefix() {
    let config = ConfigLoader::new()
        .with_env_prefix(ENV_PREFIX)
        .with_env_source([
            ("S3DOTENV_REGION", "eu-west-1"),
            ("S3DOTENV_ENDPOINT", "http://127.0.0.1:9000"),
            ("S3DOTENV_LOG_LEVEL", "5"),
            ("S3DOTENV_LOG_FILE", "/tmp/s3dotenv.log"),
            // The env file URL itself is not a setting.
            ("S3DOTENV", "s3://bucket/key"),
            ("UNRELATED_REGION", "us-west-2"),
        ])
        .build()
        .unwrap();

    assert_eq!(config.region.as_deref(), Some("eu-west-1"));
    assert_eq!(config.endpoint.as_deref(), Some("http://127.0.0.1:9000"));
    assert_eq!(config.log_level, LogLevel::TRACE);
    assert_eq!(config.log_file, Some(PathBuf::from("/tmp/s3dotenv.log")));
}

#[test]
fn test_endpoint_implies_path_style() {
    let config = Config {
        endpoint: Some("http://localhost:4566".to_string()),
        ..Config::default()
    };
    assert!(config.s3().force_path_style);

    let config = Config {
        endpoint: Some("http://localhost:4566".to_string()),
        force_path_style: Some(false),
        ..Config::default()
    };
    assert!(!config.s3().force_path_style);
}

#[test]
fn test_empty_region_is_no_region() {
    let config = Config {
        region: Some(String::new()),
        endpoint: Some(String::new()),
        ..Config::default()
    };
    assert_eq!(config.s3(), S3Settings::default());
}

#[test]
fn test_toml_then_env_then_override() {
    let config = ConfigLoader::new()
        .add_toml_str("region = \"us-east-1\"\nlog_level = 2\n")
        .with_env_prefix(ENV_PREFIX)
        .with_env_source([("S3DOTENV_REGION", "ap-south-1")])
        .set("log_level", 4_i64)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.region.as_deref(), Some("ap-south-1"));
    assert_eq!(config.log_level, LogLevel::DEBUG);
}

#[test]
fn test_invalid_log_level_rejected() {
    let result = ConfigLoader::new().add_toml_str("log_level = 9\n").build();
    assert!(result.is_err());
}

#[test]
fn test_missing_config_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let loader = ConfigLoader::new().add_toml_file(dir.path().join("missing.toml"));
    assert!(loader.build().is_err());
}
