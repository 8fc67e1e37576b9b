// s3dotenv: exec a program with environment loaded from S3
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{FetchError, LaunchError, LaunchResult, LocatorError, ProcessError, bail_out};

#[test]
fn test_usage_error_names_tool() {
    let err = LaunchError::Usage("s3dotenv".into());
    insta::assert_snapshot!(err.to_string(), @"s3dotenv expected program as first argument");
}

#[test]
fn test_locator_error_display() {
    let err = LaunchError::from(LocatorError::WrongScheme {
        scheme: "http".to_string(),
    });
    insta::assert_snapshot!(
        err.to_string(),
        @"S3DOTENV expects s3://... env file URL: unsupported scheme 'http'"
    );
}

#[test]
fn test_fetch_error_display() {
    let err = LaunchError::from(FetchError::GetObject {
        bucket: "config".to_string(),
        key: "prod/app.env".to_string(),
        message: "NoSuchKey".to_string(),
    });
    insta::assert_snapshot!(
        err.to_string(),
        @"download from S3: S3 GetObject s3://config/prod/app.env: NoSuchKey"
    );
}

#[test]
fn test_exec_error_display() {
    let err = LaunchError::from(ProcessError::ExecFailed {
        program: "/bin/true".to_string(),
        source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
    });
    insta::assert_snapshot!(err.to_string(), @"exec /bin/true: permission denied");
}

#[test]
fn test_bail_out() {
    let err = bail_out("missing argv[0]");
    assert!(matches!(err, LaunchError::Bailed(_)));
    assert_eq!(err.to_string(), "fatal error: missing argv[0]");
}

#[test]
fn test_launch_error_size() {
    // Box<str> variants (Bailed, Usage) are 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<LaunchError>();
    assert!(size <= 24, "LaunchError is {size} bytes, expected <= 24");
}

#[test]
fn test_launch_result_size() {
    let size = std::mem::size_of::<LaunchResult<()>>();
    assert!(size <= 24, "LaunchResult<()> is {size} bytes, expected <= 24");
}
