// s3dotenv: exec a program with environment loaded from S3
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::prepare_launch;
use crate::core::env::ProcessEnv;
use crate::error::{FetchError, LaunchError};
use crate::remote::{ObjectFetcher, S3Locator};
use std::cell::RefCell;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{Seek, Write};

/// Serves one fixed body and records what was asked for.
#[derive(Default)]
struct FakeFetcher {
    body: &'static str,
    fail: bool,
    requests: RefCell<Vec<String>>,
}

impl ObjectFetcher for FakeFetcher {
    async fn fetch(&self, locator: &S3Locator) -> Result<File, FetchError> {
        self.requests.borrow_mut().push(locator.to_string());
        if self.fail {
            return Err(FetchError::GetObject {
                bucket: locator.bucket().to_string(),
                key: locator.key().to_string(),
                message: "AccessDenied".to_string(),
            });
        }
        let mut file = tempfile::tempfile().map_err(FetchError::Scratch)?;
        file.write_all(self.body.as_bytes()).map_err(FetchError::Scratch)?;
        file.rewind().map_err(FetchError::Close)?;
        Ok(file)
    }
}

fn baseline() -> ProcessEnv {
    [("FOO", "local"), ("PATH", "/usr/bin:/bin")]
        .into_iter()
        .collect()
}

#[tokio::test]
async fn test_remote_vars_merged_local_wins() {
    let fetcher = FakeFetcher {
        body: "FOO=remote\nBAR=remote\n",
        ..FakeFetcher::default()
    };
    let plan = prepare_launch(
        &["s3dotenv", "sh", "-c", "true"],
        Some("s3://bucket/app.env?region=us-east-1"),
        baseline(),
        &fetcher,
    )
    .await
    .unwrap();

    assert_eq!(plan.env.get("FOO"), Some(OsStr::new("local")));
    assert_eq!(plan.env.get("BAR"), Some(OsStr::new("remote")));
    assert_eq!(plan.env.iter().filter(|(k, _)| *k == "FOO").count(), 1);
    assert_eq!(
        fetcher.requests.borrow().as_slice(),
        ["s3://bucket/app.env?region=us-east-1"]
    );
}

#[tokio::test]
async fn test_no_locator_passes_env_through() {
    let fetcher = FakeFetcher::default();
    let plan = prepare_launch(&["s3dotenv", "sh"], None, baseline(), &fetcher)
        .await
        .unwrap();

    assert_eq!(plan.env.len(), 2);
    assert!(fetcher.requests.borrow().is_empty());
}

#[tokio::test]
async fn test_missing_program_skips_fetch() {
    let fetcher = FakeFetcher::default();
    let err = prepare_launch(&["s3dotenv"], Some("s3://bucket/key"), baseline(), &fetcher)
        .await
        .unwrap_err();

    assert!(matches!(err, LaunchError::Usage(_)));
    assert!(fetcher.requests.borrow().is_empty());
}

#[tokio::test]
async fn test_unknown_program_skips_fetch() {
    let fetcher = FakeFetcher::default();
    let err = prepare_launch(
        &["s3dotenv", "s3dotenv-no-such-program-7d1e"],
        Some("s3://bucket/key"),
        baseline(),
        &fetcher,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, LaunchError::Process(_)));
    assert!(fetcher.requests.borrow().is_empty());
}

#[tokio::test]
async fn test_wrong_scheme_skips_fetch() {
    let fetcher = FakeFetcher::default();
    let err = prepare_launch(
        &["s3dotenv", "sh"],
        Some("http://bucket/key"),
        baseline(),
        &fetcher,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, LaunchError::Locator(_)));
    assert!(fetcher.requests.borrow().is_empty());
}

#[tokio::test]
async fn test_fetch_error_is_wrapped() {
    let fetcher = FakeFetcher {
        fail: true,
        ..FakeFetcher::default()
    };
    let err = prepare_launch(&["s3dotenv", "sh"], Some("s3://bucket/key"), baseline(), &fetcher)
        .await
        .unwrap_err();

    insta::assert_snapshot!(
        err.to_string(),
        @"download from S3: S3 GetObject s3://bucket/key: AccessDenied"
    );
}

#[tokio::test]
async fn test_malformed_env_file_is_error() {
    let fetcher = FakeFetcher {
        body: "OK=1\nnot an assignment\n",
        ..FakeFetcher::default()
    };
    let err = prepare_launch(&["s3dotenv", "sh"], Some("s3://bucket/key"), baseline(), &fetcher)
        .await
        .unwrap_err();

    assert!(matches!(err, LaunchError::EnvFile(_)));
}
