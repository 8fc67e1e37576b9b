// s3dotenv: exec a program with environment loaded from S3
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs::File;
use std::future::Future;
use std::io::{Seek, Write};

use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::Client;
use aws_sdk_s3::config::retry::RetryConfig;
use aws_sdk_s3::config::{Credentials, SharedCredentialsProvider};
use aws_sdk_s3::error::DisplayErrorContext;
use tracing::{debug, trace};

use super::S3Locator;
use crate::config::S3Settings;
use crate::error::FetchError;

/// Retrieves the bytes of a remote object.
///
/// Implementations return a scratch file positioned at offset zero. The file
/// is anonymous, so it disappears once the handle is dropped.
pub trait ObjectFetcher {
    /// Fetches the object addressed by `locator`, exactly once.
    fn fetch(&self, locator: &S3Locator) -> impl Future<Output = Result<File, FetchError>>;
}

/// [`ObjectFetcher`] backed by the AWS SDK.
///
/// A new client session is built per fetch, scoped to the locator's region.
/// The SDK retry policy is disabled.
#[derive(Debug, Clone, Default)]
pub struct S3Fetcher {
    settings: S3Settings,
    credentials: Option<SharedCredentialsProvider>,
}

impl S3Fetcher {
    #[must_use]
    pub const fn new(settings: S3Settings) -> Self {
        Self {
            settings,
            credentials: None,
        }
    }

    /// Uses fixed credentials instead of the SDK's default provider chain.
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(SharedCredentialsProvider::new(credentials));
        self
    }

    /// Builds a client for `locator`.
    ///
    /// Region precedence: `?region=` in the URL, then the configured
    /// fallback, then the SDK's own chain (`AWS_REGION`, profile). An empty
    /// region is never handed to the SDK.
    async fn client(&self, locator: &S3Locator) -> Result<Client, FetchError> {
        let region = locator
            .region()
            .or(self.settings.region.as_deref())
            .map(|r| Region::new(r.to_string()));

        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(region);
        }
        if let Some(credentials) = &self.credentials {
            loader = loader.credentials_provider(credentials.clone());
        }
        let sdk_config = loader.load().await;

        let Some(region) = sdk_config.region() else {
            return Err(FetchError::Session {
                message: "no region in URL, S3DOTENV_REGION or AWS configuration".to_string(),
            });
        };
        debug!(%region, endpoint = ?self.settings.endpoint, "creating S3 client");

        let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config)
            .retry_config(RetryConfig::disabled())
            .force_path_style(self.settings.force_path_style);
        if let Some(endpoint) = &self.settings.endpoint {
            builder = builder.endpoint_url(endpoint);
        }

        Ok(Client::from_conf(builder.build()))
    }
}

impl ObjectFetcher for S3Fetcher {
    async fn fetch(&self, locator: &S3Locator) -> Result<File, FetchError> {
        let client = self.client(locator).await?;

        let output = client
            .get_object()
            .bucket(locator.bucket())
            .key(locator.key())
            .send()
            .await
            .map_err(|e| FetchError::GetObject {
                bucket: locator.bucket().to_string(),
                key: locator.key().to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        let mut scratch = tempfile::tempfile().map_err(FetchError::Scratch)?;
        let mut body = output.body;
        let mut written = 0_usize;
        while let Some(chunk) = body.try_next().await.map_err(|e| FetchError::ReadBody {
            message: DisplayErrorContext(&e).to_string(),
        })? {
            scratch.write_all(&chunk).map_err(FetchError::Scratch)?;
            written += chunk.len();
        }
        trace!(bytes = written, "downloaded env file");

        scratch.flush().map_err(FetchError::Close)?;
        scratch.rewind().map_err(FetchError::Close)?;
        Ok(scratch)
    }
}
