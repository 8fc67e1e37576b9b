// s3dotenv: exec a program with environment loaded from S3
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::error::LocatorError;

/// The only accepted URL scheme.
pub const S3_SCHEME: &str = "s3";

/// A validated `s3://bucket/key[?region=...]` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Locator {
    bucket: String,
    key: String,
    region: Option<String>,
}

impl S3Locator {
    /// Parses and validates an env file URL.
    ///
    /// The key is the URL path with its single leading `/` removed and
    /// percent-escapes decoded. An empty `region` parameter counts as absent.
    ///
    /// # Errors
    ///
    /// Returns a [`LocatorError`] if `raw` is not a URL, uses a scheme other
    /// than `s3`, or lacks a bucket or key.
    pub fn parse(raw: &str) -> Result<Self, LocatorError> {
        let url = Url::parse(raw).map_err(|source| LocatorError::InvalidUrl {
            url: raw.to_string(),
            source,
        })?;

        if url.scheme() != S3_SCHEME {
            return Err(LocatorError::WrongScheme {
                scheme: url.scheme().to_string(),
            });
        }

        let bucket = url
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| LocatorError::MissingBucket {
                url: raw.to_string(),
            })?
            .to_string();

        let path = url.path();
        let path = path.strip_prefix('/').unwrap_or(path);
        let key = percent_decode_str(path).decode_utf8_lossy().into_owned();
        if key.is_empty() {
            return Err(LocatorError::MissingKey {
                url: raw.to_string(),
            });
        }

        let region = url
            .query_pairs()
            .find(|(name, _)| name == "region")
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty());

        Ok(Self {
            bucket,
            key,
            region,
        })
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Region selected by the `region` query parameter, if any.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl fmt::Display for S3Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{S3_SCHEME}://{}/{}", self.bucket, self.key)?;
        if let Some(region) = &self.region {
            write!(f, "?region={region}")?;
        }
        Ok(())
    }
}
