// s3dotenv: exec a program with environment loaded from S3
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote env file access.
//!
//! ```text
//! S3DOTENV="s3://bucket/key?region=r"
//!        |
//!        v
//!   S3Locator::parse()        pure validation, no network
//!        |
//!        v
//!   ObjectFetcher::fetch()
//!     S3Fetcher: aws-config session (region) -> GetObject (no retry)
//!        |
//!        v
//!   scratch file (anonymous tempfile, rewound)
//! ```

mod fetch;
mod locator;


pub use fetch::{ObjectFetcher, S3Fetcher};
pub use locator::{S3_SCHEME, S3Locator};
