// s3dotenv: exec a program with environment loaded from S3
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)         cmd::launch
//!                |             prepare_launch
//!                v                     |
//!         config (layered)    +--------+---------+
//!                             v        v         v
//!                          remote   envfile   core
//!                         locator   dotenvy   process: resolve, exec
//!                         S3 fetch            env: merge
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod envfile;
pub mod error;
pub mod logging;
pub mod remote;
