// s3dotenv: exec a program with environment loaded from S3
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for process and environment management.
//!
//! ```text
//!        core
//!         |
//!    +----+-----+
//!    v          v
//!   env      process
//!    |          |
//! ProcessEnv  resolve_program (which)
//! merge()     ResolvedProgram::exec (execve)
//! MergedEnv
//! ```

pub mod env;
pub mod process;
