// s3dotenv: exec a program with environment loaded from S3
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Program resolution and process replacement.
//!
//! ```text
//! invocation [s3dotenv, prog, a, b]
//!       |
//!       v
//! resolve_program()  which::which(prog) --> ResolvedProgram
//!       |                                   path  /usr/bin/prog
//!       |                                   argv  [prog, a, b]
//!       v
//! ResolvedProgram::exec(MergedEnv)
//!       execve(path, argv, env)   never returns on success
//! ```

mod exec;
mod resolve;


#[cfg(unix)]
pub use exec::ExecImage;
pub use resolve::{ResolvedProgram, resolve_program};
