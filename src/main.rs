// s3dotenv: exec a program with environment loaded from S3
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> prepare_launch --> drop log guard --> exec
//!                                               |                                |
//!                                            Err: print, exit 1          Err: print, exit 1
//! ```

use std::process::ExitCode;

use s3dotenv::cli;
use s3dotenv::cli::global::GlobalOptions;
use s3dotenv::cmd::launch::prepare_launch;
use s3dotenv::config::loader::ConfigLoader;
use s3dotenv::config::{Config, ENV_PREFIX};
use s3dotenv::core::env::ProcessEnv;
use s3dotenv::logging::{LogConfig, init_logging};
use s3dotenv::remote::S3Fetcher;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_guard = match init_logging(&build_log_config(&config)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let invocation = cli.invocation(std::env::args_os().next());
    let fetcher = S3Fetcher::new(config.s3());
    let plan = match prepare_launch(
        &invocation,
        cli.global.locator(),
        ProcessEnv::current(),
        &fetcher,
    )
    .await
    {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Nothing runs after a successful exec, so flush the log file now.
    drop(log_guard);
    let e = plan.exec();
    eprintln!("Error: {e}");
    ExitCode::FAILURE
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.log_level)
        .maybe_with_log_file(config.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn load_config(global: &GlobalOptions) -> s3dotenv::error::Result<Config> {
    let loader = ConfigLoader::new().with_env_prefix(ENV_PREFIX);
    global.apply_to(loader)?.build()
}
