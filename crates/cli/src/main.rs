//! Xiang CLI - inspect and validate the application configuration.
//!
//! Responsibilities:
//! - Install the reloadable log subscriber before anything is loaded.
//! - Bootstrap the configuration from `--env-file` or the working directory.
//! - Apply a forced run mode and dispatch the subcommand.
//!
//! Does NOT handle:
//! - Variable parsing, dotenv overlay, or log file management (see `xiang-config`).
//!
//! Invariants:
//! - Logging is installed BEFORE loading so dotenv warnings are visible.
//! - The log file is closed before the process exits.

mod args;
mod commands;
mod error;

use anyhow::Result;
use args::Cli;
use clap::Parser;
use commands::run_command;
use error::{ExitCode, ExitCodeExt};
use std::path::Path;
use xiang_config::{AppContext, ConfigError, LogOutput, Logging};

fn main() {
    let cli = Cli::parse();

    let logging = match Logging::init(LogOutput::new()) {
        Ok(logging) => logging,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let exit_code = match run(&cli, logging) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn run(cli: &Cli, logging: Logging) -> Result<()> {
    let mut context = bootstrap(cli.env_file(), logging)?;

    if let Some(mode) = cli.mode {
        context.set_mode(mode.into());
    }

    let result = run_command(cli.command(), &context, &mut std::io::stdout().lock());
    context.close_log();
    result
}

fn bootstrap(env_file: Option<&Path>, logging: Logging) -> Result<AppContext> {
    let loaded = match env_file {
        Some(path) => AppContext::bootstrap_from(path, logging),
        None => AppContext::bootstrap(logging),
    };
    loaded.map_err(|e: ConfigError| {
        let status = e.status_code();
        anyhow::Error::new(e).context(format!("Failed to load configuration (status {status})"))
    })
}
