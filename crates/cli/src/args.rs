//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Map the `--mode` value onto the library's run mode.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).
//! - Does not load configuration (see `main`).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use xiang_config::Mode;
use xiang_config::constants::ENV_ENV_FILE;

#[derive(Parser, Debug)]
#[command(name = "xiang")]
#[command(about = "Xiang - inspect and validate the application configuration", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  xiang show\n  xiang --env-file deploy/production.env check\n  xiang --mode development show --compact\n"
)]
pub struct Cli {
    /// Dotenv file to load instead of `.env` in the working directory.
    ///
    /// Blank values are ignored and fall back to auto-detection.
    #[arg(long, global = true, env = ENV_ENV_FILE, value_name = "FILE")]
    pub env_file: Option<PathBuf>,

    /// Run mode to force after loading, regardless of XIANG_MODE.
    #[arg(long, global = true, value_enum)]
    pub mode: Option<ModeArg>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The explicitly selected dotenv file, if it is not blank.
    pub fn env_file(&self) -> Option<&Path> {
        self.env_file
            .as_deref()
            .filter(|path| !path.to_string_lossy().trim().is_empty())
    }

    /// The subcommand to run; `show` when none was given.
    pub fn command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Show { compact: false })
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the resolved configuration as JSON
    Show {
        /// Print on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Load the configuration and report a summary
    Check,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    Production,
    Development,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Production => Mode::Production,
            ModeArg::Development => Mode::Development,
        }
    }
}
