//! Configuration types for the Xiang engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Resolved application configuration.
///
/// `Default` yields the zero value of every field, which is what a field
/// without a declared default ends up with. The declared defaults live in the
/// binding table (see `loader::config_bindings`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Run mode tag, normally `production` or `development`.
    pub mode: String,
    /// Application root. Always absolute once loaded.
    pub root: PathBuf,
    /// Log file path. Empty means no file logging.
    pub log: PathBuf,
    /// Log format selector, `TEXT` or `JSON`.
    pub log_mode: String,
    pub service: ServiceConfig,
    pub session: SessionConfig,
}

impl Config {
    /// The recognized run mode, if the tag is one of the known values.
    pub fn run_mode(&self) -> Option<Mode> {
        self.mode.parse().ok()
    }

    pub fn is_debug(&self) -> bool {
        self.run_mode() == Some(Mode::Development)
    }

    /// Formatter requested by `log_mode`. Anything but `JSON` means text.
    pub fn log_format(&self) -> LogFormat {
        if self.log_mode.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }

    /// Whether a log file is configured at all.
    pub fn has_log_file(&self) -> bool {
        !self.log.as_os_str().is_empty()
    }
}

/// HTTP service settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub debug: bool,
    pub https: bool,
    /// TLS certificate path, used when `https` is on.
    pub cert: PathBuf,
    /// TLS private key path, used when `https` is on.
    pub key: PathBuf,
    /// Allowed CORS origins, in declaration order.
    pub allow: Vec<String>,
    pub host: String,
    pub port: u16,
}

/// Session server settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub debug: bool,
    /// Whether this process hosts the session server.
    pub hosting: bool,
    /// Set when the process was started from the command line client.
    pub iscli: bool,
    pub host: String,
    pub port: u16,
}

/// Operational profile selecting log verbosity and framework strictness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Production,
    Development,
}

impl Mode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Production => "production",
            Mode::Development => "development",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    /// Tags are matched exactly; `Production` is not a mode.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "production" => Ok(Mode::Production),
            "development" => Ok(Mode::Development),
            other => Err(format!(
                "unknown mode '{other}' (expected production or development)"
            )),
        }
    }
}

/// Log line formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}
