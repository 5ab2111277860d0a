//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//! - Expose an HTTP-like status code for the fatal startup path.
//!
//! Does NOT handle:
//! - Logging of non-fatal failures (done at the call site with `tracing`).
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, paths, etc.).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Unable to resolve root path {path}: {source}")]
    RootPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    /// HTTP-like status code attached to the error.
    ///
    /// Every loading failure is an internal server condition; the binary uses
    /// this when reporting a failed startup.
    pub const fn status_code(&self) -> u16 {
        500
    }

    /// Whether the failure must abort startup.
    ///
    /// Dotenv failures are reported and skipped; everything else is fatal.
    pub const fn is_fatal(&self) -> bool {
        !matches!(
            self,
            ConfigError::DotenvParse { .. } | ConfigError::DotenvIo { .. } | ConfigError::DotenvUnknown
        )
    }
}

impl From<dotenvy::Error> for ConfigError {
    fn from(error: dotenvy::Error) -> Self {
        match error {
            dotenvy::Error::LineParse(_, idx) => ConfigError::DotenvParse { error_index: idx },
            dotenvy::Error::Io(io_err) => ConfigError::DotenvIo {
                kind: io_err.kind(),
            },
            _ => ConfigError::DotenvUnknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_is_internal_error() {
        let err = ConfigError::InvalidValue {
            var: "XIANG_SERVICE_PORT".to_string(),
            message: "must be a port number".to_string(),
        };
        assert_eq!(err.status_code(), 500);
        assert!(err.is_fatal());
        assert_eq!(
            err.to_string(),
            "Invalid value for XIANG_SERVICE_PORT: must be a port number"
        );
    }

    #[test]
    fn test_dotenv_errors_are_not_fatal() {
        assert!(!ConfigError::DotenvParse { error_index: 3 }.is_fatal());
        assert!(
            !ConfigError::DotenvIo {
                kind: ErrorKind::PermissionDenied
            }
            .is_fatal()
        );
        assert!(!ConfigError::DotenvUnknown.is_fatal());
    }

    #[test]
    fn test_dotenv_parse_error_never_carries_line_content() {
        let secret = "XIANG_SECRET=hunter2-very-secret";
        let err = ConfigError::from(dotenvy::Error::LineParse(secret.to_string(), 7));
        let rendered = err.to_string();
        assert!(!rendered.contains("hunter2"), "leaked: {rendered}");
        assert!(rendered.contains("position 7"));
    }
}
