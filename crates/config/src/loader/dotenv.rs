//! Dotenv overlay.
//!
//! Responsibilities:
//! - Load `KEY=VALUE` lines from a file into the process environment,
//!   overwriting variables that are already set.
//! - Detect the conventional `.env` file in the working directory.
//!
//! Does NOT handle:
//! - Parsing the environment into `Config` (see env.rs).
//! - Deciding whether a failure is fatal (callers log and continue).
//!
//! Invariants:
//! - A missing file is not an error.
//! - Errors never include raw .env line contents.
//! - A file is applied whole or not at all: a malformed line anywhere leaves
//!   the environment untouched.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use crate::constants::{DOTENV_FILENAME, ENV_DOTENV_DISABLED};

/// Check if dotenv loading is disabled via environment variable.
pub fn dotenv_disabled() -> bool {
    matches!(
        std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Overlay the variables defined in `path` onto the process environment.
///
/// Existing variables with the same name are replaced. The whole file is
/// parsed before anything is set. A file that does not exist leaves the
/// environment untouched and returns `Ok`.
///
/// # Errors
///
/// - `ConfigError::DotenvParse` when a line has invalid syntax.
/// - `ConfigError::DotenvIo` when the file exists but cannot be read.
pub fn overlay_dotenv(path: &Path) -> Result<(), ConfigError> {
    let entries = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter.collect::<Result<Vec<(String, String)>, _>>()?,
        Err(dotenvy::Error::Io(io_err)) if io_err.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e.into()),
    };

    for (key, value) in entries {
        // SAFETY: loading runs during startup or reload, before worker threads
        // read the environment.
        unsafe {
            std::env::set_var(key, value);
        }
    }
    Ok(())
}

/// Absolute path of `.env` in the working directory, when one exists.
///
/// Returns `None` when the file is absent, when the working directory cannot
/// be resolved, or when `DOTENV_DISABLED` is set.
pub fn detect_dotenv() -> Option<PathBuf> {
    if dotenv_disabled() {
        return None;
    }
    let candidate = std::path::absolute(DOTENV_FILENAME).ok()?;
    candidate.is_file().then_some(candidate)
}
