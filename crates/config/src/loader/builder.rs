//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide `ConfigLoader`, which optionally overlays a dotenv file and then
//!   reads the environment into a `Config`.
//! - Normalize the root path to an absolute path after parsing.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Dotenv grammar (delegated to dotenv.rs / dotenvy).
//! - Applying the loaded mode to logging (see context.rs).
//!
//! Invariants / Assumptions:
//! - Dotenv failures are logged and skipped; the load continues with whatever
//!   the environment holds.
//! - Conversion failures are returned; callers treat them as fatal.
//! - `Config::root` is absolute on success.

use std::path::{Path, PathBuf};

use super::dotenv::{detect_dotenv, overlay_dotenv};
use super::env::read_env;
use super::error::ConfigError;
use crate::types::Config;

/// Configuration loader reading the environment with an optional dotenv overlay.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    env_file: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader that reads the environment only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay `path` onto the environment before reading it.
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    pub fn env_file(&self) -> Option<&Path> {
        self.env_file.as_deref()
    }

    /// Loader for the `.env` in the working directory, if there is one.
    pub fn detect() -> Option<Self> {
        detect_dotenv().map(|path| Self::new().with_env_file(path))
    }

    /// Run the overlay (if configured) and build the configuration.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if let Some(path) = &self.env_file {
            apply_env_file(path);
        }
        build()
    }
}

/// Read the current environment into a `Config` without any file overlay.
pub fn load() -> Result<Config, ConfigError> {
    ConfigLoader::new().load()
}

/// Overlay the dotenv file at `path`, then read the environment.
pub fn load_from(path: impl Into<PathBuf>) -> Result<Config, ConfigError> {
    ConfigLoader::new().with_env_file(path).load()
}

fn apply_env_file(path: &Path) {
    let file = match std::path::absolute(path) {
        Ok(file) => file,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Can't resolve env file path");
            path.to_path_buf()
        }
    };

    match overlay_dotenv(&file) {
        Ok(()) => tracing::debug!(path = %file.display(), "Loaded env file"),
        Err(e) => tracing::warn!(path = %file.display(), error = %e, "Can't load env file"),
    }
}

fn build() -> Result<Config, ConfigError> {
    let mut config = read_env()?;
    config.root = std::path::absolute(&config.root).map_err(|source| ConfigError::RootPath {
        path: config.root.clone(),
        source,
    })?;
    Ok(config)
}
