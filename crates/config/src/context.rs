//! Application context: the loaded configuration together with the logging
//! and framework state it drives.
//!
//! Responsibilities:
//! - Bootstrap from the working directory (`.env` auto-detection).
//! - Switch between production and development run modes.
//! - Drive the log output lifecycle from `Config::log`.
//!
//! Does NOT handle:
//! - Parsing variables (see loader/) or owning the file handle (see logging.rs).
//!
//! Invariants:
//! - A mode switch always ends with a log reload, so at most one file is open.
//! - A failed config reload leaves the previous config in place.

use tracing_subscriber::filter::LevelFilter;

use crate::framework::{Framework, FrameworkMode};
use crate::loader::{ConfigError, ConfigLoader, detect_dotenv, load, load_from};
use crate::logging::Logging;
use crate::types::{Config, Mode};

/// Log level selected by a run mode.
pub const fn level_for(mode: Mode) -> LevelFilter {
    match mode {
        Mode::Production => LevelFilter::ERROR,
        Mode::Development => LevelFilter::TRACE,
    }
}

/// Framework mode selected by a run mode.
pub const fn framework_mode_for(mode: Mode) -> FrameworkMode {
    match mode {
        Mode::Production => FrameworkMode::Release,
        Mode::Development => FrameworkMode::Debug,
    }
}

/// Composition root for configuration-driven runtime state.
#[derive(Debug)]
pub struct AppContext {
    config: Config,
    logging: Logging,
    framework: Framework,
}

impl AppContext {
    /// Wrap an already loaded config. The framework writes through the
    /// logging output.
    pub fn new(config: Config, logging: Logging) -> Self {
        let framework = Framework::new(logging.output().clone());
        Self {
            config,
            logging,
            framework,
        }
    }

    /// Load the configuration the way a fresh process does.
    ///
    /// Without a `.env` in the working directory the environment is read as
    /// is and logging keeps its runtime defaults. With one, the file is
    /// overlaid and its mode tag, when recognized, is applied.
    pub fn bootstrap(logging: Logging) -> Result<Self, ConfigError> {
        match detect_dotenv() {
            Some(path) => Self::bootstrap_from(path, logging),
            None => Ok(Self::new(load()?, logging)),
        }
    }

    /// Overlay `path`, load, and apply the configured mode.
    pub fn bootstrap_from(
        path: impl Into<std::path::PathBuf>,
        logging: Logging,
    ) -> Result<Self, ConfigError> {
        let mut context = Self::new(load_from(path)?, logging);
        context.apply_configured_mode();
        Ok(context)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn logging(&self) -> &Logging {
        &self.logging
    }

    pub fn framework(&self) -> &Framework {
        &self.framework
    }

    /// Load again with `loader` and replace the config wholesale.
    ///
    /// Logging is not touched; call `apply_configured_mode` to re-apply.
    pub fn reload_config(&mut self, loader: &ConfigLoader) -> Result<(), ConfigError> {
        self.config = loader.load()?;
        tracing::debug!(mode = %self.config.mode, "Configuration reloaded");
        Ok(())
    }

    /// Apply the mode named by `config.mode`, if it is a known tag.
    ///
    /// Returns the applied mode. Unknown or empty tags leave logging and
    /// framework state untouched.
    pub fn apply_configured_mode(&mut self) -> Option<Mode> {
        let mode = self.config.run_mode()?;
        self.set_mode(mode);
        Some(mode)
    }

    pub fn set_production(&mut self) {
        self.set_mode(Mode::Production);
    }

    pub fn set_development(&mut self) {
        self.set_mode(Mode::Development);
    }

    /// Set the mode tag, log level, log format and framework mode, then
    /// reload the log output.
    pub fn set_mode(&mut self, mode: Mode) {
        self.config.mode = mode.as_str().to_string();
        self.logging.set_level(level_for(mode));
        self.logging.set_format(self.config.log_format());
        self.framework.set_mode(framework_mode_for(mode));
        self.reload_log();
        tracing::info!(
            mode = %mode,
            level = %self.logging.level(),
            framework = %self.framework.mode(),
            "Run mode applied"
        );
    }

    pub fn open_log(&self) {
        self.logging.output().open(&self.config.log);
    }

    pub fn close_log(&self) {
        self.logging.output().close();
    }

    pub fn reload_log(&self) {
        self.logging.output().reload(&self.config.log);
    }
}
