//! Environment-driven configuration for the Xiang application server.
//!
//! This crate loads the process configuration from `XIANG_*` environment
//! variables (optionally overlaid from a `.env` file), applies the run mode
//! to logging and framework state, and manages the shared log file.

pub mod constants;
pub mod context;
pub mod framework;
mod loader;
pub mod logging;
pub mod types;

pub use context::AppContext;
pub use framework::{Framework, FrameworkMode};
pub use loader::{
    Binding, ConfigError, ConfigLoader, DEFAULT_SEPARATOR, Setter, bind, config_bindings,
    detect_dotenv, dotenv_disabled, env_var_or_none, load, load_from, overlay_dotenv, read_env,
};
pub use logging::{LogOutput, Logging, LoggingError};
pub use types::{Config, LogFormat, Mode, ServiceConfig, SessionConfig};
