//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Declare the binding table mapping every `Config` field to its variable.
//! - Read the process environment into a `Config` (`read_env`).
//! - Provide the raw variable lookup used by the table.
//!
//! Does NOT handle:
//! - Path post-processing (see builder.rs).
//! - .env file loading (see dotenv.rs).
//!
//! Invariants:
//! - Only unset variables count as absent; empty values are present.
//! - Values are passed to the table exactly as set.
//! - Invalid flag or port values return ConfigError::InvalidValue.

use super::binding::{Binding, Setter, bind};
use super::error::ConfigError;
use crate::constants::*;
use crate::types::Config;

/// Read an environment variable, returning None if it is unset or not valid
/// unicode. Empty and padded values are returned as they are.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Binding table for `Config`.
pub fn config_bindings() -> Vec<Binding<Config>> {
    vec![
        Binding::new(ENV_MODE, Setter::Text(|c: &mut Config| &mut c.mode)).with_default(DEFAULT_MODE),
        Binding::new(ENV_ROOT, Setter::Path(|c: &mut Config| &mut c.root)).with_default(DEFAULT_ROOT),
        Binding::new(ENV_LOG, Setter::Path(|c: &mut Config| &mut c.log)),
        Binding::new(ENV_LOG_MODE, Setter::Text(|c: &mut Config| &mut c.log_mode))
            .with_default(DEFAULT_LOG_MODE),
        // Service
        Binding::new(ENV_SERVICE_DEBUG, Setter::Flag(|c: &mut Config| &mut c.service.debug))
            .with_default("false"),
        Binding::new(ENV_SERVICE_HTTPS, Setter::Flag(|c: &mut Config| &mut c.service.https))
            .with_default("false"),
        Binding::new(ENV_SERVICE_CERT, Setter::Path(|c: &mut Config| &mut c.service.cert)),
        Binding::new(ENV_SERVICE_KEY, Setter::Path(|c: &mut Config| &mut c.service.key)),
        Binding::new(ENV_SERVICE_ALLOW, Setter::List(|c: &mut Config| &mut c.service.allow))
            .with_separator(LIST_SEPARATOR),
        Binding::new(ENV_SERVICE_HOST, Setter::Text(|c: &mut Config| &mut c.service.host))
            .with_default(DEFAULT_SERVICE_HOST),
        Binding::new(ENV_SERVICE_PORT, Setter::Port(|c: &mut Config| &mut c.service.port))
            .with_default("5099"),
        // Session
        Binding::new(ENV_SESSION_DEBUG, Setter::Flag(|c: &mut Config| &mut c.session.debug))
            .with_default("false"),
        Binding::new(ENV_SESSION_HOSTING, Setter::Flag(|c: &mut Config| &mut c.session.hosting))
            .with_default("true"),
        Binding::new(ENV_SESSION_ISCLI, Setter::Flag(|c: &mut Config| &mut c.session.iscli))
            .with_default("false"),
        Binding::new(ENV_SESSION_HOST, Setter::Text(|c: &mut Config| &mut c.session.host))
            .with_default(DEFAULT_SESSION_HOST),
        Binding::new(ENV_SESSION_PORT, Setter::Port(|c: &mut Config| &mut c.session.port))
            .with_default("3322"),
    ]
}

/// Read the process environment into a `Config`.
///
/// The environment is only read, never written.
pub fn read_env() -> Result<Config, ConfigError> {
    bind(&config_bindings(), env_var_or_none)
}

impl Config {
    /// Apply the binding table to the process environment.
    ///
    /// Unlike `load()`, `root` is left as written.
    pub fn from_env() -> Result<Self, ConfigError> {
        read_env()
    }
}
