//! Configuration loader for environment variables and dotenv files.
//!
//! Responsibilities:
//! - Bind environment variables to `Config` fields through a declarative table.
//! - Overlay a `.env` file onto the process environment before parsing.
//! - Provide `load()` / `load_from()` and the `ConfigLoader` builder.
//!
//! Does NOT handle:
//! - Logging or run-mode side effects of a loaded config (see `context.rs`).
//!
//! Invariants / Assumptions:
//! - Dotenv values override variables already present in the environment.
//! - The `DOTENV_DISABLED` variable is checked before `.env` auto-detection.

mod binding;
mod builder;
mod dotenv;
mod env;
mod error;

#[cfg(test)]
mod tests;

pub use binding::{Binding, DEFAULT_SEPARATOR, Setter, bind};
pub use builder::{ConfigLoader, load, load_from};
pub use dotenv::{detect_dotenv, dotenv_disabled, overlay_dotenv};
pub use env::{config_bindings, env_var_or_none, read_env};
pub use error::ConfigError;
