//! Tests for `load()`, `load_from()` and the `ConfigLoader` builder.
//!
//! Responsibilities:
//! - Test declared defaults and environment overrides.
//! - Test dotenv overlay precedence and failure handling.
//! - Test conversion errors surfaced to callers.
//!
//! Does NOT handle:
//! - Binding table mechanics (tested in binding.rs).
//! - Mode switching and log files (tested in context.rs and logging.rs).
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Every `XIANG_*` variable is cleared for the duration of a test and
//!   restored afterwards, including ones a dotenv overlay sets.

use std::sync::Mutex;

use crate::constants::ALL_ENV_VARS;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Run `f` with every `XIANG_*` variable unset except `overrides`.
pub fn with_clean_env<R>(overrides: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
    let mut vars: Vec<(&str, Option<&str>)> = ALL_ENV_VARS
        .iter()
        .filter(|key| !overrides.iter().any(|(k, _)| k == *key))
        .map(|key| (*key, None))
        .collect();
    vars.extend(overrides.iter().map(|(k, v)| (*k, Some(*v))));
    temp_env::with_vars(vars, f)
}
