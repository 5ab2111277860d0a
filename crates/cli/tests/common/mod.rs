//! Shared test utilities for xiang integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - No `XIANG_*` variable from the host reaches the child process.

use assert_cmd::Command;
use xiang_config::constants::{ALL_ENV_VARS, ENV_DOTENV_DISABLED, ENV_ENV_FILE};

/// Returns a hermetic `xiang` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `XIANG_*` variables are cleared to ensure no leakage from the host.
pub fn xiang_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("xiang");

    // Hermeticity: prevent loading local .env
    cmd.env(ENV_DOTENV_DISABLED, "1");

    // Clear potential host leakage
    for key in ALL_ENV_VARS {
        cmd.env_remove(key);
    }
    cmd.env_remove(ENV_ENV_FILE);
    for (key, _) in std::env::vars() {
        if key.starts_with("XIANG_") {
            cmd.env_remove(&key);
        }
    }

    cmd
}

/// Parse the JSON printed by `xiang show`.
#[allow(dead_code)]
pub fn parse_show(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).expect("show should print JSON")
}
