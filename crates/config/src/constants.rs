//! Centralized constants for the Xiang workspace.
//!
//! Environment variable names and their literal defaults live here so the
//! binding table, the tests and the CLI agree on a single spelling.

// =============================================================================
// Engine
// =============================================================================

/// Run mode tag (`production` / `development`).
pub const ENV_MODE: &str = "XIANG_MODE";

/// Application root directory.
pub const ENV_ROOT: &str = "XIANG_ROOT";

/// Log file path. Empty keeps logging on standard error.
pub const ENV_LOG: &str = "XIANG_LOG";

/// Log format selector (`TEXT` / `JSON`).
pub const ENV_LOG_MODE: &str = "XIANG_LOG_MODE";

/// Alternative dotenv file consulted by the CLI instead of `./.env`.
pub const ENV_ENV_FILE: &str = "XIANG_ENV_FILE";

/// Skips `.env` auto-detection when set to `1` or `true`.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

pub const DEFAULT_MODE: &str = "production";
pub const DEFAULT_ROOT: &str = ".";
pub const DEFAULT_LOG_MODE: &str = "TEXT";

/// Conventional dotenv filename looked up in the working directory.
pub const DOTENV_FILENAME: &str = ".env";

// =============================================================================
// Service
// =============================================================================

pub const ENV_SERVICE_DEBUG: &str = "XIANG_SERVICE_DEBUG";
pub const ENV_SERVICE_HTTPS: &str = "XIANG_SERVICE_HTTPS";
pub const ENV_SERVICE_CERT: &str = "XIANG_SERVICE_CERT";
pub const ENV_SERVICE_KEY: &str = "XIANG_SERVICE_KEY";
pub const ENV_SERVICE_ALLOW: &str = "XIANG_SERVICE_ALLOW";
pub const ENV_SERVICE_HOST: &str = "XIANG_SERVICE_HOST";
pub const ENV_SERVICE_PORT: &str = "XIANG_SERVICE_PORT";

pub const DEFAULT_SERVICE_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVICE_PORT: u16 = 5099;

// =============================================================================
// Session
// =============================================================================

pub const ENV_SESSION_DEBUG: &str = "XIANG_SESSION_DEBUG";
pub const ENV_SESSION_HOSTING: &str = "XIANG_SESSION_HOSTING";
pub const ENV_SESSION_ISCLI: &str = "XIANG_SESSION_ISCLI";
pub const ENV_SESSION_HOST: &str = "XIANG_SESSION_HOST";
pub const ENV_SESSION_PORT: &str = "XIANG_SESSION_PORT";

pub const DEFAULT_SESSION_HOST: &str = "127.0.0.1";
pub const DEFAULT_SESSION_PORT: u16 = 3322;

/// Separator for multi-valued variables such as the CORS allow-list.
pub const LIST_SEPARATOR: &str = "|";

/// Every variable the binding table reads. Handy for clearing the
/// environment in tests and subprocesses.
pub const ALL_ENV_VARS: &[&str] = &[
    ENV_MODE,
    ENV_ROOT,
    ENV_LOG,
    ENV_LOG_MODE,
    ENV_SERVICE_DEBUG,
    ENV_SERVICE_HTTPS,
    ENV_SERVICE_CERT,
    ENV_SERVICE_KEY,
    ENV_SERVICE_ALLOW,
    ENV_SERVICE_HOST,
    ENV_SERVICE_PORT,
    ENV_SESSION_DEBUG,
    ENV_SESSION_HOSTING,
    ENV_SESSION_ISCLI,
    ENV_SESSION_HOST,
    ENV_SESSION_PORT,
];
