//! Declarative environment bindings.
//!
//! Responsibilities:
//! - Describe how one struct field is sourced from one environment variable
//!   (`Binding`: key, literal default, separator, typed setter).
//! - Populate a struct from a binding table with `bind`.
//!
//! Does NOT handle:
//! - Knowing which variables exist (see env.rs for the `Config` table).
//! - Dotenv loading (see dotenv.rs).
//!
//! Invariants:
//! - Only an unset variable falls back to the default.
//! - A variable set to the empty string, or an unset one without a default,
//!   leaves the field at `T::default()`.
//! - Set values are used exactly as written, never trimmed.
//! - List values keep their declared order and are not deduplicated.
//! - Conversion failures return `ConfigError::InvalidValue` naming the variable.

use std::path::PathBuf;

use super::error::ConfigError;

/// Separator used for list fields that do not declare one.
pub const DEFAULT_SEPARATOR: &str = ",";

/// Typed field accessor. The variant decides how the raw string is parsed.
pub enum Setter<T> {
    Text(fn(&mut T) -> &mut String),
    Path(fn(&mut T) -> &mut PathBuf),
    Flag(fn(&mut T) -> &mut bool),
    Port(fn(&mut T) -> &mut u16),
    List(fn(&mut T) -> &mut Vec<String>),
}

/// One row of a binding table.
pub struct Binding<T> {
    pub key: &'static str,
    pub default: Option<&'static str>,
    pub separator: Option<&'static str>,
    pub setter: Setter<T>,
}

impl<T> Binding<T> {
    pub const fn new(key: &'static str, setter: Setter<T>) -> Self {
        Self {
            key,
            default: None,
            separator: None,
            setter,
        }
    }

    pub fn with_default(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_separator(mut self, separator: &'static str) -> Self {
        self.separator = Some(separator);
        self
    }

    /// Parse `raw` and store it in the field of `target`.
    fn apply(&self, target: &mut T, raw: &str) -> Result<(), ConfigError> {
        match &self.setter {
            Setter::Text(field) => *field(target) = raw.to_string(),
            Setter::Path(field) => *field(target) = PathBuf::from(raw),
            Setter::Flag(field) => *field(target) = parse_flag(self.key, raw)?,
            Setter::Port(field) => *field(target) = parse_port(self.key, raw)?,
            Setter::List(field) => {
                let separator = self.separator.unwrap_or(DEFAULT_SEPARATOR);
                *field(target) = raw.split(separator).map(str::to_string).collect();
            }
        }
        Ok(())
    }
}

/// Populate a `T` from `bindings`, reading raw values through `lookup`.
///
/// `lookup` returns `None` for absent variables. An empty value is present:
/// it suppresses the default and leaves the zero value, so `XIANG_PORT=`
/// yields port 0 rather than a parse error.
pub fn bind<T, F>(bindings: &[Binding<T>], lookup: F) -> Result<T, ConfigError>
where
    T: Default,
    F: Fn(&str) -> Option<String>,
{
    let mut target = T::default();
    for binding in bindings {
        let raw = lookup(binding.key);
        match (raw.as_deref(), binding.default) {
            (Some(""), _) | (None, None) => {}
            (Some(value), _) => binding.apply(&mut target, value)?,
            (None, Some(default)) => binding.apply(&mut target, default)?,
        }
    }
    Ok(target)
}

/// Boolean grammar shared with common env parsers:
/// `1 t T TRUE true True` and `0 f F FALSE false False`.
fn parse_flag(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: key.to_string(),
            message: format!("must be true or false (got '{raw}')"),
        }),
    }
}

fn parse_port(key: &str, raw: &str) -> Result<u16, ConfigError> {
    raw.parse().map_err(|_| ConfigError::InvalidValue {
        var: key.to_string(),
        message: format!("must be a port number between 0 and 65535 (got '{raw}')"),
    })
}
