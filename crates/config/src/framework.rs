//! Web framework runtime settings.
//!
//! The HTTP layer reads its run mode and default writer from here instead of
//! from process globals. Serving itself lives outside this crate.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::logging::LogOutput;

/// Framework strictness. `Debug` is what a fresh framework starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameworkMode {
    #[default]
    Debug,
    Release,
}

impl FrameworkMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            FrameworkMode::Debug => "debug",
            FrameworkMode::Release => "release",
        }
    }
}

impl fmt::Display for FrameworkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Run mode plus the writer used for access and debug output.
#[derive(Debug, Clone)]
pub struct Framework {
    mode: FrameworkMode,
    default_writer: LogOutput,
}

impl Framework {
    pub fn new(default_writer: LogOutput) -> Self {
        Self {
            mode: FrameworkMode::default(),
            default_writer,
        }
    }

    pub fn mode(&self) -> FrameworkMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: FrameworkMode) {
        self.mode = mode;
    }

    pub fn default_writer(&self) -> &LogOutput {
        &self.default_writer
    }
}
