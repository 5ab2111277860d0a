//! Log output lifecycle and the reloadable log subscriber.
//!
//! Responsibilities:
//! - Own the single log file handle (`LogOutput`): open, close, reload.
//! - Route formatted log lines to the open file, or to standard error when
//!   no file is open.
//! - Install a `tracing` subscriber whose level and formatter can be swapped
//!   at runtime (`Logging`).
//!
//! Does NOT handle:
//! - Choosing level/format from a run mode (see context.rs).
//!
//! Invariants:
//! - At most one file is open; opening replaces (and closes) the previous one.
//! - Every failure is logged and leaves the output as it was before the step.
//! - No log line is emitted while the output lock is held.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use thiserror::Error;
use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::{Layer, Layered, SubscriberExt};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{Registry, reload};

use crate::types::LogFormat;

/// Level in effect before any run mode is applied.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::INFO;

#[cfg(unix)]
const LOG_DIR_MODE: u32 = 0o777;
#[cfg(unix)]
const LOG_FILE_MODE: u32 = 0o644;

struct OpenLog {
    path: PathBuf,
    file: File,
}

/// Shared log destination.
///
/// Clones share the same handle, so the log subscriber and the framework's
/// default writer always point at the same file.
#[derive(Clone, Default)]
pub struct LogOutput {
    slot: Arc<Mutex<Option<OpenLog>>>,
}

impl LogOutput {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> MutexGuard<'_, Option<OpenLog>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether a log file is currently open.
    pub fn is_open(&self) -> bool {
        self.slot().is_some()
    }

    /// Absolute path of the open log file.
    pub fn path(&self) -> Option<PathBuf> {
        self.slot().as_ref().map(|open| open.path.clone())
    }

    /// Whether `other` is a clone of this output.
    pub fn shares_handle_with(&self, other: &LogOutput) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }

    /// Close the open log file, if any. Output falls back to standard error.
    pub fn close(&self) {
        let previous = self.slot().take();
        let Some(OpenLog { path, file }) = previous else {
            return;
        };

        if let Err(e) = file.sync_all() {
            tracing::error!(file = %path.display(), error = %e, "Failed to flush log file on close");
        }
        drop(file);
    }

    /// Open `log` for appending and route output to it.
    ///
    /// An empty path is a no-op. Missing parent directories are created.
    pub fn open(&self, log: &Path) {
        if log.as_os_str().is_empty() {
            return;
        }

        let path = match std::path::absolute(log) {
            Ok(path) => path,
            Err(e) => {
                tracing::error!(file = %log.display(), error = %e, "Can't resolve log file path");
                return;
            }
        };

        if let Some(dir) = path.parent()
            && !dir.exists()
            && let Err(e) = create_log_dir(dir)
        {
            tracing::error!(file = %path.display(), error = %e, "Can't create log directory");
            return;
        }

        let file = match open_append(&path) {
            Ok(file) => file,
            Err(e) => {
                tracing::error!(file = %path.display(), error = %e, "Can't open log file");
                return;
            }
        };

        let previous = self.slot().replace(OpenLog {
            path: path.clone(),
            file,
        });
        drop(previous);
        tracing::debug!(file = %path.display(), "Log output redirected");
    }

    /// Close then open, unconditionally.
    pub fn reload(&self, log: &Path) {
        self.close();
        self.open(log);
    }
}

impl fmt::Debug for LogOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogOutput")
            .field("path", &self.path())
            .finish()
    }
}

impl Write for LogOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.slot().as_mut() {
            Some(open) => open.file.write(buf),
            None => io::stderr().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.slot().as_mut() {
            Some(open) => open.file.flush(),
            None => io::stderr().flush(),
        }
    }
}

impl<'a> MakeWriter<'a> for LogOutput {
    type Writer = LogOutput;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[cfg(unix)]
fn create_log_dir(dir: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    std::fs::DirBuilder::new()
        .recursive(true)
        .mode(LOG_DIR_MODE)
        .create(dir)
}

#[cfg(not(unix))]
fn create_log_dir(dir: &Path) -> io::Result<()> {
    std::fs::create_dir_all(dir)
}

fn open_append(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.append(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(LOG_FILE_MODE);
    }
    options.open(path)
}

/// Errors raised while installing the log subscriber.
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Failed to install the global log subscriber: {0}")]
    Install(#[from] TryInitError),
}

type FormatLayer = Box<dyn Layer<Registry> + Send + Sync>;
type FormatStack = Layered<reload::Layer<FormatLayer, Registry>, Registry>;

/// Handle on the installed subscriber: current level, formatter and output.
pub struct Logging {
    level: LevelFilter,
    format: LogFormat,
    level_handle: reload::Handle<LevelFilter, FormatStack>,
    format_handle: reload::Handle<FormatLayer, Registry>,
    output: LogOutput,
}

impl Logging {
    /// Build a subscriber writing to `output` without installing it.
    ///
    /// The caller decides where the subscriber goes (`init` installs it
    /// globally; tests scope it with `tracing::subscriber::set_default`).
    pub fn new(output: LogOutput) -> (Self, impl Subscriber + Send + Sync + 'static) {
        let (fmt_layer, format_handle) =
            reload::Layer::new(format_layer(LogFormat::default(), output.clone()));
        let (level_layer, level_handle) = reload::Layer::new(DEFAULT_LEVEL);

        let subscriber = tracing_subscriber::registry()
            .with(fmt_layer)
            .with(level_layer);

        let logging = Self {
            level: DEFAULT_LEVEL,
            format: LogFormat::default(),
            level_handle,
            format_handle,
            output,
        };
        (logging, subscriber)
    }

    /// Build the subscriber and install it as the global default.
    pub fn init(output: LogOutput) -> Result<Self, LoggingError> {
        let (logging, subscriber) = Self::new(output);
        subscriber.try_init()?;
        Ok(logging)
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn format(&self) -> LogFormat {
        self.format
    }

    pub fn output(&self) -> &LogOutput {
        &self.output
    }

    /// Swap the level filter. On failure the previous level stays current.
    pub fn set_level(&mut self, level: LevelFilter) {
        match self.level_handle.reload(level) {
            Ok(()) => self.level = level,
            Err(e) => tracing::warn!(error = %e, level = %level, "Failed to apply log level"),
        }
    }

    /// Swap the formatter. On failure the previous format stays current.
    pub fn set_format(&mut self, format: LogFormat) {
        match self
            .format_handle
            .reload(format_layer(format, self.output.clone()))
        {
            Ok(()) => self.format = format,
            Err(e) => tracing::warn!(error = %e, format = ?format, "Failed to apply log format"),
        }
    }
}

impl fmt::Debug for Logging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logging")
            .field("level", &self.level)
            .field("format", &self.format)
            .field("output", &self.output)
            .finish()
    }
}

fn format_layer(format: LogFormat, output: LogOutput) -> FormatLayer {
    let layer = tracing_subscriber::fmt::layer::<Registry>()
        .with_writer(output)
        .with_ansi(false);
    match format {
        LogFormat::Text => layer.boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}
