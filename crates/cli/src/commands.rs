//! Subcommand implementations.
//!
//! Responsibilities:
//! - Render the resolved configuration (`show`).
//! - Summarize the configuration and flag inconsistent settings (`check`).
//!
//! Does NOT handle:
//! - Loading or mode switching (done in `main` before dispatch).
//!
//! Invariants:
//! - Command output goes to the given writer (stdout in the binary); log
//!   lines never mix into it.

use anyhow::{Context, Result};
use std::io::Write;
use xiang_config::{AppContext, Config};

use crate::args::Commands;

/// Run `command` against an already bootstrapped context.
pub fn run_command(command: Commands, context: &AppContext, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Show { compact } => show(context.config(), compact, out),
        Commands::Check => check(context, out),
    }
}

fn show(config: &Config, compact: bool, out: &mut impl Write) -> Result<()> {
    let rendered = if compact {
        serde_json::to_string(config)
    } else {
        serde_json::to_string_pretty(config)
    }
    .context("Failed to serialize configuration")?;

    writeln!(out, "{rendered}").context("Failed to write configuration")?;
    tracing::debug!(compact, "Configuration printed");
    Ok(())
}

fn check(context: &AppContext, out: &mut impl Write) -> Result<()> {
    let config = context.config();
    let mode = match config.run_mode() {
        Some(mode) => mode.to_string(),
        None => format!("{:?} (unrecognized, runtime defaults kept)", config.mode),
    };
    let log = if config.has_log_file() {
        config.log.display().to_string()
    } else {
        "stderr".to_string()
    };

    writeln!(out, "Configuration OK")?;
    writeln!(out, "  mode:      {mode}")?;
    writeln!(out, "  root:      {}", config.root.display())?;
    writeln!(out, "  log:       {log} ({:?}, {})", config.log_format(), context.logging().level())?;
    writeln!(out, "  framework: {}", context.framework().mode())?;
    writeln!(
        out,
        "  service:   {}:{}{}",
        config.service.host,
        config.service.port,
        if config.service.https { " (https)" } else { "" }
    )?;
    writeln!(
        out,
        "  session:   {}:{}{}",
        config.session.host,
        config.session.port,
        if config.session.hosting { "" } else { " (not hosting)" }
    )?;

    let warnings = warnings(config);
    for warning in &warnings {
        writeln!(out, "warning: {warning}")?;
        tracing::warn!(%warning, "Configuration check");
    }

    tracing::info!(mode = %config.mode, warnings = warnings.len(), "Configuration check passed");
    Ok(())
}

/// Settings that load fine but will not work as intended.
fn warnings(config: &Config) -> Vec<String> {
    let mut warnings = Vec::new();
    if config.service.https {
        if config.service.cert.as_os_str().is_empty() {
            warnings.push("XIANG_SERVICE_HTTPS is on but XIANG_SERVICE_CERT is empty".to_string());
        }
        if config.service.key.as_os_str().is_empty() {
            warnings.push("XIANG_SERVICE_HTTPS is on but XIANG_SERVICE_KEY is empty".to_string());
        }
    }
    if config.run_mode().is_none() {
        warnings.push(format!("XIANG_MODE {:?} is not production or development", config.mode));
    }
    warnings
}
