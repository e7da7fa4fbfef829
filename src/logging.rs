//! Tracing subscriber setup
//!
//! Filter comes from `RUST_LOG`, defaulting to `warn`.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Where log lines go when no log file was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Line-based commands: write to stderr
    Stderr,
    /// Full-screen TUI: drop log lines instead of drawing over the screen
    Silent,
}

/// Install the global tracing subscriber
///
/// With `log_file` set, events are appended to that file without ANSI
/// colors. Otherwise `target` decides between stderr and no output.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_tracing(log_file: Option<&Path>, target: LogTarget) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;

        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .try_init()?;

        tracing::info!(path = %path.display(), "logging initialized");
        return Ok(());
    }

    match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(env_filter)
            .try_init()?,
        LogTarget::Silent => tracing_subscriber::registry().with(env_filter).try_init()?,
    }

    Ok(())
}
