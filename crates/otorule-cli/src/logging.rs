// Rust guideline compliant 2026-02-09

//! Logging setup for the CLI.

use anyhow::Result;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Installs the global tracing subscriber.
///
/// Events go to stderr in human-readable form, or to `log_file` as JSON lines
/// when a file is given.
///
/// # Arguments
///
/// * `level` - Maximum level (error, warn, info, debug, trace)
/// * `log_file` - Optional file to append JSON log lines to
///
/// # Returns
///
/// A guard that flushes the file writer on drop, when logging to a file.
///
/// # Errors
///
/// Returns an error if the level is invalid or the log file cannot be opened.
pub fn init_tracing(level: &str, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = parse_log_level(level)?;

    if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .json()
            .with_writer(writer)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(Some(guard));
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(None)
}

/// Parses a log level name.
///
/// # Errors
///
/// Returns an error for unknown level names.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => anyhow::bail!("Invalid log level: {}", other),
    }
}
