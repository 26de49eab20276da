// Rust guideline compliant 2026-02-09

//! The `oto.ini` conversion service.

use crate::error::Result;
use crate::locations::{trace_path_for, OutputLocations};
use otorule_core::textio::write_text;
use otorule_core::{apply_rules, load_rules, ApplyOptions, ConversionStats, MaxEntries};
use serde::Serialize;
use std::path::PathBuf;

/// Everything needed for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    /// Input `oto.ini`.
    pub oto_path: PathBuf,
    /// Rules file.
    pub rules_path: PathBuf,
    /// Tail pass flag and duplicate cap.
    pub options: ApplyOptions,
    /// Explicit destination; the default location is used when `None`.
    pub output_path: Option<PathBuf>,
    /// Whether to write the debug trace next to the output.
    pub write_trace: bool,
    /// Convert without writing any file.
    pub dry_run: bool,
}

impl ConversionRequest {
    /// Creates a request with default options.
    pub fn new(oto_path: impl Into<PathBuf>, rules_path: impl Into<PathBuf>) -> Self {
        Self {
            oto_path: oto_path.into(),
            rules_path: rules_path.into(),
            options: ApplyOptions::default(),
            output_path: None,
            write_trace: false,
            dry_run: false,
        }
    }

    /// Enables or disables the tail rule pass.
    #[must_use]
    pub fn apply_tail_rule(mut self, enabled: bool) -> Self {
        self.options.apply_tail_rule = enabled;
        self
    }

    /// Sets the per-alias cap.
    #[must_use]
    pub fn max_entries(mut self, max_entries: MaxEntries) -> Self {
        self.options.max_entries = max_entries;
        self
    }

    /// Sets an explicit destination.
    #[must_use]
    pub fn output_path(mut self, path: Option<PathBuf>) -> Self {
        self.output_path = path;
        self
    }

    /// Enables or disables the debug trace file.
    #[must_use]
    pub fn write_trace(mut self, enabled: bool) -> Self {
        self.write_trace = enabled;
        self
    }

    /// Enables or disables dry-run mode.
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }
}

/// Outcome of a conversion run.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    /// Input `oto.ini`.
    pub oto_path: PathBuf,
    /// Rules file.
    pub rules_path: PathBuf,
    /// Written file; `None` in dry-run mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
    /// Written debug trace, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_path: Option<PathBuf>,
    /// Whether the tail pass ran.
    pub apply_tail_rule: bool,
    /// Per-alias cap, `0` meaning unlimited.
    pub max_entries: usize,
    /// Run counters.
    pub stats: ConversionStats,
    /// Converted lines.
    pub lines: Vec<String>,
}

/// Runs one conversion: loads the rules, converts the `oto.ini` and writes
/// the result (and optionally the debug trace).
///
/// # Arguments
///
/// * `request` - Conversion request
/// * `locations` - Default output locations
///
/// # Returns
///
/// A report describing the run.
///
/// # Errors
///
/// Returns an error if:
/// - The rules file or `oto.ini` is missing or unreadable
/// - The output or trace file cannot be written
pub fn run_conversion(request: &ConversionRequest, locations: &OutputLocations) -> Result<ConversionReport> {
    let tables = load_rules(&request.rules_path)?;
    let conversion = apply_rules(&request.oto_path, &tables, &request.options)?;

    let mut output_path = None;
    let mut trace_path = None;
    if !request.dry_run {
        let path = request
            .output_path
            .clone()
            .unwrap_or_else(|| locations.converted_oto_path());
        conversion.write_to(&path)?;

        if request.write_trace {
            let trace = trace_path_for(&path);
            write_text(&trace, &conversion.trace.render())?;
            tracing::info!(path = %trace.display(), "wrote debug trace");
            trace_path = Some(trace);
        }
        output_path = Some(path);
    }

    Ok(ConversionReport {
        oto_path: request.oto_path.clone(),
        rules_path: request.rules_path.clone(),
        output_path,
        trace_path,
        apply_tail_rule: request.options.apply_tail_rule,
        max_entries: request.options.max_entries.as_count(),
        stats: conversion.stats,
        lines: conversion.lines(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, ErrorCode};
    use std::fs;
    use tempfile::TempDir;

    fn fixtures(dir: &std::path::Path) -> ConversionRequest {
        fs::write(dir.join("rules.ini"), "[CVRULE]\nka = ka,kA\n[TIALRULE]\na = a,ia\n").unwrap();
        fs::write(dir.join("oto.ini"), "k.wav=ka,1\nk2.wav=ka,2\n").unwrap();
        ConversionRequest::new(dir.join("oto.ini"), dir.join("rules.ini"))
    }

    #[test]
    fn test_default_output_location() {
        let temp_dir = TempDir::new().unwrap();
        let request = fixtures(temp_dir.path());
        let locations = OutputLocations::in_dir(temp_dir.path());

        let report = run_conversion(&request, &locations).unwrap();
        let output = temp_dir.path().join("new_oto.ini");
        assert_eq!(report.output_path.as_deref(), Some(output.as_path()));
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "k.wav=ka,1\nk.wav=kA,1\nk2.wav=ka_2,2\nk2.wav=kA_2,2\n"
        );
        assert!(report.trace_path.is_none());
    }

    #[test]
    fn test_explicit_output_with_trace() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("custom.ini");
        let request = fixtures(temp_dir.path())
            .output_path(Some(output.clone()))
            .write_trace(true)
            .max_entries(MaxEntries::from_count(1));
        let locations = OutputLocations::in_dir("/nonexistent");

        let report = run_conversion(&request, &locations).unwrap();
        assert_eq!(report.max_entries, 1);
        assert_eq!(report.stats.dropped, 2);
        assert_eq!(fs::read_to_string(&output).unwrap(), "k.wav=ka,1\nk.wav=kA,1\n");

        let trace = temp_dir.path().join("debug_info.txt");
        assert_eq!(report.trace_path.as_deref(), Some(trace.as_path()));
        assert!(fs::read_to_string(trace).unwrap().starts_with("Initial sorted lines:\n"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let request = fixtures(temp_dir.path()).dry_run(true).write_trace(true);
        let locations = OutputLocations::in_dir(temp_dir.path());

        let report = run_conversion(&request, &locations).unwrap();
        assert!(report.output_path.is_none());
        assert!(report.trace_path.is_none());
        assert_eq!(report.lines.len(), 4);
        assert!(!temp_dir.path().join("new_oto.ini").exists());
    }

    #[test]
    fn test_missing_rules_maps_to_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let request = ConversionRequest::new(temp_dir.path().join("oto.ini"), temp_dir.path().join("rules.ini"));

        let err = run_conversion(&request, &OutputLocations::in_dir(temp_dir.path())).unwrap_err();
        assert!(matches!(err, AppError::Core(_)));
        assert_eq!(err.code(), ErrorCode::FileNotFound);
    }

    #[test]
    fn test_unwritable_output_maps_to_write_error() {
        let temp_dir = TempDir::new().unwrap();
        let request = fixtures(temp_dir.path());
        let locations = OutputLocations::in_dir(temp_dir.path().join("missing-dir"));

        let err = run_conversion(&request, &locations).unwrap_err();
        assert_eq!(err.code(), ErrorCode::FileWriteError);
    }
}
