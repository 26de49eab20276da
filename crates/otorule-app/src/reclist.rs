// Rust guideline compliant 2026-02-09

//! Reclist generation service.

use crate::error::Result;
use crate::locations::default_reclist_path;
use otorule_core::generate_reclist;
use serde::Serialize;
use std::path::PathBuf;

/// Request for one reclist run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReclistRequest {
    /// Source `oto.ini`.
    pub input: PathBuf,
    /// Destination; `reclist.txt` next to the input when `None`.
    pub output: Option<PathBuf>,
}

/// Outcome of a reclist run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReclistReport {
    /// Source `oto.ini`.
    pub input: PathBuf,
    /// Written reclist.
    pub output: PathBuf,
    /// Number of unique sample names written.
    pub count: usize,
}

/// Generates a reclist.
///
/// # Errors
///
/// Returns an error if the input is missing or unreadable, or the output
/// cannot be written.
pub fn run_reclist(request: &ReclistRequest) -> Result<ReclistReport> {
    let output = request
        .output
        .clone()
        .unwrap_or_else(|| default_reclist_path(&request.input));
    let count = generate_reclist(&request.input, &output)?;

    Ok(ReclistReport {
        input: request.input.clone(),
        output,
        count,
    })
}
