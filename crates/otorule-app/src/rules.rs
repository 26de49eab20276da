// Rust guideline compliant 2026-02-09

//! Rules file inspection.

use crate::error::Result;
use otorule_core::load_rules;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Per-section counts for one rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    /// Section name as written in the rules file.
    pub section: &'static str,
    /// Number of keys.
    pub keys: usize,
    /// Number of alternatives across all keys.
    pub alternatives: usize,
}

/// Summary of a rules file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSummary {
    /// Rules file path.
    pub path: PathBuf,
    /// One summary per recognized section, in file-format order.
    pub tables: Vec<TableSummary>,
}

/// Loads a rules file and summarizes its tables.
///
/// # Errors
///
/// Returns an error if the rules file is missing, unreadable or undecodable.
pub fn summarize_rules(path: &Path) -> Result<RuleSummary> {
    let tables = load_rules(path)?;
    let tables = tables
        .sections()
        .into_iter()
        .map(|(section, table)| TableSummary {
            section,
            keys: table.len(),
            alternatives: table.alternative_count(),
        })
        .collect();

    Ok(RuleSummary {
        path: path.to_path_buf(),
        tables,
    })
}
