// Rust guideline compliant 2026-02-06

//! The `oto.ini` conversion pipeline.
//!
//! One run goes through these stages, in order:
//!
//! 1. Parse and sort entries by alias (case-insensitive).
//! 2. Rewrite every entry with the CV/V/C rules. Entries the rules leave
//!    untouched are set aside as the unchanged block.
//! 3. Optionally apply the tail rules to the changed block.
//! 4. Number duplicate aliases over the unchanged block followed by the
//!    changed block, dropping entries beyond the cap.
//! 5. Sort by sample name (case-insensitive).
//!
//! The order of the blocks in step 4 decides which entry keeps the bare alias,
//! so it must not change.

use crate::collision::{resolve_collisions, MaxEntries};
use crate::entry::OtoEntry;
use crate::rewrite::rewrite_entry;
use crate::rules::RuleTables;
use crate::tail::TailIndex;
use crate::textio::{read_text, write_lines, Fallback};
use crate::trace::{log_snapshot, PipelineTrace};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options for one conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyOptions {
    /// Whether to run the tail rule pass.
    pub apply_tail_rule: bool,
    /// Cap on entries per alias.
    pub max_entries: MaxEntries,
}

/// Counters describing one conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    /// Lines in the input text.
    pub input_lines: usize,
    /// Non-blank lines that were not valid entries.
    pub skipped_lines: usize,
    /// Entries the CV/V/C rules left untouched.
    pub unchanged: usize,
    /// Entries produced by the CV/V/C rules for changed inputs.
    pub rewritten: usize,
    /// Entries whose alias was replaced by a tail rule.
    pub tail_rewrites: usize,
    /// Entries that received a numeric suffix.
    pub renamed: usize,
    /// Entries dropped at the per-alias cap.
    pub dropped: usize,
    /// Entries in the final output.
    pub output_entries: usize,
}

/// Result of a conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversion {
    /// Final entries, sorted by name.
    pub entries: Vec<OtoEntry>,
    /// Intermediate snapshots.
    pub trace: PipelineTrace,
    /// Run counters.
    pub stats: ConversionStats,
}

impl Conversion {
    /// Returns the output lines, without terminators.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(OtoEntry::to_line).collect()
    }

    /// Writes the output lines to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        write_lines(path, &self.lines())
    }
}

/// Applies rule tables to an `oto.ini` file.
///
/// # Arguments
///
/// * `oto_path` - Input `oto.ini`
/// * `tables` - Rule tables
/// * `options` - Tail pass flag and duplicate cap
///
/// # Returns
///
/// The conversion result. Nothing is written to disk.
///
/// # Errors
///
/// Returns an error if the input file does not exist or cannot be read.
pub fn apply_rules(oto_path: &Path, tables: &RuleTables, options: &ApplyOptions) -> Result<Conversion> {
    let text = read_text(oto_path, Fallback::Lossy)?;
    let conversion = convert(&text, tables, options);
    tracing::info!(
        path = %oto_path.display(),
        entries = conversion.stats.output_entries,
        renamed = conversion.stats.renamed,
        dropped = conversion.stats.dropped,
        "converted oto.ini"
    );
    Ok(conversion)
}

/// Applies rule tables to `oto.ini` text.
#[must_use]
pub fn convert(text: &str, tables: &RuleTables, options: &ApplyOptions) -> Conversion {
    let mut stats = ConversionStats::default();
    let mut trace = PipelineTrace::default();

    let mut entries = Vec::new();
    for line in text.lines() {
        stats.input_lines += 1;
        match OtoEntry::parse(line) {
            Some(entry) => entries.push(entry),
            None if line.trim().is_empty() => {}
            None => stats.skipped_lines += 1,
        }
    }
    entries.sort_by_cached_key(OtoEntry::pinyin_sort_key);
    trace.sorted = entries.iter().map(OtoEntry::to_line).collect();
    log_snapshot("sorted", &trace.sorted);

    let mut unchanged = Vec::new();
    let mut changed = Vec::new();
    for entry in entries {
        let mut rewritten = rewrite_entry(tables, &entry);
        if rewritten.len() == 1 && rewritten[0] == entry {
            unchanged.push(entry);
        } else {
            changed.append(&mut rewritten);
        }
    }
    stats.unchanged = unchanged.len();
    stats.rewritten = changed.len();
    trace.after_rules = changed.iter().map(OtoEntry::to_line).collect();
    log_snapshot("after_rules", &trace.after_rules);

    if options.apply_tail_rule {
        let index = TailIndex::build(&tables.tail);
        for entry in &mut changed {
            if index.apply(entry) {
                stats.tail_rewrites += 1;
            }
        }
    }
    trace.after_tail = changed.iter().map(OtoEntry::to_line).collect();
    log_snapshot("after_tail", &trace.after_tail);

    let resolved = resolve_collisions(unchanged.into_iter().chain(changed), options.max_entries);
    stats.renamed = resolved.renamed;
    stats.dropped = resolved.dropped;

    let mut entries = resolved.entries;
    entries.sort_by_cached_key(OtoEntry::name_sort_key);
    stats.output_entries = entries.len();

    Conversion {
        entries,
        trace,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::parse_rules;

    #[test]
    fn test_unchanged_block_claims_bare_alias_first() {
        // "aa" sorts before "ka", but the rewritten entry joins the changed
        // block, which is numbered after the unchanged one.
        let tables = parse_rules("[CVRULE]\naa = ka\n");
        let text = "b.wav=aa,1\na.wav=ka,2\n";
        let conversion = convert(text, &tables, &ApplyOptions::default());
        assert_eq!(conversion.lines(), vec!["a.wav=ka,2", "b.wav=ka_2,1"]);
        assert_eq!(conversion.stats.unchanged, 1);
        assert_eq!(conversion.stats.rewritten, 1);
        assert_eq!(conversion.stats.renamed, 1);
    }

    #[test]
    fn test_skipped_lines_are_counted() {
        let text = "a.wav=ka,1\n\nbroken line\nb.wav=,1\nc.wav=x=y\n";
        let conversion = convert(text, &RuleTables::default(), &ApplyOptions::default());
        assert_eq!(conversion.stats.input_lines, 5);
        assert_eq!(conversion.stats.skipped_lines, 3);
        assert_eq!(conversion.lines(), vec!["a.wav=ka,1"]);
    }
}
