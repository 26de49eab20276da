// Rust guideline compliant 2026-02-06

//! Intermediate snapshots of a conversion run, for diagnosing rule files.

use serde::Serialize;

/// Labeled snapshots taken at the three stages of the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineTrace {
    /// Input lines after the alias sort.
    pub sorted: Vec<String>,
    /// Rewritten entries after CV/V/C rules, excluding unchanged ones.
    pub after_rules: Vec<String>,
    /// The same entries after the tail pass.
    pub after_tail: Vec<String>,
}

impl PipelineTrace {
    /// Renders the trace as labeled plain text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        push_section(&mut out, "Initial sorted lines:", &self.sorted);
        out.push('\n');
        push_section(&mut out, "After CVRULE, VRULE and CRULE:", &self.after_rules);
        out.push('\n');
        push_section(&mut out, "After TIALRULE:", &self.after_tail);
        out
    }
}

/// Emits a snapshot as tracing events.
pub(crate) fn log_snapshot(stage: &'static str, lines: &[String]) {
    tracing::debug!(stage, lines = lines.len(), "pipeline snapshot");
    for line in lines {
        tracing::trace!(stage, line = %line);
    }
}

fn push_section(out: &mut String, label: &str, lines: &[String]) {
    out.push_str(label);
    out.push('\n');
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
}
