// Rust guideline compliant 2026-02-06

//! Output formatting module for the otorule CLI.
//!
//! This module renders command reports in the supported output formats
//! (JSON, table, plain text).

use otorule_app::{ConversionReport, ReclistReport, RuleSummary, SuccessEnvelope};
use otorule_core::{ConversionStats, OutputFormat};
use serde::Serialize;
use serde_json::json;
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Output formatter trait.
///
/// Defines the interface for rendering command results in different output
/// formats.
pub trait OutputFormatter {
    /// Formats the result of an `apply` run.
    ///
    /// # Arguments
    /// * `report` - The conversion report
    ///
    /// # Returns
    /// A formatted string representation of the report
    fn format_conversion(&self, report: &ConversionReport) -> String;

    /// Formats the result of a `reclist` run.
    fn format_reclist(&self, report: &ReclistReport) -> String;

    /// Formats a rules file summary.
    fn format_rules(&self, summary: &RuleSummary) -> String;

    /// Formats an error message for display.
    ///
    /// # Arguments
    /// * `error` - The error message to format
    ///
    /// # Returns
    /// A formatted error string
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
///
/// Wraps each report in a success envelope for machine consumption.
pub struct JsonFormatter;

impl JsonFormatter {
    fn envelope<T: Serialize>(command: &'static str, result: T) -> String {
        serde_json::to_string_pretty(&SuccessEnvelope::new(command, result))
            .unwrap_or_else(|_| json!({ "status": "error", "message": "Failed to serialize result" }).to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_conversion(&self, report: &ConversionReport) -> String {
        Self::envelope("apply", report)
    }

    fn format_reclist(&self, report: &ReclistReport) -> String {
        Self::envelope("reclist", report)
    }

    fn format_rules(&self, summary: &RuleSummary) -> String {
        Self::envelope("rules", summary)
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "status": "error", "message": error }).to_string()
    }
}

/// Table output formatter.
///
/// Renders reports as human-readable tables.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_conversion(&self, report: &ConversionReport) -> String {
        let mut output = String::new();
        output.push_str(&format!("Input:       {}\n", report.oto_path.display()));
        output.push_str(&format!("Rules:       {}\n", report.rules_path.display()));
        match &report.output_path {
            Some(path) => output.push_str(&format!("Output:      {}\n", path.display())),
            None => output.push_str("Output:      (dry run, nothing written)\n"),
        }
        if let Some(path) = &report.trace_path {
            output.push_str(&format!("Trace:       {}\n", path.display()));
        }
        output.push_str(&format!(
            "Tail rule:   {}\n",
            if report.apply_tail_rule { "on" } else { "off" }
        ));
        output.push_str(&format!("Max entries: {}\n", max_entries_label(report.max_entries)));
        output.push('\n');
        output.push_str(&stats_table(&report.stats));

        if report.output_path.is_none() {
            output.push_str("\n\n");
            for line in &report.lines {
                output.push_str(line);
                output.push('\n');
            }
        }
        output
    }

    fn format_reclist(&self, report: &ReclistReport) -> String {
        format!(
            "Wrote {} sample names to {}",
            report.count,
            report.output.display()
        )
    }

    fn format_rules(&self, summary: &RuleSummary) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["Section", "Keys", "Alternatives"]);
        for table in &summary.tables {
            builder.push_record(vec![
                table.section.to_string(),
                table.keys.to_string(),
                table.alternatives.to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        format!("{}\n{}", summary.path.display(), table)
    }

    fn format_error(&self, error: &str) -> String {
        if !self.use_color {
            return format!("Error: {}", error);
        }

        let mut buffer = Buffer::ansi();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
        let _ = write!(buffer, "Error:");
        let _ = buffer.reset();
        let _ = write!(buffer, " {}", error);
        String::from_utf8_lossy(buffer.as_slice()).to_string()
    }
}

fn stats_table(stats: &ConversionStats) -> String {
    let rows = [
        ("Input lines", stats.input_lines),
        ("Skipped lines", stats.skipped_lines),
        ("Unchanged", stats.unchanged),
        ("Rewritten", stats.rewritten),
        ("Tail rewrites", stats.tail_rewrites),
        ("Renamed", stats.renamed),
        ("Dropped", stats.dropped),
        ("Output entries", stats.output_entries),
    ];

    let mut builder = Builder::default();
    builder.push_record(vec!["Metric", "Count"]);
    for (label, value) in rows {
        builder.push_record(vec![label.to_string(), value.to_string()]);
    }
    let mut table = builder.build();
    table.with(Style::modern());
    table.to_string()
}

fn max_entries_label(max_entries: usize) -> String {
    if max_entries == 0 {
        "unlimited".to_string()
    } else {
        max_entries.to_string()
    }
}

/// Plain text output formatter.
///
/// Emits `key=value` lines without colors or tables. In dry-run mode the
/// converted lines are printed instead.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_conversion(&self, report: &ConversionReport) -> String {
        let Some(path) = &report.output_path else {
            return report.lines.join("\n");
        };

        let mut output = format!("output={}\n", path.display());
        if let Some(trace) = &report.trace_path {
            output.push_str(&format!("trace={}\n", trace.display()));
        }
        let stats = &report.stats;
        output.push_str(&format!("input_lines={}\n", stats.input_lines));
        output.push_str(&format!("skipped_lines={}\n", stats.skipped_lines));
        output.push_str(&format!("renamed={}\n", stats.renamed));
        output.push_str(&format!("dropped={}\n", stats.dropped));
        output.push_str(&format!("output_entries={}", stats.output_entries));
        output
    }

    fn format_reclist(&self, report: &ReclistReport) -> String {
        format!("{} {}", report.count, report.output.display())
    }

    fn format_rules(&self, summary: &RuleSummary) -> String {
        summary
            .tables
            .iter()
            .map(|table| format!("{} {} {}", table.section, table.keys, table.alternatives))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
/// * `use_color` - Whether to use colored output (ignored for JSON and plain)
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: OutputFormat, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter::new(use_color)),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
