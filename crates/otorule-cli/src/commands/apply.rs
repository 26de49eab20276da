// Rust guideline compliant 2026-02-09

//! Implementation of the `otorule apply` command.
//!
//! Converts an `oto.ini` with a rules file and writes the result, merging
//! command-line flags over the loaded configuration.

use crate::terminal;
use crate::OutputFormatter;
use anyhow::Result;
use otorule_app::{run_conversion, ConversionRequest, OutputLocations};
use otorule_core::{Config, MaxEntries};
use std::path::{Path, PathBuf};

/// Arguments of `otorule apply`.
#[derive(Debug, Clone, clap::Args)]
pub struct ApplyArgs {
    /// Input oto.ini
    pub oto: PathBuf,

    /// Rules file with CVRULE, VRULE, CRULE and TIALRULE sections
    #[arg(long)]
    pub rules: PathBuf,

    /// Run the tail rule pass
    #[arg(long)]
    pub tail_rule: bool,

    /// Maximum entries per alias (0, blank or non-numeric means unlimited;
    /// negative keeps only the first)
    #[arg(long, allow_hyphen_values = true)]
    pub max_entries: Option<String>,

    /// Output file (default: new_oto.ini in the documents directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write debug_info.txt next to the output
    #[arg(long)]
    pub trace: bool,

    /// Print the converted lines without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

/// Runs a conversion.
///
/// # Arguments
///
/// * `args` - Parsed command arguments
/// * `config` - Loaded configuration supplying defaults for unset flags
/// * `formatter` - The output formatter to use
/// * `use_color` - Whether warnings are colored
///
/// # Errors
///
/// Returns an error if:
/// - The rules file or oto.ini is missing or unreadable
/// - No default output directory can be determined
/// - The output or trace file cannot be written
pub fn execute(
    args: ApplyArgs,
    config: &Config,
    formatter: &dyn OutputFormatter,
    use_color: bool,
) -> Result<()> {
    let max_entries = match args.max_entries.as_deref() {
        Some(value) => MaxEntries::parse_lenient(value),
        None => MaxEntries::from_count(config.max_entries),
    };

    let locations = if args.dry_run {
        OutputLocations::in_dir(".")
    } else if let Some(output) = &args.output {
        OutputLocations::in_dir(parent_dir(output))
    } else {
        OutputLocations::discover(config.output_dir.as_deref())?
    };

    let request = ConversionRequest::new(args.oto, args.rules)
        .apply_tail_rule(args.tail_rule || config.apply_tail_rule)
        .max_entries(max_entries)
        .output_path(args.output)
        .write_trace(args.trace || config.write_trace)
        .dry_run(args.dry_run);

    let report = run_conversion(&request, &locations)?;
    tracing::info!(
        entries = report.stats.output_entries,
        renamed = report.stats.renamed,
        dropped = report.stats.dropped,
        "conversion finished"
    );

    if report.stats.dropped > 0 {
        terminal::print_warning(
            &format!(
                "{} entries exceeded the cap of {} and were dropped",
                report.stats.dropped, max_entries
            ),
            use_color,
        );
    }

    println!("{}", formatter.format_conversion(&report));
    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
