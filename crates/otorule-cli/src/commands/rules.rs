// Rust guideline compliant 2026-02-09

//! Implementation of the `otorule rules` command.

use crate::OutputFormatter;
use anyhow::Result;
use otorule_app::summarize_rules;
use std::path::PathBuf;

/// Arguments of `otorule rules`.
#[derive(Debug, Clone, clap::Args)]
pub struct RulesArgs {
    /// Rules file to inspect
    pub rules: PathBuf,
}

/// Prints per-section key and alternative counts for a rules file.
///
/// # Errors
///
/// Returns an error if the rules file is missing, unreadable or undecodable.
pub fn execute(args: RulesArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let summary = summarize_rules(&args.rules)?;
    println!("{}", formatter.format_rules(&summary));
    Ok(())
}
