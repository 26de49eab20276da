// Rust guideline compliant 2026-02-09

//! Implementation of the `otorule reclist` command.

use crate::OutputFormatter;
use anyhow::Result;
use otorule_app::{run_reclist, ReclistRequest};
use std::path::PathBuf;

/// Arguments of `otorule reclist`.
#[derive(Debug, Clone, clap::Args)]
pub struct ReclistArgs {
    /// Input oto.ini
    pub oto: PathBuf,

    /// Output file (default: reclist.txt next to the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Writes the unique sample names of an `oto.ini`, one per line.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the output cannot be
/// written.
pub fn execute(args: ReclistArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let report = run_reclist(&ReclistRequest {
        input: args.oto,
        output: args.output,
    })?;
    println!("{}", formatter.format_reclist(&report));
    Ok(())
}
