// Rust guideline compliant 2026-02-09

//! Output location discovery.

use crate::error::{AppError, Result};
use std::path::{Path, PathBuf};

/// File name of the converted `oto.ini`.
pub const CONVERTED_OTO_FILE: &str = "new_oto.ini";
/// File name of the pipeline debug trace.
pub const TRACE_FILE: &str = "debug_info.txt";
/// Default file name of a generated reclist.
pub const RECLIST_FILE: &str = "reclist.txt";

/// Where a conversion run writes its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLocations {
    output_dir: PathBuf,
}

impl OutputLocations {
    /// Resolves the output directory.
    ///
    /// # Arguments
    ///
    /// * `output_dir` - Configured directory; the user's documents directory
    ///   is used when `None`
    ///
    /// # Returns
    ///
    /// The resolved locations.
    ///
    /// # Errors
    ///
    /// Returns an error if no directory is configured and neither a documents
    /// directory nor a home directory can be determined.
    pub fn discover(output_dir: Option<&Path>) -> Result<Self> {
        let output_dir = match output_dir {
            Some(dir) => dir.to_path_buf(),
            None => documents_dir().ok_or(AppError::DocumentsDirUnavailable)?,
        };
        Ok(Self { output_dir })
    }

    /// Creates locations rooted at an explicit directory.
    #[must_use]
    pub fn in_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Returns the default path of the converted `oto.ini`.
    #[must_use]
    pub fn converted_oto_path(&self) -> PathBuf {
        self.output_dir.join(CONVERTED_OTO_FILE)
    }
}

/// Returns the trace path that accompanies an output file.
#[must_use]
pub fn trace_path_for(output: &Path) -> PathBuf {
    output.with_file_name(TRACE_FILE)
}

/// Returns the default reclist path for an input `oto.ini`.
#[must_use]
pub fn default_reclist_path(input: &Path) -> PathBuf {
    input.with_file_name(RECLIST_FILE)
}

fn documents_dir() -> Option<PathBuf> {
    dirs::document_dir().or_else(|| dirs::home_dir().map(|home| home.join("Documents")))
}
