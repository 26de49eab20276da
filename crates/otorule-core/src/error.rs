// Rust guideline compliant 2026-02-06

//! Error types for the otorule core library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for otorule operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for otorule operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Input file does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Input file exists but could not be opened or read.
    #[error("Failed to read '{}': {source}", path.display())]
    FileRead {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Input file is neither valid UTF-8 nor valid Shift_JIS.
    #[error("Failed to decode '{}' as UTF-8 or Shift_JIS", .0.display())]
    Decode(PathBuf),

    /// Destination file could not be written.
    #[error("Failed to write '{}': {source}", path.display())]
    FileWrite {
        /// Path that failed to write.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file or override is invalid.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Returns the file path associated with the error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Error::NotFound(path) | Error::Decode(path) => Some(path),
            Error::FileRead { path, .. } | Error::FileWrite { path, .. } => Some(path),
            Error::InvalidConfig(_) => None,
        }
    }
}
