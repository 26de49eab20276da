// Rust guideline compliant 2026-02-09

//! Error handling for otorule application services.

use otorule_core::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// An input file does not exist.
    FileNotFound,
    /// An input file could not be opened or decoded.
    FileReadError,
    /// A destination file could not be written.
    FileWriteError,
    /// The configuration file or environment is invalid.
    ConfigError,
    /// No default output directory could be determined.
    LocationUnavailable,
    /// A fallback for unexpected errors.
    Unknown,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Neither a documents directory nor a home directory could be found.
    #[error("Could not determine the documents directory. Set output_dir or pass --output.")]
    DocumentsDirUnavailable,

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::DocumentsDirUnavailable => ErrorCode::LocationUnavailable,
            AppError::Core(core) => match core {
                CoreError::NotFound(_) => ErrorCode::FileNotFound,
                CoreError::FileRead { .. } | CoreError::Decode(_) => ErrorCode::FileReadError,
                CoreError::FileWrite { .. } => ErrorCode::FileWriteError,
                CoreError::InvalidConfig(_) => ErrorCode::ConfigError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::Core(core) => core.path().map(|path| {
                serde_json::json!({
                    "path": path,
                })
            }),
            AppError::DocumentsDirUnavailable => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_core_errors_map_to_codes() {
        let not_found = AppError::from(CoreError::NotFound(PathBuf::from("oto.ini")));
        assert_eq!(not_found.code(), ErrorCode::FileNotFound);

        let decode = AppError::from(CoreError::Decode(PathBuf::from("rules.ini")));
        assert_eq!(decode.code(), ErrorCode::FileReadError);

        let write = AppError::from(CoreError::FileWrite {
            path: PathBuf::from("new_oto.ini"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        });
        assert_eq!(write.code(), ErrorCode::FileWriteError);
    }

    #[test]
    fn test_details_include_path() {
        let error = AppError::from(CoreError::NotFound(PathBuf::from("oto.ini")));
        let details = error.details().unwrap();
        assert_eq!(details["path"], "oto.ini");
        assert!(AppError::DocumentsDirUnavailable.details().is_none());
    }
}
