// Rust guideline compliant 2026-02-06

//! Text file reading and writing.
//!
//! Voicebank files in the wild are either UTF-8 or Shift_JIS (the encoding
//! UTAU itself writes). Reading tries UTF-8 first and falls back to Shift_JIS;
//! writing always produces UTF-8 with `\n` line endings.

use crate::{Error, Result};
use encoding_rs::SHIFT_JIS;
use std::borrow::Cow;
use std::io::ErrorKind;
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// How to handle bytes that are invalid under the Shift_JIS fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Fail when the fallback encoding cannot decode the input either.
    Strict,
    /// Substitute U+FFFD for undecodable sequences.
    Lossy,
    /// Drop undecodable sequences.
    Skip,
}

/// Decodes raw file bytes as UTF-8, falling back to Shift_JIS.
///
/// A leading UTF-8 byte order mark is removed.
///
/// # Arguments
///
/// * `bytes` - Raw file contents
/// * `fallback` - Policy for bytes invalid under Shift_JIS
///
/// # Returns
///
/// The decoded text, or `None` if `fallback` is [`Fallback::Strict`] and
/// neither encoding accepts the input.
pub fn decode(bytes: &[u8], fallback: Fallback) -> Option<String> {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    if let Ok(text) = std::str::from_utf8(body) {
        return Some(text.to_string());
    }

    match fallback {
        Fallback::Strict => SHIFT_JIS
            .decode_without_bom_handling_and_without_replacement(body)
            .map(Cow::into_owned),
        Fallback::Lossy => {
            let (text, had_errors) = SHIFT_JIS.decode_without_bom_handling(body);
            if had_errors {
                tracing::warn!("replaced undecodable bytes while decoding as Shift_JIS");
            }
            Some(text.into_owned())
        }
        Fallback::Skip => {
            let (text, had_errors) = SHIFT_JIS.decode_without_bom_handling(body);
            if !had_errors {
                return Some(text.into_owned());
            }
            tracing::warn!("dropped undecodable bytes while decoding as Shift_JIS");
            Some(text.chars().filter(|&c| c != char::REPLACEMENT_CHARACTER).collect())
        }
    }
}

/// Reads a text file with UTF-8 / Shift_JIS detection.
///
/// # Arguments
///
/// * `path` - File to read
/// * `fallback` - Policy for bytes invalid under Shift_JIS
///
/// # Returns
///
/// The decoded file contents.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist
/// - The file cannot be opened or read
/// - The contents cannot be decoded under a strict fallback
pub fn read_text(path: &Path, fallback: Fallback) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            Error::NotFound(path.to_path_buf())
        } else {
            Error::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read input file");
    decode(&bytes, fallback).ok_or_else(|| Error::Decode(path.to_path_buf()))
}

/// Writes lines to a file, one per line, each terminated by `\n`.
///
/// The destination is overwritten unconditionally.
///
/// # Errors
///
/// Returns [`Error::FileWrite`] if the file cannot be created or written.
pub fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    let mut out = String::new();
    for line in lines {
        out.push_str(line.as_ref());
        out.push('\n');
    }
    write_text(path, &out)?;
    tracing::debug!(path = %path.display(), lines = lines.len(), "wrote output file");
    Ok(())
}

/// Writes text to a file as UTF-8, replacing any existing file.
///
/// # Errors
///
/// Returns [`Error::FileWrite`] if the file cannot be created or written.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).map_err(|source| Error::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}
