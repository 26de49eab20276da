// Rust guideline compliant 2026-02-06

//! Recording list generation.
//!
//! A reclist is the set of sample base-names referenced by an `oto.ini`, one
//! per line, sorted. `_ka_ki.wav=ka,...` and `_ka_ki.wav=- k,...` both
//! contribute `_ka_ki`.

use crate::textio::{read_text, write_lines, Fallback};
use crate::{Error, Result};
use std::collections::BTreeSet;
use std::path::Path;

/// Extracts the sample base-name from one `oto.ini` line.
///
/// # Returns
///
/// The text before the first `=`, trimmed, with everything from the last `.`
/// removed; `None` for lines without `=`.
#[must_use]
pub fn base_name(line: &str) -> Option<&str> {
    let (column, _) = line.split_once('=')?;
    let column = column.trim();
    Some(column.rsplit_once('.').map_or(column, |(stem, _)| stem))
}

/// Collects unique base-names from `oto.ini` text, in ordinal order.
#[must_use]
pub fn collect_base_names(text: &str) -> BTreeSet<String> {
    text.lines()
        .filter_map(base_name)
        .map(str::to_string)
        .collect()
}

/// Generates a reclist from an `oto.ini` file.
///
/// # Arguments
///
/// * `input` - Source `oto.ini`
/// * `output` - Destination text file, overwritten
///
/// # Returns
///
/// The number of unique names written.
///
/// # Errors
///
/// Returns an error if:
/// - The input does not exist
/// - The input cannot be read
/// - The output cannot be written
pub fn generate_reclist(input: &Path, output: &Path) -> Result<usize> {
    if !input.exists() {
        return Err(Error::NotFound(input.to_path_buf()));
    }

    let text = read_text(input, Fallback::Skip)?;
    let names: Vec<String> = collect_base_names(&text).into_iter().collect();
    write_lines(output, &names)?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        names = names.len(),
        "generated reclist"
    );
    Ok(names.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_name_strips_last_extension_only() {
        assert_eq!(base_name("a.wav=ka,1"), Some("a"));
        assert_eq!(base_name("a.b.wav=ka,1"), Some("a.b"));
        assert_eq!(base_name("  noext =ka"), Some("noext"));
        assert_eq!(base_name("no equals"), None);
    }

    #[test]
    fn test_base_name_keeps_empty_stem() {
        assert_eq!(base_name(".wav=ka"), Some(""));
    }
}
