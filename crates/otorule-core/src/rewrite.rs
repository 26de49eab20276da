// Rust guideline compliant 2026-02-06

//! CV/V/C rule application for a single entry.

use crate::entry::OtoEntry;
use crate::rules::RuleTables;

/// Prefix marking a tail (trailing silence) alias.
pub const TAIL_MARKER: &str = "- ";

/// Shape of an alias, which decides how it is rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasForm<'a> {
    /// `"{left} {right}"`, not starting with `-`.
    Split {
        /// Vowel half, looked up in the V table.
        left: &'a str,
        /// Consonant or CV half, looked up in the C table then the CV table.
        right: &'a str,
    },
    /// `"- {rest}"`.
    TailMarker {
        /// Text after the marker, looked up in the CV table.
        rest: &'a str,
    },
    /// Anything else; looked up whole in the CV table.
    Plain(&'a str),
}

impl<'a> AliasForm<'a> {
    /// Classifies an alias.
    #[must_use]
    pub fn classify(pinyin: &'a str) -> Self {
        if !pinyin.starts_with('-') {
            if let Some((left, right)) = pinyin.split_once(' ') {
                return AliasForm::Split { left, right };
            }
        }
        match pinyin.strip_prefix(TAIL_MARKER) {
            Some(rest) => AliasForm::TailMarker { rest },
            None => AliasForm::Plain(pinyin),
        }
    }
}

/// Applies CV, V and C rules to one entry.
///
/// Split and tail-marker aliases always produce exactly one entry. Plain
/// aliases produce one entry per CV alternative, or the input entry unchanged
/// when the CV table has no rule for them.
///
/// # Arguments
///
/// * `tables` - Rule tables for this run
/// * `entry` - Entry to rewrite
///
/// # Returns
///
/// The rewritten entries, in CV alternative order. Never empty.
#[must_use]
pub fn rewrite_entry(tables: &RuleTables, entry: &OtoEntry) -> Vec<OtoEntry> {
    match AliasForm::classify(&entry.pinyin) {
        AliasForm::Split { left, right } => {
            let left = tables.v.resolve(left);
            let right = if tables.c.contains_key(right) {
                tables.c.resolve(right)
            } else {
                tables.cv.resolve(right)
            };
            vec![entry.with_pinyin(format!("{} {}", left, right))]
        }
        AliasForm::TailMarker { rest } => {
            let rest = tables.cv.resolve(rest);
            vec![entry.with_pinyin(format!("{}{}", TAIL_MARKER, rest))]
        }
        AliasForm::Plain(pinyin) => match tables.cv.get(pinyin) {
            Some(alternatives) => alternatives
                .iter()
                .map(|alternative| entry.with_pinyin(alternative.as_str()))
                .collect(),
            None => vec![entry.clone()],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_forms() {
        assert_eq!(
            AliasForm::classify("a k"),
            AliasForm::Split {
                left: "a",
                right: "k"
            }
        );
        assert_eq!(
            AliasForm::classify("a k ka"),
            AliasForm::Split {
                left: "a",
                right: "k ka"
            }
        );
        assert_eq!(AliasForm::classify("- ka"), AliasForm::TailMarker { rest: "ka" });
        assert_eq!(AliasForm::classify("-ka"), AliasForm::Plain("-ka"));
        assert_eq!(AliasForm::classify("-k a"), AliasForm::Plain("-k a"));
        assert_eq!(AliasForm::classify("ka"), AliasForm::Plain("ka"));
    }
}
