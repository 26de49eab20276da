// Rust guideline compliant 2026-02-06

//! Tail rule pass.
//!
//! Tail rules are looked up in reverse: an alias `"- ia"` is rewritten to
//! `"- a"` when the `TIALRULE` table declares `a = a,ia,ua`. When several keys
//! list the same value, the key declared first in the file wins.

use crate::entry::OtoEntry;
use crate::rewrite::TAIL_MARKER;
use crate::rules::RuleTable;
use std::collections::HashMap;

/// Inverse index of a tail table: alternative value to the first key that
/// declares it.
#[derive(Debug, Clone, Default)]
pub struct TailIndex {
    by_value: HashMap<String, String>,
}

impl TailIndex {
    /// Builds the index from a tail rule table.
    #[must_use]
    pub fn build(table: &RuleTable) -> Self {
        let mut by_value = HashMap::new();
        for (key, alternatives) in table.iter() {
            for value in alternatives {
                by_value
                    .entry(value.clone())
                    .or_insert_with(|| key.to_string());
            }
        }
        Self { by_value }
    }

    /// Returns the key that declares `value`, if any.
    #[must_use]
    pub fn key_for(&self, value: &str) -> Option<&str> {
        self.by_value.get(value).map(String::as_str)
    }

    /// Applies the tail rule to one entry in place.
    ///
    /// Only aliases beginning with `-` are considered. The text after the
    /// first `"- "` is looked up; on a match the alias becomes `"- {key}"`.
    ///
    /// # Returns
    ///
    /// `true` if the alias was replaced.
    pub fn apply(&self, entry: &mut OtoEntry) -> bool {
        if !entry.pinyin.starts_with('-') {
            return false;
        }
        let Some((_, right)) = entry.pinyin.split_once(TAIL_MARKER) else {
            return false;
        };
        let Some(key) = self.key_for(right) else {
            return false;
        };

        entry.pinyin = format!("{}{}", TAIL_MARKER, key);
        true
    }
}
