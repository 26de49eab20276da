// Rust guideline compliant 2026-02-06

//! Rule table loading.
//!
//! A rules file is an INI-style document with up to four recognized sections:
//!
//! ```text
//! [CVRULE]
//! ka = ka,kA
//! [VRULE]
//! a = a
//! [CRULE]
//! k = k
//! [TIALRULE]
//! a = a,ia,ua
//! ```
//!
//! Every value is a comma-separated list of alternatives. Keys are case
//! sensitive and tables keep the order in which keys were declared, which the
//! tail pass relies on for its first-match semantics.

use crate::textio::{read_text, Fallback};
use crate::Result;
use std::collections::HashMap;
use std::path::Path;

/// Section name of the consonant-vowel table.
pub const CV_SECTION: &str = "CVRULE";
/// Section name of the vowel table.
pub const V_SECTION: &str = "VRULE";
/// Section name of the consonant table.
pub const C_SECTION: &str = "CRULE";
/// Section name of the tail table.
pub const TAIL_SECTION: &str = "TIALRULE";

/// Ordered mapping from a phoneme key to its replacement alternatives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable {
    entries: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl RuleTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a rule.
    ///
    /// A key that is already present keeps its original position and takes
    /// the new alternatives.
    ///
    /// # Returns
    ///
    /// `true` if an existing rule was replaced.
    pub fn insert(&mut self, key: String, alternatives: Vec<String>) -> bool {
        if let Some(&position) = self.index.get(&key) {
            self.entries[position].1 = alternatives;
            return true;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, alternatives));
        false
    }

    /// Returns all alternatives for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.index
            .get(key)
            .map(|&position| self.entries[position].1.as_slice())
    }

    /// Returns true if the table has a rule for `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Resolves a key to its first alternative, or to the key itself when the
    /// table has no rule for it.
    #[must_use]
    pub fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key)
            .and_then(|alternatives| alternatives.first())
            .map_or(key, String::as_str)
    }

    /// Iterates rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, alternatives)| (key.as_str(), alternatives.as_slice()))
    }

    /// Returns the number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the total number of alternatives across all keys.
    #[must_use]
    pub fn alternative_count(&self) -> usize {
        self.entries.iter().map(|(_, alternatives)| alternatives.len()).sum()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, Vec<V>)> for RuleTable {
    fn from_iter<I: IntoIterator<Item = (K, Vec<V>)>>(iter: I) -> Self {
        let mut table = RuleTable::new();
        for (key, alternatives) in iter {
            table.insert(key.into(), alternatives.into_iter().map(Into::into).collect());
        }
        table
    }
}

/// The four rule tables used by one conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTables {
    /// Consonant-vowel rules (`CVRULE`).
    pub cv: RuleTable,
    /// Vowel rules (`VRULE`), applied to the left half of split aliases.
    pub v: RuleTable,
    /// Consonant rules (`CRULE`), preferred for the right half of split aliases.
    pub c: RuleTable,
    /// Tail rules (`TIALRULE`), looked up by value in the tail pass.
    pub tail: RuleTable,
}

impl RuleTables {
    /// Returns the tables paired with their section names, in file order.
    #[must_use]
    pub fn sections(&self) -> [(&'static str, &RuleTable); 4] {
        [
            (CV_SECTION, &self.cv),
            (V_SECTION, &self.v),
            (C_SECTION, &self.c),
            (TAIL_SECTION, &self.tail),
        ]
    }

    fn section_mut(&mut self, name: &str) -> Option<&mut RuleTable> {
        match name {
            CV_SECTION => Some(&mut self.cv),
            V_SECTION => Some(&mut self.v),
            C_SECTION => Some(&mut self.c),
            TAIL_SECTION => Some(&mut self.tail),
            _ => None,
        }
    }
}

/// Loads rule tables from a rules file.
///
/// # Arguments
///
/// * `path` - Path to the rules file
///
/// # Returns
///
/// The parsed tables. Sections missing from the file yield empty tables.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist or cannot be read
/// - The file is neither valid UTF-8 nor valid Shift_JIS
pub fn load_rules(path: &Path) -> Result<RuleTables> {
    let text = read_text(path, Fallback::Strict)?;
    let tables = parse_rules(&text);
    tracing::info!(
        path = %path.display(),
        cv = tables.cv.len(),
        v = tables.v.len(),
        c = tables.c.len(),
        tail = tables.tail.len(),
        "loaded rule tables"
    );
    Ok(tables)
}

/// Parses rules file text into rule tables.
///
/// Parsing is lenient: malformed lines are skipped with a warning rather than
/// failing the whole file.
#[must_use]
pub fn parse_rules(text: &str) -> RuleTables {
    let mut tables = RuleTables::default();
    let mut current: Option<String> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(header) = parse_section_header(line) {
            current = Some(header.to_string());
            continue;
        }

        let Some(section) = current.as_deref() else {
            tracing::warn!(line = line_no, "ignoring rule outside of any section");
            continue;
        };
        let Some(table) = tables.section_mut(section) else {
            continue;
        };

        let Some((key, value)) = split_option(line) else {
            tracing::warn!(line = line_no, section, "ignoring rule without '=' or ':'");
            continue;
        };
        if key.is_empty() {
            tracing::warn!(line = line_no, section, "ignoring rule with empty key");
            continue;
        }

        let alternatives = value.split(',').map(str::to_string).collect();
        if table.insert(key.to_string(), alternatives) {
            tracing::warn!(line = line_no, section, key, "duplicate rule key, last value wins");
        }
    }

    tables
}

fn parse_section_header(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('[')?;
    let end = rest.rfind(']')?;
    Some(&rest[..end])
}

fn split_option(line: &str) -> Option<(&str, &str)> {
    let delimiter = line.find(['=', ':'])?;
    Some((line[..delimiter].trim(), line[delimiter + 1..].trim()))
}
