// Rust guideline compliant 2026-02-06

//! Duplicate alias resolution.
//!
//! Entries sharing an alias are numbered in encounter order: the first keeps
//! its alias, later ones get `_2`, `_3`, ... appended. With a cap, numbering
//! stops at the cap and any further duplicates are dropped.

use crate::entry::OtoEntry;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::num::NonZeroUsize;

/// Maximum number of entries kept per alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "usize", into = "usize")]
pub enum MaxEntries {
    /// Every duplicate is kept and numbered.
    #[default]
    Unlimited,
    /// At most this many entries per alias, counting the first.
    Limited(NonZeroUsize),
}

impl MaxEntries {
    /// Creates a cap from a count, where `0` means unlimited.
    #[must_use]
    pub fn from_count(count: usize) -> Self {
        NonZeroUsize::new(count).map_or(MaxEntries::Unlimited, MaxEntries::Limited)
    }

    /// Parses a user-supplied cap.
    ///
    /// Blank and non-numeric input is unlimited rather than rejected. A
    /// negative cap keeps only the first entry of each alias.
    #[must_use]
    pub fn parse_lenient(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() {
            return MaxEntries::Unlimited;
        }
        match input.parse::<i64>() {
            Ok(count) if count < 0 => MaxEntries::Limited(NonZeroUsize::MIN),
            Ok(count) => Self::from_count(usize::try_from(count).unwrap_or(usize::MAX)),
            Err(_) => {
                tracing::warn!(value = input, "max entries is not a number, using unlimited");
                MaxEntries::Unlimited
            }
        }
    }

    /// Returns the cap as a count, `0` meaning unlimited.
    #[must_use]
    pub fn as_count(self) -> usize {
        match self {
            MaxEntries::Unlimited => 0,
            MaxEntries::Limited(limit) => limit.get(),
        }
    }

    fn allows(self, count: usize) -> bool {
        match self {
            MaxEntries::Unlimited => true,
            MaxEntries::Limited(limit) => count < limit.get(),
        }
    }
}

impl From<usize> for MaxEntries {
    fn from(count: usize) -> Self {
        Self::from_count(count)
    }
}

impl From<MaxEntries> for usize {
    fn from(max: MaxEntries) -> Self {
        max.as_count()
    }
}

impl fmt::Display for MaxEntries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaxEntries::Unlimited => write!(f, "unlimited"),
            MaxEntries::Limited(limit) => write!(f, "{}", limit),
        }
    }
}

/// Outcome of admitting one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    /// First occurrence of its alias; emitted unchanged.
    First(OtoEntry),
    /// Duplicate that was numbered.
    Renamed(OtoEntry),
    /// Duplicate beyond the cap.
    Dropped,
}

/// Stateful resolver numbering duplicate aliases in encounter order.
#[derive(Debug, Clone)]
pub struct CollisionResolver {
    max_entries: MaxEntries,
    seen: HashMap<String, usize>,
}

impl CollisionResolver {
    /// Creates a resolver with the given cap.
    #[must_use]
    pub fn new(max_entries: MaxEntries) -> Self {
        Self {
            max_entries,
            seen: HashMap::new(),
        }
    }

    /// Admits the next entry.
    ///
    /// The collision key is the alias before numbering.
    pub fn admit(&mut self, mut entry: OtoEntry) -> Admission {
        let key = entry
            .pinyin
            .split(',')
            .next()
            .unwrap_or_default()
            .to_string();

        let Some(count) = self.seen.get_mut(&key) else {
            self.seen.insert(key, 1);
            return Admission::First(entry);
        };

        if !self.max_entries.allows(*count) {
            tracing::debug!(name = %entry.name, alias = %key, "dropping duplicate beyond cap");
            return Admission::Dropped;
        }

        *count += 1;
        entry.pinyin = format!("{}_{}", entry.pinyin, count);
        Admission::Renamed(entry)
    }
}

/// Entries kept by [`resolve_collisions`] along with counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolved {
    /// Kept entries, in encounter order.
    pub entries: Vec<OtoEntry>,
    /// Number of entries that received a numeric suffix.
    pub renamed: usize,
    /// Number of entries discarded at the cap.
    pub dropped: usize,
}

/// Resolves duplicate aliases across a sequence of entries.
///
/// # Arguments
///
/// * `entries` - Entries in processing order
/// * `max_entries` - Cap per alias
///
/// # Returns
///
/// Kept entries in encounter order with rename and drop counts.
pub fn resolve_collisions<I>(entries: I, max_entries: MaxEntries) -> Resolved
where
    I: IntoIterator<Item = OtoEntry>,
{
    let mut resolver = CollisionResolver::new(max_entries);
    let mut resolved = Resolved::default();

    for entry in entries {
        match resolver.admit(entry) {
            Admission::First(entry) => resolved.entries.push(entry),
            Admission::Renamed(entry) => {
                resolved.renamed += 1;
                resolved.entries.push(entry);
            }
            Admission::Dropped => resolved.dropped += 1,
        }
    }

    resolved
}
