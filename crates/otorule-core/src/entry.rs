// Rust guideline compliant 2026-02-06

//! The `oto.ini` entry model.
//!
//! An entry line has the shape `name=pinyin,timing,timing,...`. The timing
//! fields are never interpreted; they are carried through verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One `oto.ini` line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OtoEntry {
    /// Sample identifier (the part before `=`).
    pub name: String,
    /// Phoneme alias (the first comma-separated field after `=`).
    pub pinyin: String,
    /// Remaining comma-separated fields, in original order.
    pub timing: Vec<String>,
}

impl OtoEntry {
    /// Creates a new entry.
    pub fn new(name: impl Into<String>, pinyin: impl Into<String>, timing: Vec<String>) -> Self {
        Self {
            name: name.into(),
            pinyin: pinyin.into(),
            timing,
        }
    }

    /// Parses one line.
    ///
    /// Surrounding whitespace is trimmed first.
    ///
    /// # Returns
    ///
    /// `None` if the line does not contain exactly one `=` or the alias is
    /// empty.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (name, data) = line.split_once('=')?;
        if data.contains('=') {
            return None;
        }

        let mut fields = data.split(',');
        let pinyin = fields.next().unwrap_or_default();
        if pinyin.is_empty() {
            return None;
        }

        Some(Self {
            name: name.to_string(),
            pinyin: pinyin.to_string(),
            timing: fields.map(str::to_string).collect(),
        })
    }

    /// Returns a copy of this entry with a different alias.
    #[must_use]
    pub fn with_pinyin(&self, pinyin: impl Into<String>) -> Self {
        Self {
            name: self.name.clone(),
            pinyin: pinyin.into(),
            timing: self.timing.clone(),
        }
    }

    /// Key used when sorting input entries.
    #[must_use]
    pub fn pinyin_sort_key(&self) -> String {
        self.pinyin.trim().to_lowercase()
    }

    /// Key used when sorting output entries.
    #[must_use]
    pub fn name_sort_key(&self) -> String {
        self.name.trim().to_lowercase()
    }

    /// Serializes the entry back to its line form.
    #[must_use]
    pub fn to_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for OtoEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.pinyin)?;
        for field in &self.timing {
            write!(f, ",{}", field)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_line() {
        let entry = OtoEntry::parse("_ka.wav=- ka,100,50,-200,30,10\n").unwrap();
        assert_eq!(entry.name, "_ka.wav");
        assert_eq!(entry.pinyin, "- ka");
        assert_eq!(entry.timing, vec!["100", "50", "-200", "30", "10"]);
    }

    #[test]
    fn test_parse_rejects_missing_or_extra_equals() {
        assert!(OtoEntry::parse("no equals here").is_none());
        assert!(OtoEntry::parse("a.wav=ka=ki,1").is_none());
        assert!(OtoEntry::parse("").is_none());
    }

    #[test]
    fn test_parse_rejects_empty_alias() {
        assert!(OtoEntry::parse("a.wav=,100,200").is_none());
        assert!(OtoEntry::parse("a.wav=").is_none());
    }

    #[test]
    fn test_line_round_trip_keeps_empty_fields() {
        let line = "a.wav=ka,,100,,";
        assert_eq!(OtoEntry::parse(line).unwrap().to_line(), line);
    }

    #[test]
    fn test_line_without_timing() {
        let entry = OtoEntry::parse("a.wav=ka").unwrap();
        assert!(entry.timing.is_empty());
        assert_eq!(entry.to_line(), "a.wav=ka");
    }

    #[test]
    fn test_sort_keys_are_case_insensitive() {
        let entry = OtoEntry::new("B.wav", "Ka", vec![]);
        assert_eq!(entry.name_sort_key(), "b.wav");
        assert_eq!(entry.pinyin_sort_key(), "ka");
    }
}
