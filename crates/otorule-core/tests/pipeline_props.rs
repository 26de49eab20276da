// Rust guideline compliant 2026-02-06

//! Property-based tests for the conversion pipeline.
//!
//! These tests validate properties that hold across arbitrary voicebanks and
//! rule tables.

use otorule_core::{convert, resolve_collisions, ApplyOptions, MaxEntries, OtoEntry, RuleTable, RuleTables};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Generates a phoneme-like token.
fn arb_token() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,4}").unwrap()
}

/// Generates timing fields.
fn arb_timing() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::string::string_regex("-?[0-9]{1,4}").unwrap(), 0..6)
}

fn table(rules: Vec<(String, Vec<String>)>) -> RuleTable {
    rules.into_iter().collect()
}

proptest! {
    /// Without any rules, every entry passes through byte-identical.
    #[test]
    fn test_passthrough_without_rules(
        aliases in prop::collection::btree_set(arb_token(), 1..20),
        timing in arb_timing(),
    ) {
        let lines: Vec<String> = aliases
            .iter()
            .enumerate()
            .map(|(idx, alias)| OtoEntry::new(format!("s{:03}.wav", idx), alias.as_str(), timing.clone()).to_line())
            .collect();

        let conversion = convert(&lines.join("\n"), &RuleTables::default(), &ApplyOptions::default());
        prop_assert_eq!(conversion.lines(), lines);
        prop_assert_eq!(conversion.stats.unchanged, aliases.len());
    }

    /// A plain alias with N distinct CV alternatives yields N entries.
    #[test]
    fn test_cv_alternatives_fan_out(
        key in arb_token(),
        alternatives in prop::collection::btree_set(prop::string::string_regex("[A-Z]{1,4}").unwrap(), 1..6),
        timing in arb_timing(),
    ) {
        let alternatives: Vec<String> = alternatives.into_iter().collect();
        let tables = RuleTables {
            cv: table(vec![(key.clone(), alternatives.clone())]),
            ..RuleTables::default()
        };
        let line = OtoEntry::new("a.wav", key.as_str(), timing.clone()).to_line();

        let conversion = convert(&line, &tables, &ApplyOptions::default());
        let pinyins: Vec<String> = conversion.entries.iter().map(|entry| entry.pinyin.clone()).collect();
        prop_assert_eq!(pinyins, alternatives);
        for entry in &conversion.entries {
            prop_assert_eq!(&entry.timing, &timing);
        }
    }

    /// Split aliases keep exactly one space after rewriting.
    #[test]
    fn test_split_alias_keeps_single_space(
        left in arb_token(),
        right in arb_token(),
        vowel in arb_token(),
        consonant in arb_token(),
    ) {
        let tables = RuleTables {
            v: table(vec![(left.clone(), vec![vowel])]),
            c: table(vec![(right.clone(), vec![consonant])]),
            ..RuleTables::default()
        };
        let line = format!("a.wav={} {},1", left, right);

        let conversion = convert(&line, &tables, &ApplyOptions::default());
        prop_assert_eq!(conversion.entries.len(), 1);
        prop_assert_eq!(conversion.entries[0].pinyin.matches(' ').count(), 1);
    }

    /// The tail pass keeps the "- " prefix.
    #[test]
    fn test_tail_pass_preserves_prefix(
        rest in arb_token(),
        value in arb_token(),
        tail_key in arb_token(),
    ) {
        prop_assume!(rest != value);
        let tables = RuleTables {
            cv: table(vec![(rest.clone(), vec![value.clone()])]),
            tail: table(vec![(tail_key.clone(), vec![value])]),
            ..RuleTables::default()
        };
        let options = ApplyOptions {
            apply_tail_rule: true,
            max_entries: MaxEntries::Unlimited,
        };
        let line = format!("t.wav=- {},1", rest);

        let conversion = convert(&line, &tables, &options);
        prop_assert_eq!(conversion.entries.len(), 1);
        prop_assert_eq!(conversion.entries[0].pinyin.clone(), format!("- {}", tail_key));
    }

    /// Numbering yields distinct aliases and respects the cap.
    #[test]
    fn test_collisions_respect_cap(copies in 1usize..12, cap in 0usize..6) {
        let entries = (0..copies).map(|idx| OtoEntry::new(format!("{}.wav", idx), "ka", vec![]));
        let resolved = resolve_collisions(entries, MaxEntries::from_count(cap));

        let expected = if cap == 0 { copies } else { copies.min(cap) };
        prop_assert_eq!(resolved.entries.len(), expected);
        prop_assert_eq!(resolved.dropped, copies - expected);

        let aliases: BTreeSet<&str> = resolved.entries.iter().map(|entry| entry.pinyin.as_str()).collect();
        prop_assert_eq!(aliases.len(), expected);
        prop_assert_eq!(resolved.entries[0].pinyin.as_str(), "ka");
    }
}
