// Rust guideline compliant 2026-02-06

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use otorule_core::{apply_rules, convert, parse_rules, ApplyOptions, MaxEntries, RuleTables};
use tempfile::TempDir;

const VOWELS: [&str; 5] = ["a", "i", "u", "e", "o"];
const CONSONANTS: [&str; 8] = ["k", "s", "t", "n", "h", "m", "r", "w"];

fn build_rules() -> RuleTables {
    let mut text = String::from("[CVRULE]\n");
    for consonant in CONSONANTS {
        for vowel in VOWELS {
            text.push_str(&format!(
                "{c}{v} = {c}{v},{c}{v}2,{C}{v}\n",
                c = consonant,
                v = vowel,
                C = consonant.to_uppercase()
            ));
        }
    }
    text.push_str("[VRULE]\n");
    for vowel in VOWELS {
        text.push_str(&format!("{} = {}\n", vowel, vowel.to_uppercase()));
    }
    text.push_str("[CRULE]\n");
    for consonant in CONSONANTS {
        text.push_str(&format!("{} = {}\n", consonant, consonant.to_uppercase()));
    }
    text.push_str("[TIALRULE]\n");
    for vowel in VOWELS {
        text.push_str(&format!("{v} = {v},k{v}\n", v = vowel));
    }
    parse_rules(&text)
}

fn build_oto(count: usize) -> String {
    let mut text = String::new();
    for i in 0..count {
        let consonant = CONSONANTS[i % CONSONANTS.len()];
        let vowel = VOWELS[i % VOWELS.len()];
        let alias = match i % 3 {
            0 => format!("{}{}", consonant, vowel),
            1 => format!("{} {}", vowel, consonant),
            _ => format!("- {}{}", consonant, vowel),
        };
        text.push_str(&format!("_{}.wav={},100,200,-300,150,50\n", i, alias));
    }
    text
}

fn bench_convert(c: &mut Criterion) {
    let tables = build_rules();
    let oto = build_oto(5000);
    let options = ApplyOptions {
        apply_tail_rule: true,
        max_entries: MaxEntries::Unlimited,
    };
    c.bench_function("convert_5000", |b| {
        b.iter(|| black_box(convert(&oto, &tables, &options)))
    });
}

fn bench_convert_capped(c: &mut Criterion) {
    let tables = build_rules();
    let oto = build_oto(5000);
    let options = ApplyOptions {
        apply_tail_rule: false,
        max_entries: MaxEntries::from_count(2),
    };
    c.bench_function("convert_5000_capped", |b| {
        b.iter(|| black_box(convert(&oto, &tables, &options)))
    });
}

fn bench_apply_rules_file(c: &mut Criterion) {
    let tables = build_rules();
    c.bench_function("apply_rules_file_1000", |b| {
        b.iter_batched(
            || {
                let temp_dir = TempDir::new().expect("Failed to create temp dir");
                let path = temp_dir.path().join("oto.ini");
                std::fs::write(&path, build_oto(1000)).expect("Failed to write oto.ini");
                (temp_dir, path)
            },
            |(_temp_dir, path)| {
                black_box(apply_rules(&path, &tables, &ApplyOptions::default()))
                    .expect("Failed to convert");
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_convert, bench_convert_capped, bench_apply_rules_file);
criterion_main!(benches);
