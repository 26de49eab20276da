// Rust guideline compliant 2026-02-06

//! Unit tests for reclist generation.

use otorule_core::{collect_base_names, generate_reclist, Error};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_collect_base_names_dedupes_and_sorts() {
    let text = "_ka_ki.wav=ka,1\n_ka_ki.wav=- k,2\n_a.wav=a,3\nB.wav=b\n";
    let names: Vec<String> = collect_base_names(text).into_iter().collect();

    // Ordinal order puts uppercase before underscore.
    assert_eq!(names, vec!["B", "_a", "_ka_ki"]);
}

#[test]
fn test_collect_base_names_ignores_lines_without_equals() {
    let names = collect_base_names("#comment\n\nnoext=ka\n");
    assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["noext"]);
}

#[test]
fn test_generate_reclist_writes_one_name_per_line() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("oto.ini");
    let output = temp_dir.path().join("reclist.txt");
    fs::write(&input, "b.wav=ka,1\na.wav=ki,2\nb.wav=ku,3\n").expect("Failed to write oto.ini");

    let count = generate_reclist(&input, &output).expect("Failed to generate reclist");
    assert_eq!(count, 2);
    assert_eq!(fs::read_to_string(&output).unwrap(), "a\nb\n");
}

#[test]
fn test_generate_reclist_empty_input() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("oto.ini");
    let output = temp_dir.path().join("reclist.txt");
    fs::write(&input, "").expect("Failed to write oto.ini");

    assert_eq!(generate_reclist(&input, &output).unwrap(), 0);
    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn test_generate_reclist_shift_jis_input() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("oto.ini");
    let output = temp_dir.path().join("reclist.txt");
    let (encoded, _, _) = encoding_rs::SHIFT_JIS.encode("_あいう.wav=あ,1\n");
    fs::write(&input, &encoded).expect("Failed to write oto.ini");

    generate_reclist(&input, &output).expect("Failed to generate reclist");
    assert_eq!(fs::read_to_string(&output).unwrap(), "_あいう\n");
}

#[test]
fn test_generate_reclist_drops_undecodable_bytes() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("oto.ini");
    let output = temp_dir.path().join("reclist.txt");
    fs::write(&input, [b'a', 0x82, 0xFF, b'b', b'.', b'w', b'=', b'k', b'\n'])
        .expect("Failed to write oto.ini");

    generate_reclist(&input, &output).expect("Failed to generate reclist");
    assert_eq!(fs::read_to_string(&output).unwrap(), "ab\n");
}

#[test]
fn test_generate_reclist_missing_input() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = generate_reclist(
        &temp_dir.path().join("missing.ini"),
        &temp_dir.path().join("reclist.txt"),
    )
    .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    assert!(!temp_dir.path().join("reclist.txt").exists());
}
