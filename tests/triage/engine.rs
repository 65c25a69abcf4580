//! End-to-end properties of the analysis surface.

use firmsift::triage::structure::DEFAULT_CHUNK_SIZE;
use firmsift::triage::types::TypeGuess;
use firmsift::{Analyzer, SourceBuffer};

fn analyzer_for(data: Vec<u8>) -> Analyzer {
    Analyzer::new(SourceBuffer::from_bytes(data))
}

#[test]
fn padded_elf_summary_matches_expectations() {
    let mut data = b"\x7fELF".to_vec();
    data.extend_from_slice(&vec![0u8; 1000]);
    let analyzer = analyzer_for(data);

    let summary = analyzer.analyze_basic();
    assert_eq!(summary.file_size, 1004);
    assert_eq!(summary.potential_type, TypeGuess::Elf);
    assert_eq!(summary.potential_type.to_string(), "ELF executable");
    assert!((summary.null_bytes_percentage - 99.6).abs() < 0.01);
    assert!(summary.entropy >= 0.0 && summary.entropy <= 8.0);

    let found = analyzer.search_headers();
    let elf = found
        .iter()
        .find(|m| m.label == "ELF header")
        .expect("ELF header must be reported");
    assert_eq!(elf.offsets[0], 0);
}

#[test]
fn magic_outranks_thumb_pattern_in_the_body() {
    let mut data = b"\x7fELF".to_vec();
    data.extend_from_slice(&[0x41u8; 64]);
    data.extend_from_slice(&[0x10, 0xB5]);
    let summary = analyzer_for(data).analyze_basic();
    assert_eq!(summary.potential_type, TypeGuess::Elf);
}

#[test]
fn hello_world_is_a_single_printable_run() {
    let analyzer = analyzer_for(b"hello world!!".to_vec());
    let matches = analyzer.extract_strings(4);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].text, "hello world!!");
    assert_eq!(matches[0].offset, 0);
}

#[test]
fn string_extraction_is_idempotent() {
    let analyzer = analyzer_for(b"one\x00two strings\x01and a trailing run".to_vec());
    let a = analyzer.extract_strings(4);
    let b = analyzer.extract_strings(4);
    assert_eq!(a, b);
    // Trailing run flushed despite no terminator.
    assert_eq!(a.last().unwrap().text, "and a trailing run");
}

#[test]
fn pattern_mining_respects_count_and_cap_invariants() {
    let data: Vec<u8> = (0..32u8).cycle().take(8192).collect();
    let analyzer = analyzer_for(data);
    let entries = analyzer.find_patterns(4);
    assert!(entries.len() <= 10);
    assert!(!entries.is_empty());
    for e in &entries {
        assert!(e.count() >= 2);
        assert_eq!(e.bytes.len(), 4);
    }
    assert_eq!(entries, analyzer.find_patterns(4));
}

#[test]
fn overlapping_boot_signatures_are_all_reported() {
    let analyzer = analyzer_for(vec![0x55, 0xAA, 0x55, 0xAA, 0x55]);
    let found = analyzer.search_headers();
    let be = found
        .iter()
        .find(|m| m.label == "x86 boot signature (at end of sector)")
        .unwrap();
    assert_eq!(be.offsets, vec![0, 2]);
    let le = found
        .iter()
        .find(|m| m.label == "x86 boot signature (little endian)")
        .unwrap();
    assert_eq!(le.offsets, vec![1, 3]);
}

#[test]
fn chunk_spans_reconstruct_the_buffer() {
    let data: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
    let analyzer = analyzer_for(data.clone());
    let chunks = analyzer.analyze_structure(DEFAULT_CHUNK_SIZE);
    let mut rebuilt = Vec::new();
    for c in &chunks {
        rebuilt.extend_from_slice(&data[c.offset..c.offset + c.size]);
    }
    assert_eq!(rebuilt, data);
}

#[test]
fn summary_json_is_stable_for_same_input() {
    let data: Vec<u8> = (0..100u8).collect();
    let analyzer = analyzer_for(data);
    let j1 = analyzer.analyze_basic().to_json_string().unwrap();
    let j2 = analyzer.analyze_basic().to_json_string().unwrap();
    assert_eq!(j1, j2, "JSON outputs differ across identical runs");
}
