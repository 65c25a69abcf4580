//! Integration tests for report composition.

use firmsift::{Analyzer, SourceBuffer};

#[test]
fn report_for_padded_elf_carries_all_sections() {
    let mut data = b"\x7fELF".to_vec();
    data.extend_from_slice(b"version string 1.2.3\x00");
    data.extend_from_slice(&vec![0u8; 256]);
    let report = Analyzer::new(SourceBuffer::from_bytes(data)).generate_report();

    assert!(report.starts_with("# Firmware Binary Analysis Report"));
    assert!(report.contains("- Potential File Type: ELF executable"));
    assert!(report.contains("- ELF header: at offsets 0x0"));
    assert!(report.contains("- \"ELFversion string 1.2.3\""));
    assert!(report.contains("## Structure Analysis"));
    assert!(report.contains("Empty/Padding region"));
}

#[test]
fn regions_are_contiguous_merges_not_groupings() {
    // padding, text, padding: the two padding runs must stay separate.
    let mut data = vec![0u8; 64];
    data.extend_from_slice(&vec![b'A'; 64]);
    data.extend_from_slice(&vec![0u8; 64]);
    let report = Analyzer::new(SourceBuffer::from_bytes(data)).generate_report();

    let padding_regions = report.matches("Empty/Padding region").count();
    assert_eq!(padding_regions, 2);
    assert!(report.contains("- Empty/Padding region: 0x0 - 0x40 (64 bytes)"));
    assert!(report.contains("- Possible Text region: 0x40 - 0x80 (64 bytes)"));
    assert!(report.contains("- Empty/Padding region: 0x80 - 0xC0 (64 bytes)"));
}

#[test]
fn short_buffer_report_has_no_structure_regions() {
    let report = Analyzer::new(SourceBuffer::from_bytes(b"tiny".to_vec())).generate_report();
    assert!(report.contains("## Structure Analysis"));
    assert!(!report.contains("region:"));
}

#[test]
fn report_is_deterministic_across_analyzers() {
    let data: Vec<u8> = (0..2048u32).map(|i| (i * 17 % 256) as u8).collect();
    let r1 = Analyzer::new(SourceBuffer::from_bytes(data.clone())).generate_report();
    let r2 = Analyzer::new(SourceBuffer::from_bytes(data)).generate_report();
    assert_eq!(r1, r2);
}
