//! Known header and marker signature search.
//!
//! The signature table is static read-only data. Matching is an exhaustive
//! linear scan that advances one byte past each hit, so overlapping
//! occurrences are all reported.

use memchr::memmem;
use once_cell::sync::Lazy;

use super::types::HeaderMatch;

/// Signature bytes and their labels, in report order.
pub const SIGNATURES: &[(&[u8], &str)] = &[
    (b"\x7fELF", "ELF header"),
    (b"MZ", "DOS/PE header"),
    (&[0xEB, 0x3C, 0x90], "x86 boot sector"),
    (&[0x55, 0xAA], "x86 boot signature (at end of sector)"),
    (&[0xAA, 0x55], "x86 boot signature (little endian)"),
    (b"# De", "Shell script (# De)"),
    (b"#!/bin", "Unix script (#!/bin)"),
    (b"#!/usr", "Unix script (#!/usr)"),
];

static FINDERS: Lazy<Vec<(memmem::Finder<'static>, &'static str)>> = Lazy::new(|| {
    SIGNATURES
        .iter()
        .map(|&(bytes, label)| (memmem::Finder::new(bytes), label))
        .collect()
});

/// Scan the whole buffer for every known signature.
///
/// Returns one entry per matched label, in [`SIGNATURES`] table order, with
/// strictly ascending offsets. Labels with no matches are omitted.
pub fn search_headers(data: &[u8]) -> Vec<HeaderMatch> {
    let mut found = Vec::new();
    for (finder, label) in FINDERS.iter() {
        let mut offsets = Vec::new();
        let mut from = 0usize;
        while let Some(pos) = finder.find(&data[from..]) {
            let at = from + pos;
            offsets.push(at);
            from = at + 1;
        }
        if !offsets.is_empty() {
            found.push(HeaderMatch {
                label: (*label).to_string(),
                offsets,
            });
        }
    }
    found
}
