//! Repeating byte-pattern mining.
//!
//! Every window position is keyed by content in a hash-keyed accumulator;
//! windows seen at two or more offsets are ranked by frequency. The
//! O(len * window) sweep dominates triage runtime on large inputs.

use std::collections::HashMap;

use super::types::PatternEntry;

/// Default sliding-window size in bytes.
pub const DEFAULT_WINDOW: usize = 4;

/// Find the most frequent repeating byte sequences of length `window`.
///
/// Only sequences occurring at least twice are kept. Entries are sorted by
/// descending occurrence count; ties break by first-occurrence offset
/// ascending so the result is reproducible across runs. At most
/// `max_entries` entries are returned. Buffers shorter than two windows
/// yield an empty result.
pub fn find_patterns(data: &[u8], window: usize, max_entries: usize) -> Vec<PatternEntry> {
    if window == 0 || data.len() < window * 2 {
        return Vec::new();
    }

    let mut offsets_by_window: HashMap<&[u8], Vec<usize>> = HashMap::new();
    for (i, w) in data.windows(window).enumerate() {
        offsets_by_window.entry(w).or_default().push(i);
    }

    let mut entries: Vec<PatternEntry> = offsets_by_window
        .into_iter()
        .filter(|(_, offsets)| offsets.len() >= 2)
        .map(|(bytes, offsets)| PatternEntry {
            bytes: bytes.to_vec(),
            offsets,
        })
        .collect();

    entries.sort_by(|a, b| {
        b.offsets
            .len()
            .cmp(&a.offsets.len())
            .then(a.offsets[0].cmp(&b.offsets[0]))
    });
    entries.truncate(max_entries);
    entries
}
