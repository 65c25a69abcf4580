//! Entropy and byte-level statistics.

use memchr::memchr_iter;

/// Shannon entropy of a byte slice, in bits per byte.
///
/// Returns a value between 0.0 and 8.0, where 0.0 means every byte has the
/// same value and 8.0 means a uniform distribution over all 256 values.
/// An empty buffer yields 0.0.
#[inline]
pub fn shannon_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let mut hist = [0usize; 256];
    for &b in data {
        hist[b as usize] += 1;
    }
    let len = data.len() as f64;
    let mut h = 0.0;
    for c in hist.iter().copied() {
        if c == 0 {
            continue;
        }
        let p = (c as f64) / len;
        h -= p * p.log2();
    }
    h
}

/// Number of 0x00 bytes in the buffer.
#[inline]
pub fn count_null_bytes(data: &[u8]) -> usize {
    memchr_iter(0, data).count()
}

/// Percentage of 0x00 bytes, in [0, 100]; 0.0 for an empty buffer.
pub fn null_bytes_percentage(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    count_null_bytes(data) as f64 / data.len() as f64 * 100.0
}
