//! Printable-ASCII string extraction.
//!
//! A single forward pass accumulates consecutive printable bytes
//! (0x20..=0x7E inclusive) into runs; a run is kept once it reaches the
//! minimum length and ends at the first non-printable byte or at the end of
//! the buffer. Runs are non-overlapping and returned in offset order.

use super::types::StringMatch;

#[inline]
fn is_printable(b: u8) -> bool {
    (0x20..=0x7E).contains(&b)
}

/// Extract printable-ASCII runs of at least `min_length` bytes.
pub fn extract_strings(data: &[u8], min_length: usize) -> Vec<StringMatch> {
    let mut out: Vec<StringMatch> = Vec::new();
    let mut run: Vec<u8> = Vec::new();
    let mut run_offset = 0usize;

    for (i, &b) in data.iter().enumerate() {
        if is_printable(b) {
            if run.is_empty() {
                run_offset = i;
            }
            run.push(b);
        } else if !run.is_empty() {
            flush_run(&mut out, &mut run, run_offset, min_length);
        }
    }
    // The trailing run must flush too; a buffer ending mid-string still
    // yields that string.
    if !run.is_empty() {
        flush_run(&mut out, &mut run, run_offset, min_length);
    }

    out
}

fn flush_run(out: &mut Vec<StringMatch>, run: &mut Vec<u8>, offset: usize, min_length: usize) {
    if run.len() >= min_length {
        // Printable ASCII is always valid UTF-8.
        if let Ok(text) = String::from_utf8(std::mem::take(run)) {
            out.push(StringMatch { text, offset });
        }
    }
    run.clear();
}
