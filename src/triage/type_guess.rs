//! File-type guessing from magic prefixes and firmware heuristics.
//!
//! The checks run in a fixed priority order: magic numbers first, then the
//! null-density heuristic, then the Thumb-pattern scan, then the generic
//! fallback. The order is load-bearing; reordering changes verdicts on
//! ambiguous inputs.

use memchr::memmem;

use super::config::TypeGuessConfig;
use super::stats::null_bytes_percentage;
use super::types::TypeGuess;

/// Magic prefixes checked before any statistical heuristic.
const MAGIC_PREFIXES: &[(&[u8], TypeGuess)] = &[
    (b"\x7fELF", TypeGuess::Elf),
    (b"MZ", TypeGuess::Pe),
    (&[0xFF, 0xD8, 0xFF], TypeGuess::Jpeg),
    (b"\x89PNG", TypeGuess::Png),
];

/// Thumb push/pop encodings common at ARM firmware function boundaries.
const THUMB_PATTERNS: &[&[u8]] = &[
    &[0x10, 0xB5],
    &[0x00, 0xBD],
    &[0xF0, 0xB5],
    &[0xF0, 0xBD],
];

/// Guess a coarse file type; first matching rule wins.
pub fn guess_type(data: &[u8], cfg: &TypeGuessConfig) -> TypeGuess {
    if data.len() < 4 {
        return TypeGuess::TooSmall;
    }

    for (magic, guess) in MAGIC_PREFIXES {
        if data.starts_with(magic) {
            return *guess;
        }
    }

    if null_bytes_percentage(data) > cfg.firmware_null_min && data.len() > cfg.firmware_size_min {
        return TypeGuess::NullPadded;
    }

    if data.len() > cfg.thumb_size_min
        && THUMB_PATTERNS
            .iter()
            .any(|p| memmem::find(data, p).is_some())
    {
        return TypeGuess::ArmThumb;
    }

    TypeGuess::Unknown
}
