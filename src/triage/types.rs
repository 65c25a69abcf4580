//! Result types produced by the triage analyses.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse file-type verdict from the priority heuristic chain.
///
/// Magic-number checks outrank statistical heuristics, which outrank the
/// generic fallback; see [`crate::triage::type_guess::guess_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeGuess {
    /// Fewer than four bytes; nothing to go on.
    TooSmall,
    Elf,
    Pe,
    Jpeg,
    Png,
    /// Mostly null bytes and large enough to plausibly be a padded image.
    NullPadded,
    /// Contains ARM Thumb prologue/epilogue encodings.
    ArmThumb,
    Unknown,
}

impl fmt::Display for TypeGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TypeGuess::TooSmall => "Unknown (too small)",
            TypeGuess::Elf => "ELF executable",
            TypeGuess::Pe => "Windows PE executable",
            TypeGuess::Jpeg => "JPEG image",
            TypeGuess::Png => "PNG image",
            TypeGuess::NullPadded => "Possible firmware (high null byte count)",
            TypeGuess::ArmThumb => "Possible ARM firmware",
            TypeGuess::Unknown => "Unknown binary format",
        };
        f.write_str(label)
    }
}

/// Top-level metrics for one buffer.
///
/// Derived purely from the buffer contents; recomputing yields
/// bit-identical values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub file_size: u64,
    /// Percentage of 0x00 bytes, in [0, 100]; 0 for an empty buffer.
    pub null_bytes_percentage: f64,
    /// Shannon entropy in bits per byte, in [0, 8].
    pub entropy: f64,
    pub potential_type: TypeGuess,
    /// Count of printable-ASCII runs at the default minimum length.
    pub text_strings: usize,
    /// Lowercase hex SHA-256 digest of the buffer.
    pub sha256: String,
}

impl AnalysisSummary {
    /// Serialize to a stable JSON string.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Deserialize from a JSON string.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// A printable-ASCII run and the offset where it starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringMatch {
    pub text: String,
    pub offset: usize,
}

/// A fixed-size byte sequence that occurs at two or more offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternEntry {
    pub bytes: Vec<u8>,
    /// Ascending start offsets of every occurrence.
    pub offsets: Vec<usize>,
}

impl PatternEntry {
    pub fn count(&self) -> usize {
        self.offsets.len()
    }
}

/// A known signature with its label and every match offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderMatch {
    pub label: String,
    /// Strictly ascending; overlapping matches are all reported.
    pub offsets: Vec<usize>,
}

/// Classification assigned to a structural chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChunkKind {
    EmptyPadding,
    Text,
    CodeOrData,
    Unknown,
}

impl fmt::Display for ChunkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ChunkKind::EmptyPadding => "Empty/Padding",
            ChunkKind::Text => "Possible Text",
            ChunkKind::CodeOrData => "Possible Code or Data",
            ChunkKind::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// One fixed-size slice of the buffer with its structural metrics.
///
/// The final chunk of a buffer may be shorter than the configured size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub offset: usize,
    pub size: usize,
    pub null_percentage: f64,
    pub non_ascii_percentage: f64,
    pub kind: ChunkKind,
    /// Up to four leading bytes, hex encoded.
    pub first_bytes: String,
}

/// A contiguous run of equally-classified chunks, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub kind: ChunkKind,
    pub start: usize,
    pub end: usize,
}
