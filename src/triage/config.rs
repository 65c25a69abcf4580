//! Configuration for the triage engine.
//!
//! Centralized tunables for every analysis, with defaults matching the
//! documented heuristics. All thresholds are plain data and can be
//! serialized alongside results.

use serde::{Deserialize, Serialize};

/// Master configuration for the triage pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriageConfig {
    /// String extraction configuration.
    pub strings: StringsConfig,
    /// Repeating-pattern mining configuration.
    pub patterns: PatternConfig,
    /// Structural segmentation thresholds.
    pub structure: StructureConfig,
    /// Type-guess heuristic thresholds.
    pub type_guess: TypeGuessConfig,
    /// Report rendering knobs.
    pub report: ReportConfig,
}

/// String extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringsConfig {
    /// Minimum run length kept by the scanner (default: 4).
    pub min_length: usize,
}

impl Default for StringsConfig {
    fn default() -> Self {
        Self { min_length: 4 }
    }
}

/// Repeating-pattern mining configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternConfig {
    /// Maximum number of entries returned (default: 10).
    pub max_entries: usize,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self { max_entries: 10 }
    }
}

/// Structural segmentation thresholds, as percentages in [0, 100].
///
/// A chunk is classified by the first matching rule: null above
/// `padding_null_min` is padding; null below `text_null_max` with non-ASCII
/// below `text_non_ascii_max` is text; null below `code_null_max` with
/// non-ASCII above `code_non_ascii_min` is code or data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureConfig {
    pub padding_null_min: f64,
    pub text_null_max: f64,
    pub text_non_ascii_max: f64,
    pub code_null_max: f64,
    pub code_non_ascii_min: f64,
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self {
            padding_null_min: 90.0,
            text_null_max: 10.0,
            text_non_ascii_max: 10.0,
            code_null_max: 50.0,
            code_non_ascii_min: 80.0,
        }
    }
}

/// Type-guess heuristic thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeGuessConfig {
    /// Null percentage above which a large buffer reads as padded firmware
    /// (default: 50.0).
    pub firmware_null_min: f64,
    /// Minimum size for the padded-firmware verdict (default: 1024).
    pub firmware_size_min: usize,
    /// Minimum size before Thumb-pattern scanning applies (default: 32).
    pub thumb_size_min: usize,
}

impl Default for TypeGuessConfig {
    fn default() -> Self {
        Self {
            firmware_null_min: 50.0,
            firmware_size_min: 1024,
            thumb_size_min: 32,
        }
    }
}

/// Report rendering knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Minimum string length shown in the report (default: 6; longer than
    /// the scanner default to cut noise).
    pub string_min_length: usize,
    /// Maximum strings listed before truncation (default: 20).
    pub max_strings: usize,
    /// Chunk size for the structure section (default: 32).
    pub chunk_size: usize,
    /// Maximum offsets listed per header label (default: 5).
    pub max_header_offsets: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            string_min_length: 6,
            max_strings: 20,
            chunk_size: 32,
            max_header_offsets: 5,
        }
    }
}
