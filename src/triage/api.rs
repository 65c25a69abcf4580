//! High-level analyzer over one buffer.

use std::path::Path;

use tracing::info;

use crate::buffer::SourceBuffer;
use crate::error::Result;

use super::config::TriageConfig;
use super::types::{AnalysisSummary, Chunk, HeaderMatch, PatternEntry, StringMatch};
use super::{headers, patterns, report, strings, structure};

/// Triage engine instance wrapping one immutable [`SourceBuffer`].
///
/// Every method is a pure read; calling them in any order, any number of
/// times, yields identical results. The instance is cheap to construct and
/// meant to be discarded after report generation or export.
#[derive(Debug, Clone)]
pub struct Analyzer {
    buffer: SourceBuffer,
    config: TriageConfig,
}

impl Analyzer {
    /// Wrap a buffer with the default configuration.
    pub fn new(buffer: SourceBuffer) -> Self {
        Self::with_config(buffer, TriageConfig::default())
    }

    pub fn with_config(buffer: SourceBuffer, config: TriageConfig) -> Self {
        Self { buffer, config }
    }

    pub fn buffer(&self) -> &SourceBuffer {
        &self.buffer
    }

    pub fn config(&self) -> &TriageConfig {
        &self.config
    }

    /// Top-level metrics: size, null density, entropy, type guess, string
    /// count, digest.
    pub fn analyze_basic(&self) -> AnalysisSummary {
        report::summarize(self.buffer.data(), &self.config)
    }

    /// Printable-ASCII runs of at least `min_length` bytes, in offset order.
    pub fn extract_strings(&self, min_length: usize) -> Vec<StringMatch> {
        strings::extract_strings(self.buffer.data(), min_length)
    }

    /// Most frequent repeating `window`-byte sequences, capped by the
    /// configured maximum.
    pub fn find_patterns(&self, window: usize) -> Vec<PatternEntry> {
        patterns::find_patterns(self.buffer.data(), window, self.config.patterns.max_entries)
    }

    /// Every known-signature match in the buffer, overlapping included.
    pub fn search_headers(&self) -> Vec<HeaderMatch> {
        headers::search_headers(self.buffer.data())
    }

    /// Fixed-size chunk segmentation with per-chunk classification.
    pub fn analyze_structure(&self, chunk_size: usize) -> Vec<Chunk> {
        structure::analyze_structure(self.buffer.data(), chunk_size, &self.config.structure)
    }

    /// Compose the full text report.
    pub fn generate_report(&self) -> String {
        info!(size_bytes = self.buffer.len(), "generating report");
        report::render(self.buffer.data(), &self.config)
    }

    /// Write the raw buffer verbatim to `path`.
    pub fn export<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.buffer.export(path)
    }
}
