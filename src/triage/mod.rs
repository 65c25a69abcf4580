//! The binary triage engine: pure analyses over an immutable byte buffer.
//!
//! Each submodule reads the input without mutating it and depends only on
//! the shared buffer, never on another analysis' output, so the analyses
//! can run in any order or in parallel.

pub mod api;
pub mod config;
pub mod headers;
pub mod patterns;
pub mod report;
pub mod stats;
pub mod strings;
pub mod structure;
pub mod type_guess;
pub mod types;

pub use api::Analyzer;
pub use config::TriageConfig;
pub use types::{
    AnalysisSummary, Chunk, ChunkKind, HeaderMatch, PatternEntry, Region, StringMatch, TypeGuess,
};
