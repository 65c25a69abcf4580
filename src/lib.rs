//! Firmsift: heuristic triage for firmware images and unknown binaries.
//!
//! Given an arbitrary byte blob, firmsift computes statistical and
//! structural signals — Shannon entropy, null-byte density, printable
//! string extraction, repeating byte-pattern mining, known-header signature
//! matching, and chunk-wise region classification — and assembles them into
//! a human-readable report.
//!
//! The signals are advisory: firmsift is not a disassembler or a format
//! parser, and its verdicts are meant to guide manual investigation, not to
//! authoritatively classify an input.
//!
//! Every analysis is a pure read over an immutable [`buffer::SourceBuffer`];
//! none depends on another's output, so they can run in any order or in
//! parallel. The high-level entry point is [`triage::Analyzer`].

/// Buffer construction and bounded file loading.
pub mod buffer;
/// Error taxonomy.
pub mod error;
/// Tracing subscriber setup.
pub mod logging;
/// The triage engine proper.
pub mod triage;

pub use buffer::{BufferSource, IoLimits, SourceBuffer};
pub use error::{FirmsiftError, Result};
pub use triage::{Analyzer, TriageConfig};
