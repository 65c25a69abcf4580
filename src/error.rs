//! Error types for the firmsift triage engine.
//!
//! Structured error handling using thiserror. Every failure surfaces to the
//! caller; an empty buffer is a valid state, not an error, so the analyses
//! themselves are infallible.

use thiserror::Error;

/// Main error type for firmsift operations.
#[derive(Debug, Error)]
pub enum FirmsiftError {
    /// Zero or multiple input sources given to the buffer constructor.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Malformed base64 input text.
    #[error("Base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    /// File I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for firmsift operations.
pub type Result<T> = std::result::Result<T, FirmsiftError>;
