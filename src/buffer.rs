//! Buffer construction and bounded file loading.
//!
//! A [`SourceBuffer`] wraps the bytes under analysis for the lifetime of an
//! engine instance. It is built from exactly one of: raw bytes, a file
//! path, or base64 text. File reads are bounded by [`IoLimits`] so that an
//! oversized input is refused before it is pulled into memory.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tracing::{debug, info, warn};

use crate::error::{FirmsiftError, Result};

/// Resource limits for buffer loading.
#[derive(Debug, Clone)]
pub struct IoLimits {
    /// Maximum number of bytes read from a file.
    pub max_read_bytes: u64,
    /// Maximum file size accepted for loading.
    pub max_file_size: u64,
}

impl Default for IoLimits {
    fn default() -> Self {
        Self {
            max_read_bytes: 10 * 1024 * 1024, // 10MB
            max_file_size: 100 * 1024 * 1024, // 100MB
        }
    }
}

/// Describes the input source for a [`SourceBuffer`].
///
/// Exactly one source must be set before calling [`BufferSource::load`];
/// anything else is an [`FirmsiftError::InvalidInput`].
#[derive(Debug, Clone, Default)]
pub struct BufferSource {
    bytes: Option<Vec<u8>>,
    path: Option<PathBuf>,
    base64: Option<String>,
}

impl BufferSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use raw bytes as the input.
    pub fn bytes(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.bytes = Some(data.into());
        self
    }

    /// Read the input from a file.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Decode the input from base64 text.
    pub fn base64(mut self, text: impl Into<String>) -> Self {
        self.base64 = Some(text.into());
        self
    }

    /// Load the buffer with default [`IoLimits`].
    pub fn load(self) -> Result<SourceBuffer> {
        self.load_with_limits(&IoLimits::default())
    }

    /// Load the buffer, applying `limits` to any file read.
    pub fn load_with_limits(self, limits: &IoLimits) -> Result<SourceBuffer> {
        match (self.bytes, self.path, self.base64) {
            (Some(data), None, None) => Ok(SourceBuffer::from_bytes(data)),
            (None, Some(path), None) => SourceBuffer::from_path_with_limits(&path, limits),
            (None, None, Some(text)) => SourceBuffer::from_base64(&text),
            (None, None, None) => Err(FirmsiftError::InvalidInput(
                "no input source given; supply bytes, a path, or base64 text".to_string(),
            )),
            _ => Err(FirmsiftError::InvalidInput(
                "multiple input sources given; supply exactly one".to_string(),
            )),
        }
    }
}

/// Immutable byte buffer owned by the engine for the duration of analysis.
///
/// Never mutated after construction; every analysis is a pure read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBuffer {
    data: Vec<u8>,
}

impl SourceBuffer {
    /// Wrap raw bytes.
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        let data = data.into();
        debug!(size_bytes = data.len(), "buffer constructed from bytes");
        Self { data }
    }

    /// Decode base64 text into a buffer.
    pub fn from_base64(text: &str) -> Result<Self> {
        let data = BASE64.decode(text.trim())?;
        debug!(size_bytes = data.len(), "buffer decoded from base64");
        Ok(Self { data })
    }

    /// Read a file into a buffer with default [`IoLimits`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_path_with_limits(path, &IoLimits::default())
    }

    /// Read a file into a buffer, refusing files larger than
    /// `limits.max_file_size` and reading at most `limits.max_read_bytes`.
    pub fn from_path_with_limits<P: AsRef<Path>>(path: P, limits: &IoLimits) -> Result<Self> {
        let path = path.as_ref();
        info!("loading buffer from {:?}", path);

        let file = File::open(path)?;
        let size = file.metadata()?.len();
        if size > limits.max_file_size {
            warn!(
                "file too large: {} bytes (limit: {})",
                size, limits.max_file_size
            );
            return Err(FirmsiftError::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "file too large: {} bytes (limit: {})",
                    size, limits.max_file_size
                ),
            )));
        }

        let mut data = Vec::with_capacity(size.min(limits.max_read_bytes) as usize);
        file.take(limits.max_read_bytes).read_to_end(&mut data)?;
        debug!(size_bytes = data.len(), "buffer loaded from file");
        Ok(Self { data })
    }

    /// The wrapped bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write the raw buffer verbatim to `path`.
    pub fn export<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        info!(size_bytes = self.data.len(), "exporting buffer to {:?}", path);
        let mut file = File::create(path)?;
        file.write_all(&self.data)?;
        Ok(())
    }
}

impl AsRef<[u8]> for SourceBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
