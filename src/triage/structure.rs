//! Chunk-wise structural segmentation and classification.
//!
//! The buffer is partitioned into fixed-size chunks in offset order; each
//! chunk gets null-byte and non-ASCII percentages and a coarse
//! classification from the thresholds in
//! [`StructureConfig`](super::config::StructureConfig).

use super::config::StructureConfig;
use super::stats::count_null_bytes;
use super::types::{Chunk, ChunkKind, Region};

/// Default chunk size in bytes; the report uses 32.
pub const DEFAULT_CHUNK_SIZE: usize = 16;

/// Partition the buffer into `chunk_size` chunks and classify each.
///
/// The final chunk may be shorter. Buffers smaller than one chunk yield an
/// empty result, not an error.
pub fn analyze_structure(data: &[u8], chunk_size: usize, cfg: &StructureConfig) -> Vec<Chunk> {
    if chunk_size == 0 || data.len() < chunk_size {
        return Vec::new();
    }

    let mut chunks = Vec::with_capacity(data.len() / chunk_size + 1);
    for (index, slice) in data.chunks(chunk_size).enumerate() {
        let len = slice.len() as f64;
        let null_percentage = count_null_bytes(slice) as f64 / len * 100.0;
        let non_ascii_percentage =
            slice.iter().filter(|&&b| b < 0x20 || b > 0x7E).count() as f64 / len * 100.0;

        chunks.push(Chunk {
            offset: index * chunk_size,
            size: slice.len(),
            null_percentage,
            non_ascii_percentage,
            kind: classify(null_percentage, non_ascii_percentage, cfg),
            first_bytes: hex::encode(&slice[..slice.len().min(4)]),
        });
    }
    chunks
}

fn classify(null_pct: f64, non_ascii_pct: f64, cfg: &StructureConfig) -> ChunkKind {
    if null_pct > cfg.padding_null_min {
        ChunkKind::EmptyPadding
    } else if null_pct < cfg.text_null_max && non_ascii_pct < cfg.text_non_ascii_max {
        ChunkKind::Text
    } else if null_pct < cfg.code_null_max && non_ascii_pct > cfg.code_non_ascii_min {
        ChunkKind::CodeOrData
    } else {
        ChunkKind::Unknown
    }
}

/// Merge runs of adjacent equally-classified chunks into regions.
///
/// Only contiguous chunks merge; two runs of the same kind separated by a
/// differently-classified chunk stay separate regions.
pub fn merge_regions(chunks: &[Chunk]) -> Vec<Region> {
    let mut regions: Vec<Region> = Vec::new();
    for chunk in chunks {
        match regions.last_mut() {
            Some(region) if region.kind == chunk.kind && region.end == chunk.offset => {
                region.end = chunk.offset + chunk.size;
            }
            _ => regions.push(Region {
                kind: chunk.kind,
                start: chunk.offset,
                end: chunk.offset + chunk.size,
            }),
        }
    }
    regions
}
