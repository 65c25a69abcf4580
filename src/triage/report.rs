//! Report assembly: deterministic text composition of the analyses.
//!
//! Section order is fixed: basic info, found headers, text strings,
//! structure analysis. The analyses are independent pure reads of the same
//! buffer, so they run in parallel and join before rendering.

use sha2::{Digest, Sha256};
use tracing::debug;

use super::config::TriageConfig;
use super::types::AnalysisSummary;
use super::{headers, stats, strings, structure, type_guess};

/// Compute the top-level metrics for one buffer.
pub fn summarize(data: &[u8], cfg: &TriageConfig) -> AnalysisSummary {
    debug!(size_bytes = data.len(), "computing basic metrics");
    AnalysisSummary {
        file_size: data.len() as u64,
        null_bytes_percentage: stats::null_bytes_percentage(data),
        entropy: stats::shannon_entropy(data),
        potential_type: type_guess::guess_type(data, &cfg.type_guess),
        text_strings: strings::extract_strings(data, cfg.strings.min_length).len(),
        sha256: hex::encode(Sha256::digest(data)),
    }
}

/// Render the full analysis report.
pub fn render(data: &[u8], cfg: &TriageConfig) -> String {
    let span = tracing::info_span!("report", size_bytes = data.len());
    let _g = span.enter();

    // None of the analyses reads another's output, so fan them out across
    // worker threads and join.
    let (summary, (found_headers, (found_strings, chunks))) = rayon::join(
        || summarize(data, cfg),
        || {
            rayon::join(
                || headers::search_headers(data),
                || {
                    rayon::join(
                        || strings::extract_strings(data, cfg.report.string_min_length),
                        || structure::analyze_structure(data, cfg.report.chunk_size, &cfg.structure),
                    )
                },
            )
        },
    );

    let mut report: Vec<String> = Vec::new();
    report.push("# Firmware Binary Analysis Report".to_string());
    report.push(String::new());

    report.push("## Basic Information".to_string());
    report.push(format!("- File Size: {} bytes", summary.file_size));
    report.push(format!("- Null Bytes: {:.2}%", summary.null_bytes_percentage));
    report.push(format!("- Entropy: {:.4}", summary.entropy));
    report.push(format!("- Potential File Type: {}", summary.potential_type));
    report.push(format!("- Text Strings Count: {}", summary.text_strings));
    report.push(format!("- SHA-256: {}", summary.sha256));
    report.push(String::new());

    if !found_headers.is_empty() {
        report.push("## Found Headers".to_string());
        for m in &found_headers {
            let shown = m.offsets.len().min(cfg.report.max_header_offsets);
            let mut pos_str = m.offsets[..shown]
                .iter()
                .map(|o| format!("0x{:X}", o))
                .collect::<Vec<_>>()
                .join(", ");
            if m.offsets.len() > shown {
                pos_str.push_str(&format!(", ... ({} more)", m.offsets.len() - shown));
            }
            report.push(format!("- {}: at offsets {}", m.label, pos_str));
        }
        report.push(String::new());
    }

    if !found_strings.is_empty() {
        report.push("## Text Strings".to_string());
        for m in found_strings.iter().take(cfg.report.max_strings) {
            report.push(format!("- \"{}\"", m.text));
        }
        if found_strings.len() > cfg.report.max_strings {
            report.push(format!(
                "- ... ({} more strings)",
                found_strings.len() - cfg.report.max_strings
            ));
        }
        report.push(String::new());
    }

    report.push("## Structure Analysis".to_string());
    for region in structure::merge_regions(&chunks) {
        report.push(format!(
            "- {} region: 0x{:X} - 0x{:X} ({} bytes)",
            region.kind,
            region.start,
            region.end,
            region.end - region.start
        ));
    }

    report.join("\n")
}
