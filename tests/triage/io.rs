//! Integration tests for buffer construction and export.

use std::io::Write;

use firmsift::{BufferSource, FirmsiftError, IoLimits, SourceBuffer};
use tempfile::NamedTempFile;

#[test]
fn exactly_one_source_is_enforced() {
    assert!(matches!(
        BufferSource::new().load(),
        Err(FirmsiftError::InvalidInput(_))
    ));
    assert!(matches!(
        BufferSource::new().bytes(vec![1u8]).path("/tmp/x").load(),
        Err(FirmsiftError::InvalidInput(_))
    ));
    assert!(matches!(
        BufferSource::new()
            .bytes(vec![1u8])
            .path("/tmp/x")
            .base64("AAAA")
            .load(),
        Err(FirmsiftError::InvalidInput(_))
    ));
}

#[test]
fn base64_source_decodes() {
    // b"\x7fELF\x00\x00"
    let buf = BufferSource::new().base64("f0VMRgAA").load().unwrap();
    assert_eq!(buf.data(), b"\x7fELF\x00\x00");
}

#[test]
fn malformed_base64_surfaces_decode_error() {
    let err = BufferSource::new().base64("%%%%").load().unwrap_err();
    assert!(matches!(err, FirmsiftError::Decode(_)));
}

#[test]
fn missing_file_surfaces_io_error() {
    let err = BufferSource::new()
        .path("/nonexistent/firmsift-integration")
        .load()
        .unwrap_err();
    assert!(matches!(err, FirmsiftError::Io(_)));
}

#[test]
fn export_then_reload_roundtrips_byte_identically() {
    let payload: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    let buf = SourceBuffer::from_bytes(payload.clone());

    let out = NamedTempFile::new().unwrap();
    buf.export(out.path()).unwrap();

    let reloaded = BufferSource::new().path(out.path()).load().unwrap();
    assert_eq!(reloaded.data(), payload.as_slice());
}

#[test]
fn file_loading_respects_limits() {
    let temp = NamedTempFile::new().unwrap();
    temp.as_file().write_all(&[0xAAu8; 4096]).unwrap();

    // Size cap refuses the file outright.
    let strict = IoLimits {
        max_read_bytes: 1 << 20,
        max_file_size: 1024,
    };
    assert!(BufferSource::new()
        .path(temp.path())
        .load_with_limits(&strict)
        .is_err());

    // Read cap truncates the data instead.
    let bounded = IoLimits {
        max_read_bytes: 512,
        max_file_size: 1 << 20,
    };
    let buf = BufferSource::new()
        .path(temp.path())
        .load_with_limits(&bounded)
        .unwrap();
    assert_eq!(buf.len(), 512);
}
