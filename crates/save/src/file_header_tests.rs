use crate::file_header::{
    unwrap_header, wrap_with_header, FileHeader, FLAG_COMPRESSED, HEADER_FORMAT_VERSION,
    HEADER_SIZE, MAGIC,
};
use crate::save_error::SaveError;

fn wrap(data: &[u8]) -> Vec<u8> {
    wrap_with_header(data, 0, 1, 3, data.len() as u32)
}

#[test]
fn test_wrap_and_unwrap_roundtrip() {
    let data = b"snapshot records";
    let wrapped = wrap(data);

    assert_eq!(&wrapped[..4], &MAGIC);
    assert_eq!(wrapped.len(), HEADER_SIZE + data.len());

    let (header, payload) = unwrap_header(&wrapped).expect("unwrap should succeed");
    assert_eq!(header.header_version, HEADER_FORMAT_VERSION);
    assert_eq!(header.snapshot_format_version, 1);
    assert_eq!(header.record_count, 3);
    assert_eq!(header.uncompressed_size, data.len() as u32);
    assert!(!header.is_compressed());
    assert_eq!(payload, data);
}

#[test]
fn test_compressed_flag_roundtrip() {
    let wrapped = wrap_with_header(b"xx", FLAG_COMPRESSED, 1, 0, 100);
    let (header, _) = unwrap_header(&wrapped).expect("unwrap should succeed");
    assert!(header.is_compressed());
    assert_eq!(
        header,
        FileHeader {
            header_version: HEADER_FORMAT_VERSION,
            flags: FLAG_COMPRESSED,
            snapshot_format_version: 1,
            record_count: 0,
            uncompressed_size: 100,
            checksum: header.checksum,
        }
    );
}

#[test]
fn test_missing_magic_rejected() {
    let err = unwrap_header(b"\x00\x01\x02\x03raw bytes").unwrap_err();
    assert!(matches!(err, SaveError::Header(ref msg) if msg.contains("magic")), "got: {err}");
}

#[test]
fn test_empty_input_rejected() {
    assert!(matches!(unwrap_header(b""), Err(SaveError::Header(_))));
}

#[test]
fn test_corrupted_checksum_detected() {
    let mut wrapped = wrap(b"test payload");
    let last = wrapped.len() - 1;
    wrapped[last] ^= 0xFF;

    let err = unwrap_header(&wrapped).unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("checksum mismatch"), "got: {msg}");
}

#[test]
fn test_corrupted_header_fields_detected() {
    for range in [8..12, 12..16, 16..20, 20..24] {
        let mut wrapped = wrap(b"test payload");
        wrapped[range.clone()].copy_from_slice(&u32::MAX.to_le_bytes());

        let err = unwrap_header(&wrapped).unwrap_err();
        assert!(
            matches!(err, SaveError::Header(ref msg) if msg.contains("checksum")),
            "bytes {range:?}: got {err}"
        );
    }
}

#[test]
fn test_future_header_version_rejected() {
    let mut wrapped = wrap(b"test payload");
    wrapped[4..8].copy_from_slice(&999u32.to_le_bytes());

    let err = unwrap_header(&wrapped).unwrap_err();
    assert!(
        matches!(
            err,
            SaveError::VersionMismatch {
                expected_max: HEADER_FORMAT_VERSION,
                found: 999
            }
        ),
        "got: {err}"
    );
}

#[test]
fn test_truncated_header_detected() {
    let err = unwrap_header(b"MCST\x01\x00").unwrap_err();
    assert!(format!("{err}").contains("too short"), "got: {err}");
}

#[test]
fn test_empty_payload_roundtrip() {
    let wrapped = wrap(b"");
    assert_eq!(wrapped.len(), HEADER_SIZE);
    let (header, payload) = unwrap_header(&wrapped).expect("unwrap should succeed");
    assert_eq!(header.uncompressed_size, 0);
    assert!(payload.is_empty());
}
