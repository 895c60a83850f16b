// ---------------------------------------------------------------------------
// tests_truncation – malformed snapshot records surface as errors
// ---------------------------------------------------------------------------

use statistics::test_harness::random_snapshot;

use super::{deserialize_snapshot, serialize_snapshot, CURRENT_FORMAT_VERSION};
use crate::save_error::SaveError;

#[test]
fn test_every_truncation_is_an_error() {
    let bytes = serialize_snapshot(&random_snapshot(42));
    for len in 0..bytes.len() {
        let result = deserialize_snapshot(&bytes[..len], CURRENT_FORMAT_VERSION);
        assert!(
            matches!(result, Err(SaveError::UnexpectedEof { .. })),
            "truncation to {len} bytes should be UnexpectedEof"
        );
    }
}

#[test]
fn test_trailing_bytes_rejected() {
    let mut bytes = serialize_snapshot(&random_snapshot(1));
    bytes.push(0);
    assert!(matches!(
        deserialize_snapshot(&bytes, CURRENT_FORMAT_VERSION),
        Err(SaveError::TrailingBytes(1))
    ));
}

#[test]
fn test_corrupt_nullable_tag_rejected() {
    let mut s = random_snapshot(3);
    s.water_tank_reserved = None;
    let mut bytes = serialize_snapshot(&s);
    // Timestamp (12) + 4 x i32 precede the first nullable field.
    let tag_offset = 12 + 4 * 4;
    assert_eq!(bytes[tag_offset], 0);
    bytes[tag_offset] = 9;
    assert!(matches!(
        deserialize_snapshot(&bytes, CURRENT_FORMAT_VERSION),
        Err(SaveError::InvalidNullableTag { tag: 9, offset }) if offset == tag_offset
    ));
}

#[test]
fn test_future_format_version_rejected() {
    let bytes = serialize_snapshot(&random_snapshot(5));
    assert!(matches!(
        deserialize_snapshot(&bytes, CURRENT_FORMAT_VERSION + 1),
        Err(SaveError::VersionMismatch { .. })
    ));
}
