// ---------------------------------------------------------------------------
// history_blob – The whole snapshot history as one compressed, checksummed blob
// ---------------------------------------------------------------------------

use statistics::Snapshot;

use crate::file_header::{unwrap_header, wrap_with_header, FileHeader, FLAG_COMPRESSED};
use crate::save_error::SaveError;
use crate::snapshot_codec::{
    read_snapshot, write_snapshot, SnapshotReader, SnapshotWriter, CURRENT_FORMAT_VERSION,
};

/// Encoded size of one record with every nullable field absent.
pub const MIN_RECORD_SIZE: usize = 651;
/// Encoded size of one record with every nullable field present.
pub const MAX_RECORD_SIZE: usize = 755;

/// Encode `snapshots` in order: records -> lz4 block -> header.
///
/// Fails with [`SaveError::TooLarge`] if the record count or the encoded size
/// does not fit the header's u32 fields.
pub fn encode_history(snapshots: &[Snapshot]) -> Result<Vec<u8>, SaveError> {
    let record_count = u32::try_from(snapshots.len()).map_err(|_| SaveError::TooLarge {
        what: "record count",
        len: snapshots.len(),
    })?;
    let mut w = SnapshotWriter::with_capacity(snapshots.len() * MAX_RECORD_SIZE);
    for snapshot in snapshots {
        write_snapshot(&mut w, snapshot);
    }
    let raw = w.into_bytes();
    let uncompressed_size = u32::try_from(raw.len()).map_err(|_| SaveError::TooLarge {
        what: "uncompressed size",
        len: raw.len(),
    })?;
    let compressed = lz4_flex::block::compress(&raw);
    Ok(wrap_with_header(
        &compressed,
        FLAG_COMPRESSED,
        CURRENT_FORMAT_VERSION,
        record_count,
        uncompressed_size,
    ))
}

/// Decode a blob written by [`encode_history`].
///
/// The snapshot format version recorded in the header is passed through to
/// every [`read_snapshot`] call.
pub fn decode_history(bytes: &[u8]) -> Result<Vec<Snapshot>, SaveError> {
    let (header, payload) = unwrap_header(bytes)?;
    if header.snapshot_format_version > CURRENT_FORMAT_VERSION {
        return Err(SaveError::VersionMismatch {
            expected_max: CURRENT_FORMAT_VERSION,
            found: header.snapshot_format_version,
        });
    }

    check_sizes(&header)?;

    let raw = decompress_payload(&header, payload)?;
    let mut r = SnapshotReader::new(&raw);
    let capacity = (header.record_count as usize).min(raw.len() / MIN_RECORD_SIZE);
    let mut snapshots = Vec::with_capacity(capacity);
    for _ in 0..header.record_count {
        snapshots.push(read_snapshot(&mut r, header.snapshot_format_version)?);
    }
    if !r.is_empty() {
        return Err(SaveError::TrailingBytes(r.remaining()));
    }
    Ok(snapshots)
}

/// Every record is between [`MIN_RECORD_SIZE`] and [`MAX_RECORD_SIZE`]
/// bytes, so the header's count and size must agree before either is used to
/// size a buffer.
fn check_sizes(header: &FileHeader) -> Result<(), SaveError> {
    let count = u64::from(header.record_count);
    let size = u64::from(header.uncompressed_size);
    if size < count * MIN_RECORD_SIZE as u64 || size > count * MAX_RECORD_SIZE as u64 {
        return Err(SaveError::Header(format!(
            "{} record(s) cannot take {} bytes",
            header.record_count, header.uncompressed_size
        )));
    }
    Ok(())
}

fn decompress_payload(header: &FileHeader, payload: &[u8]) -> Result<Vec<u8>, SaveError> {
    if !header.is_compressed() {
        if payload.len() != header.uncompressed_size as usize {
            return Err(SaveError::Header(format!(
                "payload is {} bytes, header says {}",
                payload.len(),
                header.uncompressed_size
            )));
        }
        return Ok(payload.to_vec());
    }
    let raw = lz4_flex::block::decompress(payload, header.uncompressed_size as usize)?;
    if raw.len() != header.uncompressed_size as usize {
        return Err(SaveError::Decompress(format!(
            "expected {} bytes, got {}",
            header.uncompressed_size,
            raw.len()
        )));
    }
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_header::HEADER_SIZE;
    use statistics::test_harness::random_snapshot;

    #[test]
    fn test_history_roundtrip_preserves_order_and_values() {
        let snapshots: Vec<Snapshot> = (0..25).map(random_snapshot).collect();
        let blob = encode_history(&snapshots).expect("encode");
        let restored = decode_history(&blob).expect("decode should succeed");
        assert_eq!(restored.len(), snapshots.len());
        for (a, b) in snapshots.iter().zip(&restored) {
            assert_eq!(a.snapshot_date, b.snapshot_date);
            assert_eq!(a.population, b.population);
            assert_eq!(a.tram_residents, b.tram_residents);
            assert_eq!(a.bank_balance, b.bank_balance);
        }
    }

    #[test]
    fn test_empty_history_roundtrip() {
        let blob = encode_history(&[]).expect("encode");
        assert!(decode_history(&blob).expect("decode").is_empty());
    }

    #[test]
    fn test_repetitive_history_compresses() {
        let snapshots: Vec<Snapshot> = (0..100)
            .map(|_| Snapshot::default())
            .collect();
        let blob = encode_history(&snapshots).expect("encode");
        assert!(blob.len() < 100 * 651 / 4, "blob is {} bytes", blob.len());
    }

    #[test]
    fn test_corrupted_payload_rejected() {
        let snapshots = [random_snapshot(1), random_snapshot(2)];
        let mut blob = encode_history(&snapshots).expect("encode");
        let last = blob.len() - 1;
        blob[last] ^= 0x55;
        assert!(matches!(decode_history(&blob), Err(SaveError::Header(_))));
    }

    #[test]
    fn test_truncated_blob_rejected() {
        let blob = encode_history(&[random_snapshot(1)]).expect("encode");
        assert!(decode_history(&blob[..HEADER_SIZE - 1]).is_err());
        assert!(decode_history(&blob[..blob.len() - 1]).is_err());
    }

    #[test]
    fn test_future_snapshot_format_rejected() {
        let raw = crate::snapshot_codec::serialize_snapshot(&random_snapshot(1));
        let blob = wrap_with_header(&raw, 0, CURRENT_FORMAT_VERSION + 1, 1, raw.len() as u32);
        assert!(matches!(
            decode_history(&blob),
            Err(SaveError::VersionMismatch { .. })
        ));
    }

    #[test]
    fn test_uncompressed_payload_accepted() {
        let raw = crate::snapshot_codec::serialize_snapshot(&random_snapshot(9));
        let blob = wrap_with_header(&raw, 0, CURRENT_FORMAT_VERSION, 1, raw.len() as u32);
        assert_eq!(decode_history(&blob).expect("decode").len(), 1);
    }

    #[test]
    fn test_record_count_mismatch_rejected() {
        let raw = crate::snapshot_codec::serialize_snapshot(&random_snapshot(9));
        let too_many = wrap_with_header(&raw, 0, CURRENT_FORMAT_VERSION, 2, raw.len() as u32);
        assert!(matches!(decode_history(&too_many), Err(SaveError::Header(_))));
        let too_few = wrap_with_header(&raw, 0, CURRENT_FORMAT_VERSION, 0, raw.len() as u32);
        assert!(matches!(decode_history(&too_few), Err(SaveError::Header(_))));
    }

    #[test]
    fn test_corrupted_record_count_rejected_without_allocating() {
        let snapshots = [random_snapshot(1), random_snapshot(2)];
        let mut blob = encode_history(&snapshots).expect("encode");
        blob[16..20].copy_from_slice(&u32::MAX.to_le_bytes());
        assert!(matches!(decode_history(&blob), Err(SaveError::Header(_))));
    }

    #[test]
    fn test_forged_sizes_rejected_before_decompressing() {
        // Consistent with the checksum but not with the record sizes.
        let raw = crate::snapshot_codec::serialize_snapshot(&Snapshot::default());
        let compressed = lz4_flex::block::compress(&raw);
        let blob = wrap_with_header(
            &compressed,
            FLAG_COMPRESSED,
            CURRENT_FORMAT_VERSION,
            1,
            u32::MAX,
        );
        assert!(matches!(decode_history(&blob), Err(SaveError::Header(_))));
    }

    #[test]
    fn test_short_final_record_rejected() {
        // One record just over the minimum size, then less than a second one.
        let first = Snapshot {
            tram_residents: Some(1),
            ..Default::default()
        };
        let mut raw = crate::snapshot_codec::serialize_snapshot(&first);
        raw.extend_from_slice(&[0; 650]);
        let blob = wrap_with_header(&raw, 0, CURRENT_FORMAT_VERSION, 2, raw.len() as u32);
        assert!(matches!(
            decode_history(&blob),
            Err(SaveError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let mut raw = crate::snapshot_codec::serialize_snapshot(&Snapshot::default());
        raw.extend_from_slice(&[0; 10]);
        let blob = wrap_with_header(&raw, 0, CURRENT_FORMAT_VERSION, 1, raw.len() as u32);
        assert!(matches!(decode_history(&blob), Err(SaveError::TrailingBytes(10))));
    }
}
