// ---------------------------------------------------------------------------
// file_header – Snapshot history header with magic bytes, versions, checksum
// ---------------------------------------------------------------------------
//
// Header format (28 bytes, fixed-size, little-endian):
//   [0..4]   Magic bytes: "MCST" (0x4D435354)
//   [4..8]   Header format version (u32)
//   [8..12]  Flags (u32: bit 0 = lz4 compressed)
//   [12..16] Snapshot format version (u32)
//   [16..20] Snapshot record count (u32)
//   [20..24] Uncompressed payload size (u32)
//   [24..28] xxHash32 checksum of header bytes [4..24] followed by the payload
//
// On save: encode records -> compress -> prepend header (checksum of stored bytes)
// On load: check magic -> reject newer versions -> validate checksum -> strip header

use xxhash_rust::xxh32::Xxh32;

use crate::save_error::SaveError;

/// Magic bytes identifying a statistics history blob.
pub const MAGIC: [u8; 4] = [0x4D, 0x43, 0x53, 0x54]; // "MCST"

/// Size of the header in bytes.
pub const HEADER_SIZE: usize = 28;

/// Version of the header layout itself. The snapshot record layout is
/// versioned separately by `snapshot_format_version`.
pub const HEADER_FORMAT_VERSION: u32 = 1;

/// Payload is an lz4 block.
pub const FLAG_COMPRESSED: u32 = 1;

/// Seed for xxHash32 checksum.
const XXHASH_SEED: u32 = 0;

/// Parsed header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    pub header_version: u32,
    pub flags: u32,
    pub snapshot_format_version: u32,
    pub record_count: u32,
    pub uncompressed_size: u32,
    pub checksum: u32,
}

impl FileHeader {
    pub fn is_compressed(&self) -> bool {
        self.flags & FLAG_COMPRESSED != 0
    }

    fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[0..4].copy_from_slice(&MAGIC);
        out[4..8].copy_from_slice(&self.header_version.to_le_bytes());
        out[8..12].copy_from_slice(&self.flags.to_le_bytes());
        out[12..16].copy_from_slice(&self.snapshot_format_version.to_le_bytes());
        out[16..20].copy_from_slice(&self.record_count.to_le_bytes());
        out[20..24].copy_from_slice(&self.uncompressed_size.to_le_bytes());
        out[24..28].copy_from_slice(&self.checksum.to_le_bytes());
        out
    }
}

/// Covers the header fields as well as the payload, so a corrupted record
/// count or size is caught before anything is allocated from it.
fn checksum(fields: &[u8], payload: &[u8]) -> u32 {
    let mut hasher = Xxh32::new(XXHASH_SEED);
    hasher.update(fields);
    hasher.update(payload);
    hasher.digest()
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

/// Prepends a header to an already-encoded `payload`.
///
/// `uncompressed_size` is the payload length before compression (equal to
/// `payload.len()` when `flags` has no [`FLAG_COMPRESSED`]).
pub fn wrap_with_header(
    payload: &[u8],
    flags: u32,
    snapshot_format_version: u32,
    record_count: u32,
    uncompressed_size: u32,
) -> Vec<u8> {
    let header = FileHeader {
        header_version: HEADER_FORMAT_VERSION,
        flags,
        snapshot_format_version,
        record_count,
        uncompressed_size,
        checksum: 0,
    };
    let mut bytes = header.to_bytes();
    let sum = checksum(&bytes[4..24], payload);
    bytes[24..28].copy_from_slice(&sum.to_le_bytes());

    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
    out.extend_from_slice(&bytes);
    out.extend_from_slice(payload);
    out
}

/// Parse and validate the header, returning it with the payload that follows.
///
/// # Errors
///
/// - [`SaveError::Header`] if the magic bytes are missing, the input is
///   shorter than a header, or the checksum over the header fields and
///   payload does not match
/// - [`SaveError::VersionMismatch`] if the header layout is from a newer build
pub fn unwrap_header(bytes: &[u8]) -> Result<(FileHeader, &[u8]), SaveError> {
    if bytes.len() < 4 || bytes[..4] != MAGIC {
        return Err(SaveError::Header(
            "missing MCST magic bytes, not a statistics history".to_string(),
        ));
    }
    if bytes.len() < HEADER_SIZE {
        return Err(SaveError::Header(format!(
            "too short ({} bytes, need at least {} for header)",
            bytes.len(),
            HEADER_SIZE
        )));
    }

    let header = FileHeader {
        header_version: read_u32(bytes, 4),
        flags: read_u32(bytes, 8),
        snapshot_format_version: read_u32(bytes, 12),
        record_count: read_u32(bytes, 16),
        uncompressed_size: read_u32(bytes, 20),
        checksum: read_u32(bytes, 24),
    };

    if header.header_version > HEADER_FORMAT_VERSION {
        return Err(SaveError::VersionMismatch {
            expected_max: HEADER_FORMAT_VERSION,
            found: header.header_version,
        });
    }

    let payload = &bytes[HEADER_SIZE..];
    let computed = checksum(&bytes[4..24], payload);
    if computed != header.checksum {
        return Err(SaveError::Header(format!(
            "checksum mismatch (expected {:#010X}, got {:#010X}), data is corrupted",
            header.checksum, computed,
        )));
    }

    Ok((header, payload))
}
