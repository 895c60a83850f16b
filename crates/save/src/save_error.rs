// ---------------------------------------------------------------------------
// SaveError: error types for snapshot history save/load
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors that can occur while encoding or decoding the snapshot history.
///
/// Stream errors are never recovered from inside the codec; they propagate to
/// the save plugin, which logs them and keeps an empty history.
#[derive(Debug)]
pub enum SaveError {
    /// The stream ended before a field could be read.
    UnexpectedEof { needed: usize, remaining: usize },
    /// A nullable field's presence tag was neither 0 nor 1.
    InvalidNullableTag { tag: u8, offset: usize },
    /// The timestamp is outside the representable date range.
    InvalidTimestamp { seconds: i64, nanos: u32 },
    /// The blob was written by a newer build.
    VersionMismatch { expected_max: u32, found: u32 },
    /// Missing magic, short header or checksum mismatch.
    Header(String),
    /// The lz4 payload could not be decompressed.
    Decompress(String),
    /// Bytes left over after the last record.
    TrailingBytes(usize),
    /// A length does not fit the header's u32 fields.
    TooLarge { what: &'static str, len: usize },
    /// A required resource was missing from the ECS world.
    MissingResource(String),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::UnexpectedEof { needed, remaining } => write!(
                f,
                "Unexpected end of data: needed {needed} byte(s), {remaining} remaining"
            ),
            SaveError::InvalidNullableTag { tag, offset } => {
                write!(f, "Invalid nullable tag {tag:#04X} at offset {offset}")
            }
            SaveError::InvalidTimestamp { seconds, nanos } => {
                write!(f, "Invalid timestamp: {seconds}s + {nanos}ns")
            }
            SaveError::VersionMismatch {
                expected_max,
                found,
            } => write!(
                f,
                "Version mismatch: data is v{found}, but this build only supports up to v{expected_max}"
            ),
            SaveError::Header(msg) => write!(f, "Invalid header: {msg}"),
            SaveError::Decompress(msg) => write!(f, "Decompression error: {msg}"),
            SaveError::TrailingBytes(n) => write!(f, "{n} unexpected trailing byte(s)"),
            SaveError::TooLarge { what, len } => {
                write!(f, "History too large to encode: {what} is {len}")
            }
            SaveError::MissingResource(name) => {
                write!(f, "Missing required resource: {name}")
            }
        }
    }
}

impl std::error::Error for SaveError {}

impl From<lz4_flex::block::DecompressError> for SaveError {
    fn from(e: lz4_flex::block::DecompressError) -> Self {
        SaveError::Decompress(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_error_display_eof() {
        let err = SaveError::UnexpectedEof {
            needed: 4,
            remaining: 1,
        };
        let msg = format!("{err}");
        assert!(msg.contains("needed 4"), "got: {msg}");
        assert!(msg.contains("1 remaining"), "got: {msg}");
    }

    #[test]
    fn test_save_error_display_nullable_tag() {
        let err = SaveError::InvalidNullableTag {
            tag: 0x07,
            offset: 12,
        };
        let msg = format!("{err}");
        assert!(msg.contains("0x07"), "got: {msg}");
        assert!(msg.contains("offset 12"), "got: {msg}");
    }

    #[test]
    fn test_save_error_display_version_mismatch() {
        let err = SaveError::VersionMismatch {
            expected_max: 1,
            found: 99,
        };
        let msg = format!("{err}");
        assert!(msg.contains("v99"), "got: {msg}");
        assert!(msg.contains("v1"), "got: {msg}");
    }

    #[test]
    fn test_save_error_display_too_large() {
        let err = SaveError::TooLarge {
            what: "record count",
            len: 5_000_000_000,
        };
        let msg = format!("{err}");
        assert!(msg.contains("record count is 5000000000"), "got: {msg}");
    }

    #[test]
    fn test_save_error_debug() {
        let err = SaveError::Decompress("bad block".to_string());
        let debug = format!("{err:?}");
        assert!(debug.contains("Decompress"), "got: {debug}");
    }
}
