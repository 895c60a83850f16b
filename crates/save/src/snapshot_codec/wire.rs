// ---------------------------------------------------------------------------
// wire – Little-endian primitive writer/reader for snapshot records
// ---------------------------------------------------------------------------

use chrono::{DateTime, NaiveDateTime};

use crate::save_error::SaveError;

const TAG_NONE: u8 = 0;
const TAG_SOME: u8 = 1;

/// Append-only byte sink.
#[derive(Debug, Default)]
pub struct SnapshotWriter {
    buf: Vec<u8>,
}

impl SnapshotWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    pub fn write_i32(&mut self, v: i32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_i64(&mut self, v: i64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_opt_i32(&mut self, v: Option<i32>) {
        match v {
            Some(v) => {
                self.write_u8(TAG_SOME);
                self.write_i32(v);
            }
            None => self.write_u8(TAG_NONE),
        }
    }

    pub fn write_opt_u32(&mut self, v: Option<u32>) {
        match v {
            Some(v) => {
                self.write_u8(TAG_SOME);
                self.write_u32(v);
            }
            None => self.write_u8(TAG_NONE),
        }
    }

    pub fn write_opt_i64(&mut self, v: Option<i64>) {
        match v {
            Some(v) => {
                self.write_u8(TAG_SOME);
                self.write_i64(v);
            }
            None => self.write_u8(TAG_NONE),
        }
    }

    /// Seconds since the Unix epoch (i64) then sub-second nanoseconds (u32).
    pub fn write_timestamp(&mut self, t: NaiveDateTime) {
        let utc = t.and_utc();
        self.write_i64(utc.timestamp());
        self.write_u32(utc.timestamp_subsec_nanos());
    }
}

/// Cursor over a borrowed byte slice.
#[derive(Debug)]
pub struct SnapshotReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> SnapshotReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], SaveError> {
        let remaining = self.remaining();
        if remaining < N {
            return Err(SaveError::UnexpectedEof {
                needed: N,
                remaining,
            });
        }
        let mut out = [0u8; N];
        out.copy_from_slice(&self.bytes[self.pos..self.pos + N]);
        self.pos += N;
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, SaveError> {
        Ok(self.take::<1>()?[0])
    }

    pub fn read_i32(&mut self) -> Result<i32, SaveError> {
        Ok(i32::from_le_bytes(self.take()?))
    }

    pub fn read_u32(&mut self) -> Result<u32, SaveError> {
        Ok(u32::from_le_bytes(self.take()?))
    }

    pub fn read_i64(&mut self) -> Result<i64, SaveError> {
        Ok(i64::from_le_bytes(self.take()?))
    }

    /// Reads a presence tag; anything other than 0 or 1 is corrupt data.
    fn read_tag(&mut self) -> Result<bool, SaveError> {
        let offset = self.pos;
        match self.read_u8()? {
            TAG_NONE => Ok(false),
            TAG_SOME => Ok(true),
            tag => Err(SaveError::InvalidNullableTag { tag, offset }),
        }
    }

    pub fn read_opt_i32(&mut self) -> Result<Option<i32>, SaveError> {
        if self.read_tag()? {
            Ok(Some(self.read_i32()?))
        } else {
            Ok(None)
        }
    }

    pub fn read_opt_u32(&mut self) -> Result<Option<u32>, SaveError> {
        if self.read_tag()? {
            Ok(Some(self.read_u32()?))
        } else {
            Ok(None)
        }
    }

    pub fn read_opt_i64(&mut self) -> Result<Option<i64>, SaveError> {
        if self.read_tag()? {
            Ok(Some(self.read_i64()?))
        } else {
            Ok(None)
        }
    }

    pub fn read_timestamp(&mut self) -> Result<NaiveDateTime, SaveError> {
        let seconds = self.read_i64()?;
        let nanos = self.read_u32()?;
        DateTime::from_timestamp(seconds, nanos)
            .map(|t| t.naive_utc())
            .ok_or(SaveError::InvalidTimestamp { seconds, nanos })
    }
}
