//! Frame headers for both framing conventions.

use std::io::{Cursor, Read};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::WireError;

/// Size of the extended header in bytes, excluding the leading tag.
///
/// `[header_size:1][header_version:2][target_job:8][source_job:8][canary:1]`
/// `[steam_id:8][session_id:4]`
pub const EXTENDED_HEADER_SIZE: usize = 32;

/// Value written into the `header_size` field: tag plus extended header.
const HEADER_SIZE_FIELD: u8 = 36;
const HEADER_VERSION: u16 = 2;
const HEADER_CANARY: u8 = 239;

/// Job identifier copied between request and response headers.
///
/// This layer never correlates jobs; identifiers are carried so the event
/// consumer can.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobId(pub u64);

impl JobId {
    /// Sentinel meaning "no job".
    pub const NONE: Self = Self(u64::MAX);

    /// Returns true unless this is [`JobId::NONE`].
    #[must_use]
    pub const fn is_set(self) -> bool {
        self.0 != u64::MAX
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::NONE
    }
}

/// Header of a fixed-header frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtendedHeader {
    /// Job the frame answers.
    pub target_job: JobId,
    /// Job the frame originates from.
    pub source_job: JobId,
    /// Account the session belongs to.
    pub steam_id: u64,
    /// Session identifier assigned at logon.
    pub session_id: i32,
}

impl ExtendedHeader {
    /// Appends the header (without the tag) to `buf`.
    pub fn serialize_into(&self, buf: &mut Vec<u8>) {
        buf.push(HEADER_SIZE_FIELD);
        buf.extend_from_slice(&HEADER_VERSION.to_le_bytes());
        buf.extend_from_slice(&self.target_job.0.to_le_bytes());
        buf.extend_from_slice(&self.source_job.0.to_le_bytes());
        buf.push(HEADER_CANARY);
        buf.extend_from_slice(&self.steam_id.to_le_bytes());
        buf.extend_from_slice(&self.session_id.to_le_bytes());
    }

    /// Reads the header from `reader`, positioned just after the tag.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientData` if fewer than [`EXTENDED_HEADER_SIZE`]
    /// bytes remain and `InvalidHeader` if the size or canary fields are
    /// wrong.
    pub fn deserialize(reader: &mut Cursor<&[u8]>) -> Result<Self, WireError> {
        let mut raw = [0_u8; EXTENDED_HEADER_SIZE];
        let have = remaining(reader);
        reader
            .read_exact(&mut raw)
            .map_err(|_| WireError::InsufficientData {
                needed: EXTENDED_HEADER_SIZE,
                have,
            })?;

        let mut fields = Cursor::new(&raw[..]);
        let size = read_or_short(fields.read_u8())?;
        let _version = read_or_short(fields.read_u16::<LittleEndian>())?;
        let target_job = JobId(read_or_short(fields.read_u64::<LittleEndian>())?);
        let source_job = JobId(read_or_short(fields.read_u64::<LittleEndian>())?);
        let canary = read_or_short(fields.read_u8())?;
        let steam_id = read_or_short(fields.read_u64::<LittleEndian>())?;
        let session_id = read_or_short(fields.read_i32::<LittleEndian>())?;

        if size != HEADER_SIZE_FIELD || canary != HEADER_CANARY {
            return Err(WireError::InvalidHeader { size, canary });
        }

        Ok(Self {
            target_job,
            source_job,
            steam_id,
            session_id,
        })
    }
}

/// Header of a structured frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProtoHeader {
    /// Job the frame answers.
    pub target_job: JobId,
    /// Job the frame originates from.
    pub source_job: JobId,
    /// Account the session belongs to.
    pub steam_id: u64,
    /// Session identifier assigned at logon.
    pub session_id: i32,
}

impl From<&crate::proto::CMsgProtoBufHeader> for ProtoHeader {
    fn from(header: &crate::proto::CMsgProtoBufHeader) -> Self {
        Self {
            target_job: header.jobid_target.map_or(JobId::NONE, JobId),
            source_job: header.jobid_source.map_or(JobId::NONE, JobId),
            steam_id: header.steamid.unwrap_or_default(),
            session_id: header.client_sessionid.unwrap_or_default(),
        }
    }
}

impl From<ProtoHeader> for crate::proto::CMsgProtoBufHeader {
    fn from(header: ProtoHeader) -> Self {
        Self {
            steamid: Some(header.steam_id),
            client_sessionid: Some(header.session_id),
            jobid_source: header.source_job.is_set().then_some(header.source_job.0),
            jobid_target: header.target_job.is_set().then_some(header.target_job.0),
        }
    }
}

/// Bytes left after the cursor position.
pub(crate) fn remaining(reader: &Cursor<&[u8]>) -> usize {
    let len = reader.get_ref().len();
    let position = usize::try_from(reader.position()).unwrap_or(len);
    len.saturating_sub(position)
}

// The scratch buffer is sized exactly, so a short read here is unreachable in
// practice; it is still reported rather than panicking.
fn read_or_short<T>(result: std::io::Result<T>) -> Result<T, WireError> {
    result.map_err(|_| WireError::InsufficientData {
        needed: EXTENDED_HEADER_SIZE,
        have: 0,
    })
}
