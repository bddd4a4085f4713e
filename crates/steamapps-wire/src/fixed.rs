//! Fixed little-endian bodies for fixed-header frames.

use std::io::{Cursor, Read};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::emsg::EMsg;
use crate::eresult::EResult;
use crate::error::WireError;
use crate::header::remaining;

/// Length of a depot decryption key.
pub const DEPOT_KEY_LEN: usize = 32;

/// Fixed-layout body of one specific message type.
pub trait FixedBody: Sized {
    /// Message type this body is sent under.
    const EMSG: EMsg;
    /// Encoded size of the body in bytes.
    const SIZE: usize;

    /// Appends the body to `buf`.
    fn serialize_into(&self, buf: &mut Vec<u8>);

    /// Reads the body from `reader`.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientData` when fewer than [`FixedBody::SIZE`] bytes
    /// remain.
    fn deserialize(reader: &mut Cursor<&[u8]>) -> Result<Self, WireError>;
}

/// Request for a depot decryption key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MsgClientGetDepotDecryptionKey {
    /// Depot the key is requested for.
    pub depot_id: u32,
}

impl FixedBody for MsgClientGetDepotDecryptionKey {
    const EMSG: EMsg = EMsg::ClientGetDepotDecryptionKey;
    const SIZE: usize = 4;

    fn serialize_into(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.depot_id.to_le_bytes());
    }

    fn deserialize(reader: &mut Cursor<&[u8]>) -> Result<Self, WireError> {
        let have = remaining(reader);
        let depot_id = reader
            .read_u32::<LittleEndian>()
            .map_err(|_| short(Self::SIZE, have))?;
        Ok(Self { depot_id })
    }
}

/// Reply carrying a depot decryption key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MsgClientGetDepotDecryptionKeyResponse {
    /// Result of the key request.
    pub result: EResult,
    /// Depot the key belongs to.
    pub depot_id: u32,
    /// AES key; all zeroes unless `result` is [`EResult::Ok`].
    pub depot_encryption_key: [u8; DEPOT_KEY_LEN],
}

impl FixedBody for MsgClientGetDepotDecryptionKeyResponse {
    const EMSG: EMsg = EMsg::ClientGetDepotDecryptionKeyResponse;
    const SIZE: usize = 8 + DEPOT_KEY_LEN;

    fn serialize_into(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.result.code().to_le_bytes());
        buf.extend_from_slice(&self.depot_id.to_le_bytes());
        buf.extend_from_slice(&self.depot_encryption_key);
    }

    fn deserialize(reader: &mut Cursor<&[u8]>) -> Result<Self, WireError> {
        let have = remaining(reader);
        let mut read = || -> std::io::Result<Self> {
            let result = EResult::from(reader.read_i32::<LittleEndian>()?);
            let depot_id = reader.read_u32::<LittleEndian>()?;
            let mut depot_encryption_key = [0_u8; DEPOT_KEY_LEN];
            reader.read_exact(&mut depot_encryption_key)?;
            Ok(Self {
                result,
                depot_id,
                depot_encryption_key,
            })
        };
        read().map_err(|_| short(Self::SIZE, have))
    }
}

/// Anti-cheat ban status; the banned app list follows as trailing payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MsgClientVACBanStatus {
    /// Number of bans described by the trailing payload.
    pub num_bans: u32,
}

impl FixedBody for MsgClientVACBanStatus {
    const EMSG: EMsg = EMsg::ClientVACBanStatus;
    const SIZE: usize = 4;

    fn serialize_into(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.num_bans.to_le_bytes());
    }

    fn deserialize(reader: &mut Cursor<&[u8]>) -> Result<Self, WireError> {
        let have = remaining(reader);
        let num_bans = reader
            .read_u32::<LittleEndian>()
            .map_err(|_| short(Self::SIZE, have))?;
        Ok(Self { num_bans })
    }
}

const fn short(needed: usize, have: usize) -> WireError {
    WireError::InsufficientData { needed, have }
}
