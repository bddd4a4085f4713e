//! Codec failures.

use crate::emsg::{EMsg, Schema};

/// Wire format error types.
#[derive(Debug, Clone, thiserror::Error)]
pub enum WireError {
    /// Not enough data to parse the frame.
    #[error("insufficient data: need {needed} bytes, have {have}")]
    InsufficientData {
        /// Minimum bytes required to parse.
        needed: usize,
        /// Actual bytes available.
        have: usize,
    },

    /// The frame carries a different message than the decoder expects.
    #[error("unexpected message: expected {expected:?}, got tag {actual}")]
    UnexpectedMsg {
        /// Message type the decoder was asked for.
        expected: EMsg,
        /// Tag found in the frame, without the protobuf bit.
        actual: u32,
    },

    /// The frame uses the other framing convention.
    #[error("schema mismatch for {emsg:?}: expected {expected:?} framing")]
    SchemaMismatch {
        /// Message type of the frame.
        emsg: EMsg,
        /// Framing the message type requires.
        expected: Schema,
    },

    /// Extended header fields hold values the protocol never sends.
    #[error("invalid extended header: size {size}, canary {canary}")]
    InvalidHeader {
        /// Declared header size.
        size: u8,
        /// Header canary byte.
        canary: u8,
    },

    /// Protobuf header or body could not be decoded.
    #[error("protobuf decode failed: {0}")]
    Protobuf(#[from] prost::DecodeError),
}
