//! Outbound message construction and inbound body decoding.

use std::io::Cursor;

use prost::Message;

use crate::emsg::{EMsg, PROTO_MASK, Schema};
use crate::error::WireError;
use crate::fixed::FixedBody;
use crate::header::{ExtendedHeader, JobId, ProtoHeader};
use crate::packet::PacketMsg;
use crate::proto::{CMsgProtoBufHeader, ProtoBody};

/// Offset of the structured header length field.
const PROTO_HEADER_LEN_OFFSET: usize = 4;
/// Offset of the structured header itself.
const PROTO_HEADER_OFFSET: usize = 8;

/// Outbound message ready to be framed by the transport.
///
/// The body is encoded when the message is built; session fields are left
/// zeroed for the transport to stamp before calling [`ClientMsg::encode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientMsg {
    emsg: EMsg,
    schema: Schema,
    target_job: JobId,
    source_job: JobId,
    steam_id: u64,
    session_id: i32,
    body: Vec<u8>,
    payload: Vec<u8>,
}

impl ClientMsg {
    /// Builds a structured message from a protobuf body.
    #[must_use]
    pub fn protobuf<M: ProtoBody>(body: &M) -> Self {
        Self::with_body(M::EMSG, Schema::Structured, body.encode_to_vec())
    }

    /// Builds a fixed-header message from a fixed body.
    #[must_use]
    pub fn fixed<B: FixedBody>(body: &B) -> Self {
        let mut encoded = Vec::with_capacity(B::SIZE);
        body.serialize_into(&mut encoded);
        Self::with_body(B::EMSG, Schema::FixedHeader, encoded)
    }

    fn with_body(emsg: EMsg, schema: Schema, body: Vec<u8>) -> Self {
        Self {
            emsg,
            schema,
            target_job: JobId::NONE,
            source_job: JobId::NONE,
            steam_id: 0,
            session_id: 0,
            body,
            payload: Vec::new(),
        }
    }

    /// Appends free-form bytes after a fixed body.
    ///
    /// Structured messages ignore the payload when encoding.
    #[must_use]
    pub fn with_payload(mut self, payload: impl Into<Vec<u8>>) -> Self {
        self.payload = payload.into();
        self
    }

    /// Sets the job this message answers.
    #[must_use]
    pub fn with_target_job(mut self, job: JobId) -> Self {
        self.target_job = job;
        self
    }

    /// Sets the job this message originates from.
    #[must_use]
    pub fn with_source_job(mut self, job: JobId) -> Self {
        self.source_job = job;
        self
    }

    /// Stamps the session the message is sent on.
    pub fn set_session(&mut self, steam_id: u64, session_id: i32) {
        self.steam_id = steam_id;
        self.session_id = session_id;
    }

    /// Message type.
    #[must_use]
    pub const fn emsg(&self) -> EMsg {
        self.emsg
    }

    /// Framing convention the message is encoded with.
    #[must_use]
    pub const fn schema(&self) -> Schema {
        self.schema
    }

    /// Encoded body without header.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        self.body.as_slice()
    }

    /// Encodes the complete frame, tag included.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        match self.schema {
            Schema::Structured => self.encode_structured(),
            Schema::FixedHeader => self.encode_fixed(),
        }
    }

    fn encode_structured(&self) -> Vec<u8> {
        let header = CMsgProtoBufHeader::from(ProtoHeader {
            target_job: self.target_job,
            source_job: self.source_job,
            steam_id: self.steam_id,
            session_id: self.session_id,
        })
        .encode_to_vec();

        let mut frame = Vec::with_capacity(PROTO_HEADER_OFFSET + header.len() + self.body.len());
        frame.extend_from_slice(&(self.emsg.code() | PROTO_MASK).to_le_bytes());
        // The header holds at most four scalar fields.
        let header_len = u32::try_from(header.len()).unwrap_or(u32::MAX);
        frame.extend_from_slice(&header_len.to_le_bytes());
        frame.extend_from_slice(&header);
        frame.extend_from_slice(&self.body);
        frame
    }

    fn encode_fixed(&self) -> Vec<u8> {
        let header = ExtendedHeader {
            target_job: self.target_job,
            source_job: self.source_job,
            steam_id: self.steam_id,
            session_id: self.session_id,
        };
        let mut frame = Vec::new();
        frame.extend_from_slice(&self.emsg.code().to_le_bytes());
        header.serialize_into(&mut frame);
        frame.extend_from_slice(&self.body);
        frame.extend_from_slice(&self.payload);
        frame
    }
}

/// Decoded structured frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtoFrame<M> {
    /// Frame header.
    pub header: ProtoHeader,
    /// Decoded body.
    pub body: M,
}

/// Decoded fixed-header frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedFrame<B> {
    /// Frame header.
    pub header: ExtendedHeader,
    /// Decoded fixed body.
    pub body: B,
    /// Bytes following the fixed body.
    pub payload: Vec<u8>,
}

/// Decodes a structured frame carrying `M`.
///
/// # Errors
///
/// Returns an error when the frame carries another message type, uses
/// fixed-header framing, is truncated, or holds malformed protobuf.
pub fn decode_protobuf<M: ProtoBody>(packet: &PacketMsg) -> Result<ProtoFrame<M>, WireError> {
    expect_msg(packet, M::EMSG, Schema::Structured)?;

    let data = packet.data();
    let header_len = data
        .get(PROTO_HEADER_LEN_OFFSET..)
        .and_then(|rest| rest.first_chunk::<4>())
        .map(|len| u32::from_le_bytes(*len) as usize)
        .ok_or(WireError::InsufficientData {
            needed: PROTO_HEADER_OFFSET,
            have: data.len(),
        })?;

    let header_end = PROTO_HEADER_OFFSET.saturating_add(header_len);
    let header_bytes =
        data.get(PROTO_HEADER_OFFSET..header_end)
            .ok_or(WireError::InsufficientData {
                needed: header_end,
                have: data.len(),
            })?;
    let body_bytes = data.get(header_end..).unwrap_or_default();

    let header = CMsgProtoBufHeader::decode(header_bytes)?;
    let body = M::decode(body_bytes)?;

    Ok(ProtoFrame {
        header: ProtoHeader::from(&header),
        body,
    })
}

/// Decodes a fixed-header frame carrying `B` and any trailing payload.
///
/// # Errors
///
/// Returns an error when the frame carries another message type, uses
/// structured framing, or is too short for the header and body.
pub fn decode_fixed<B: FixedBody>(packet: &PacketMsg) -> Result<FixedFrame<B>, WireError> {
    expect_msg(packet, B::EMSG, Schema::FixedHeader)?;

    let mut reader = Cursor::new(packet.data());
    reader.set_position(4);
    let header = ExtendedHeader::deserialize(&mut reader)?;
    let body = B::deserialize(&mut reader)?;

    let consumed = usize::try_from(reader.position()).unwrap_or(usize::MAX);
    let payload = packet.data().get(consumed..).unwrap_or_default().to_vec();

    Ok(FixedFrame {
        header,
        body,
        payload,
    })
}

fn expect_msg(packet: &PacketMsg, expected: EMsg, schema: Schema) -> Result<(), WireError> {
    if packet.code() != expected.code() {
        return Err(WireError::UnexpectedMsg {
            expected,
            actual: packet.code(),
        });
    }
    if packet.is_proto() != (schema == Schema::Structured) {
        return Err(WireError::SchemaMismatch {
            emsg: expected,
            expected: schema,
        });
    }
    Ok(())
}
