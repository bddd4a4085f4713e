//! Wire codec for the application-service message category.
//!
//! Every frame starts with a little-endian `u32` message tag. The high bit of
//! the tag ([`PROTO_MASK`]) selects between the two framing conventions used
//! by the protocol:
//!
//! - **Structured** frames: `[emsg|PROTO_MASK:4][header_len:4][header:N][body]`
//!   where the header and body are protobuf messages.
//! - **Fixed-header** frames: `[emsg:4][extended header:32][body][payload]`
//!   where the body is a fixed little-endian struct optionally followed by
//!   free-form trailing payload bytes.
//!
//! The framing is chosen per message type ([`EMsg::schema`]) and enforced on
//! decode: a structured message arriving in a fixed-header frame (or vice
//! versa) is rejected rather than misread.

mod emsg;
mod error;
mod eresult;
pub mod fixed;
mod header;
mod message;
mod packet;
pub mod proto;

pub use emsg::{EMsg, PROTO_MASK, Schema};
pub use error::WireError;
pub use eresult::EResult;
pub use fixed::FixedBody;
pub use header::{EXTENDED_HEADER_SIZE, ExtendedHeader, JobId, ProtoHeader};
pub use message::{ClientMsg, FixedFrame, ProtoFrame, decode_fixed, decode_protobuf};
pub use packet::PacketMsg;
pub use proto::ProtoBody;
