//! Inbound frames.

use crate::emsg::{EMsg, PROTO_MASK};
use crate::error::WireError;

/// Inbound frame routed by its message tag.
///
/// `data` holds the complete frame, tag included; nothing past the tag is
/// inspected until a decoder for the tag is chosen. Tags outside [`EMsg`]
/// belong to other service categories and are carried through untouched so
/// the shared read path can hand them on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacketMsg {
    code: u32,
    is_proto: bool,
    data: Vec<u8>,
}

impl PacketMsg {
    /// Reads the tag of a raw frame and wraps it.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientData` for frames shorter than the tag.
    pub fn parse(data: Vec<u8>) -> Result<Self, WireError> {
        let Some(tag) = data.first_chunk::<4>() else {
            return Err(WireError::InsufficientData {
                needed: 4,
                have: data.len(),
            });
        };
        let raw = u32::from_le_bytes(*tag);
        Ok(Self {
            code: raw & !PROTO_MASK,
            is_proto: raw & PROTO_MASK != 0,
            data,
        })
    }

    /// Numeric tag without the protobuf bit.
    #[must_use]
    pub const fn code(&self) -> u32 {
        self.code
    }

    /// Message type of the frame, or `None` for a tag this crate does not
    /// model.
    #[must_use]
    pub fn emsg(&self) -> Option<EMsg> {
        EMsg::from_repr(self.code)
    }

    /// Whether the tag carried the protobuf bit.
    #[must_use]
    pub const fn is_proto(&self) -> bool {
        self.is_proto
    }

    /// The complete frame.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.data.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_structured_tag() {
        let mut frame = (EMsg::ClientLicenseList.code() | PROTO_MASK)
            .to_le_bytes()
            .to_vec();
        frame.extend_from_slice(&[0, 0, 0, 0]);
        let packet = PacketMsg::parse(frame).expect("parse");
        assert_eq!(packet.emsg(), Some(EMsg::ClientLicenseList));
        assert_eq!(packet.code(), 780);
        assert!(packet.is_proto());
        assert_eq!(packet.data().len(), 8);
    }

    #[test]
    fn parses_fixed_header_tag() {
        let frame = EMsg::ClientVACBanStatus.code().to_le_bytes().to_vec();
        let packet = PacketMsg::parse(frame).expect("parse");
        assert_eq!(packet.emsg(), Some(EMsg::ClientVACBanStatus));
        assert!(!packet.is_proto());
    }

    #[test]
    fn rejects_short_frame() {
        let error = PacketMsg::parse(vec![1, 2]).expect_err("short");
        assert!(matches!(
            error,
            WireError::InsufficientData { needed: 4, have: 2 }
        ));
    }

    #[test]
    fn keeps_tags_owned_by_other_services() {
        let mut frame = (5501 | PROTO_MASK).to_le_bytes().to_vec();
        frame.extend_from_slice(&[0, 0, 0, 0, 0x08, 0x01]);
        let packet = PacketMsg::parse(frame).expect("foreign tag parses");
        assert_eq!(packet.code(), 5501);
        assert_eq!(packet.emsg(), None);
        assert!(packet.is_proto());
        assert_eq!(packet.data().len(), 10);
    }
}
