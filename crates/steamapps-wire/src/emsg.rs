//! Message type tags.

use strum::{EnumIter, FromRepr};

/// Bit set on the raw tag of every structured (protobuf) frame.
pub const PROTO_MASK: u32 = 0x8000_0000;

/// Framing convention used by a message type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Schema {
    /// Protobuf header and protobuf body.
    Structured,
    /// Extended fixed-size header and fixed little-endian body.
    FixedHeader,
}

/// Message type tags known to the client.
///
/// The enumeration is closed: the numeric values are fixed by the protocol
/// and a frame whose tag is not listed here cannot be represented as a
/// [`PacketMsg`](crate::PacketMsg). Tags owned by other service categories
/// are included so the shared read path can route them elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, FromRepr)]
#[repr(u32)]
pub enum EMsg {
    /// Periodic keep-alive sent by the client.
    ClientHeartBeat = 703,
    /// Result of a logon attempt.
    ClientLogOnResponse = 751,
    /// Friends list delta pushed by the server.
    ClientFriendsList = 767,
    /// Game connect tokens pushed after logon.
    ClientGameConnectTokens = 779,
    /// Licenses owned by the account.
    ClientLicenseList = 780,
    /// Anti-cheat ban status for the account.
    ClientVACBanStatus = 782,
    /// Request for an app ownership ticket.
    ClientGetAppOwnershipTicket = 857,
    /// Reply carrying an app ownership ticket.
    ClientGetAppOwnershipTicketResponse = 858,
    /// Request for a depot decryption key.
    ClientGetDepotDecryptionKey = 5438,
    /// Reply carrying a depot decryption key.
    ClientGetDepotDecryptionKeyResponse = 5439,
    /// Logon request.
    ClientLogon = 5514,
    /// Request for app changes since a change number.
    ClientAppInfoUpdate = 5530,
    /// Reply listing changed apps.
    ClientAppInfoChanges = 5531,
    /// Request for app metadata.
    ClientAppInfoRequest = 5532,
    /// Reply carrying app metadata.
    ClientAppInfoResponse = 5533,
    /// Request for package metadata.
    ClientPackageInfoRequest = 5534,
    /// Reply carrying package metadata.
    ClientPackageInfoResponse = 5535,
}

impl EMsg {
    /// Returns the numeric tag without the protobuf bit.
    #[must_use]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Resolves a raw wire tag, ignoring the protobuf bit.
    #[must_use]
    pub fn from_raw(raw: u32) -> Option<Self> {
        Self::from_repr(raw & !PROTO_MASK)
    }

    /// Returns the framing convention this message type travels in.
    #[must_use]
    pub const fn schema(self) -> Schema {
        match self {
            Self::ClientVACBanStatus
            | Self::ClientGetDepotDecryptionKey
            | Self::ClientGetDepotDecryptionKeyResponse => Schema::FixedHeader,
            Self::ClientHeartBeat
            | Self::ClientLogOnResponse
            | Self::ClientFriendsList
            | Self::ClientGameConnectTokens
            | Self::ClientLicenseList
            | Self::ClientGetAppOwnershipTicket
            | Self::ClientGetAppOwnershipTicketResponse
            | Self::ClientLogon
            | Self::ClientAppInfoUpdate
            | Self::ClientAppInfoChanges
            | Self::ClientAppInfoRequest
            | Self::ClientAppInfoResponse
            | Self::ClientPackageInfoRequest
            | Self::ClientPackageInfoResponse => Schema::Structured,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn codes_are_unique() {
        let codes: HashSet<u32> = EMsg::iter().map(EMsg::code).collect();
        assert_eq!(codes.len(), EMsg::iter().count());
    }

    #[test]
    fn raw_tags_round_trip_with_and_without_proto_bit() {
        for emsg in EMsg::iter() {
            assert_eq!(EMsg::from_raw(emsg.code()), Some(emsg));
            assert_eq!(EMsg::from_raw(emsg.code() | PROTO_MASK), Some(emsg));
        }
    }

    #[test]
    fn unknown_raw_tag_resolves_to_none() {
        assert_eq!(EMsg::from_raw(4), None);
        assert_eq!(EMsg::from_raw(PROTO_MASK | 9_999_999), None);
    }

    #[rstest]
    #[case(EMsg::ClientGetDepotDecryptionKey, Schema::FixedHeader)]
    #[case(EMsg::ClientGetDepotDecryptionKeyResponse, Schema::FixedHeader)]
    #[case(EMsg::ClientVACBanStatus, Schema::FixedHeader)]
    #[case(EMsg::ClientAppInfoRequest, Schema::Structured)]
    #[case(EMsg::ClientPackageInfoResponse, Schema::Structured)]
    #[case(EMsg::ClientLicenseList, Schema::Structured)]
    fn schema_is_fixed_per_message(#[case] emsg: EMsg, #[case] expected: Schema) {
        assert_eq!(emsg.schema(), expected);
    }
}
