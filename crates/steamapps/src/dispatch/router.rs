//! Tag classification and the dispatch entry point.

use std::fmt;

use strum::{EnumIter, IntoStaticStr};
use tracing::warn;

use steamapps_wire::{EMsg, JobId, PacketMsg, WireError};

use super::errors::DispatchError;
use super::handlers;
use crate::callbacks::{AppsEvent, Callback};
use crate::sink::EventSink;

/// Tracing target for dispatch operations.
pub(crate) const DISPATCH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::dispatch");

/// Inbound message types handled by this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ResponseKind {
    /// `ClientLicenseList`.
    LicenseList,
    /// `ClientGameConnectTokens`.
    GameConnectTokens,
    /// `ClientVACBanStatus`.
    VacStatus,
    /// `ClientGetAppOwnershipTicketResponse`.
    AppOwnershipTicket,
    /// `ClientAppInfoResponse`.
    AppInfo,
    /// `ClientPackageInfoResponse`.
    PackageInfo,
    /// `ClientAppInfoChanges`.
    AppChanges,
    /// `ClientGetDepotDecryptionKeyResponse`.
    DepotKey,
}

impl ResponseKind {
    /// Classifies a tag; `None` means the message belongs to another service.
    #[must_use]
    pub const fn from_emsg(emsg: EMsg) -> Option<Self> {
        match emsg {
            EMsg::ClientLicenseList => Some(Self::LicenseList),
            EMsg::ClientGameConnectTokens => Some(Self::GameConnectTokens),
            EMsg::ClientVACBanStatus => Some(Self::VacStatus),
            EMsg::ClientGetAppOwnershipTicketResponse => Some(Self::AppOwnershipTicket),
            EMsg::ClientAppInfoResponse => Some(Self::AppInfo),
            EMsg::ClientPackageInfoResponse => Some(Self::PackageInfo),
            EMsg::ClientAppInfoChanges => Some(Self::AppChanges),
            EMsg::ClientGetDepotDecryptionKeyResponse => Some(Self::DepotKey),
            EMsg::ClientHeartBeat
            | EMsg::ClientLogOnResponse
            | EMsg::ClientFriendsList
            | EMsg::ClientGetAppOwnershipTicket
            | EMsg::ClientGetDepotDecryptionKey
            | EMsg::ClientLogon
            | EMsg::ClientAppInfoUpdate
            | EMsg::ClientAppInfoRequest
            | EMsg::ClientPackageInfoRequest => None,
        }
    }

    /// Tag this kind is received under.
    #[must_use]
    pub const fn emsg(self) -> EMsg {
        match self {
            Self::LicenseList => EMsg::ClientLicenseList,
            Self::GameConnectTokens => EMsg::ClientGameConnectTokens,
            Self::VacStatus => EMsg::ClientVACBanStatus,
            Self::AppOwnershipTicket => EMsg::ClientGetAppOwnershipTicketResponse,
            Self::AppInfo => EMsg::ClientAppInfoResponse,
            Self::PackageInfo => EMsg::ClientPackageInfoResponse,
            Self::AppChanges => EMsg::ClientAppInfoChanges,
            Self::DepotKey => EMsg::ClientGetDepotDecryptionKeyResponse,
        }
    }

    /// Whether a decode failure is logged and dropped instead of returned.
    #[must_use]
    pub fn recoverable(self) -> bool {
        self.handler().recoverable
    }

    /// Stable snake-case name used in log fields.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub(crate) fn handler(self) -> &'static HandlerSpec {
        match self {
            Self::LicenseList => &handlers::LICENSE_LIST,
            Self::GameConnectTokens => &handlers::GAME_CONNECT_TOKENS,
            Self::VacStatus => &handlers::VAC_STATUS,
            Self::AppOwnershipTicket => &handlers::APP_OWNERSHIP_TICKET,
            Self::AppInfo => &handlers::APP_INFO,
            Self::PackageInfo => &handlers::PACKAGE_INFO,
            Self::AppChanges => &handlers::APP_CHANGES,
            Self::DepotKey => &handlers::DEPOT_KEY,
        }
    }
}

/// Output of a successful decode, before the sink attaches an origin.
#[derive(Debug)]
pub(crate) struct Decoded {
    pub(crate) job_id: JobId,
    pub(crate) event: AppsEvent,
}

/// Decode function and failure policy of one handler.
pub(crate) struct HandlerSpec {
    pub(crate) kind: ResponseKind,
    pub(crate) recoverable: bool,
    pub(crate) decode: fn(&PacketMsg) -> Result<Decoded, WireError>,
}

impl fmt::Debug for HandlerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerSpec")
            .field("kind", &self.kind)
            .field("recoverable", &self.recoverable)
            .finish_non_exhaustive()
    }
}

/// Routes `packet` to its handler and posts the resulting callback.
///
/// Tags without a handler, including tags outside [`EMsg`], are ignored
/// without logging.
pub(crate) fn dispatch(packet: &PacketMsg, sink: &dyn EventSink) -> Result<(), DispatchError> {
    let Some(kind) = packet.emsg().and_then(ResponseKind::from_emsg) else {
        return Ok(());
    };
    let handler = kind.handler();

    match (handler.decode)(packet) {
        Ok(Decoded { job_id, event }) => {
            sink.post(Callback {
                job_id,
                origin: sink.origin(),
                event,
            });
            Ok(())
        }
        Err(source) if handler.recoverable => {
            warn!(
                target: DISPATCH_TARGET,
                kind = kind.as_str(),
                emsg = packet.code(),
                error = %source,
                "dropping undecodable response"
            );
            Ok(())
        }
        Err(source) => Err(DispatchError::decode(kind.emsg(), source)),
    }
}
