//! Decode-and-emit handlers.

use steamapps_wire::fixed::{MsgClientGetDepotDecryptionKeyResponse, MsgClientVACBanStatus};
use steamapps_wire::proto::{
    CMsgClientAppInfoChanges, CMsgClientAppInfoResponse, CMsgClientGameConnectTokens,
    CMsgClientGetAppOwnershipTicketResponse, CMsgClientLicenseList, CMsgClientPackageInfoResponse,
};
use steamapps_wire::{PacketMsg, WireError, decode_fixed, decode_protobuf};

use super::router::{Decoded, HandlerSpec, ResponseKind};
use crate::callbacks::AppsEvent;

pub(crate) static LICENSE_LIST: HandlerSpec = HandlerSpec {
    kind: ResponseKind::LicenseList,
    recoverable: true,
    decode: license_list,
};

pub(crate) static GAME_CONNECT_TOKENS: HandlerSpec = HandlerSpec {
    kind: ResponseKind::GameConnectTokens,
    recoverable: false,
    decode: game_connect_tokens,
};

pub(crate) static VAC_STATUS: HandlerSpec = HandlerSpec {
    kind: ResponseKind::VacStatus,
    recoverable: false,
    decode: vac_status,
};

pub(crate) static APP_OWNERSHIP_TICKET: HandlerSpec = HandlerSpec {
    kind: ResponseKind::AppOwnershipTicket,
    recoverable: true,
    decode: app_ownership_ticket,
};

pub(crate) static APP_INFO: HandlerSpec = HandlerSpec {
    kind: ResponseKind::AppInfo,
    recoverable: true,
    decode: app_info,
};

pub(crate) static PACKAGE_INFO: HandlerSpec = HandlerSpec {
    kind: ResponseKind::PackageInfo,
    recoverable: false,
    decode: package_info,
};

pub(crate) static APP_CHANGES: HandlerSpec = HandlerSpec {
    kind: ResponseKind::AppChanges,
    recoverable: false,
    decode: app_changes,
};

pub(crate) static DEPOT_KEY: HandlerSpec = HandlerSpec {
    kind: ResponseKind::DepotKey,
    recoverable: false,
    decode: depot_key,
};

fn license_list(packet: &PacketMsg) -> Result<Decoded, WireError> {
    let frame = decode_protobuf::<CMsgClientLicenseList>(packet)?;
    Ok(Decoded {
        job_id: frame.header.target_job,
        event: AppsEvent::LicenseList(frame.body.into()),
    })
}

fn game_connect_tokens(packet: &PacketMsg) -> Result<Decoded, WireError> {
    let frame = decode_protobuf::<CMsgClientGameConnectTokens>(packet)?;
    Ok(Decoded {
        job_id: frame.header.target_job,
        event: AppsEvent::GameConnectTokens(frame.body.into()),
    })
}

fn vac_status(packet: &PacketMsg) -> Result<Decoded, WireError> {
    let frame = decode_fixed::<MsgClientVACBanStatus>(packet)?;
    Ok(Decoded {
        job_id: frame.header.target_job,
        event: AppsEvent::VacStatus(frame.into()),
    })
}

fn app_ownership_ticket(packet: &PacketMsg) -> Result<Decoded, WireError> {
    let frame = decode_protobuf::<CMsgClientGetAppOwnershipTicketResponse>(packet)?;
    Ok(Decoded {
        job_id: frame.header.target_job,
        event: AppsEvent::AppOwnershipTicket(frame.body.into()),
    })
}

fn app_info(packet: &PacketMsg) -> Result<Decoded, WireError> {
    let frame = decode_protobuf::<CMsgClientAppInfoResponse>(packet)?;
    Ok(Decoded {
        job_id: frame.header.target_job,
        event: AppsEvent::AppInfo(frame.body.into()),
    })
}

fn package_info(packet: &PacketMsg) -> Result<Decoded, WireError> {
    let frame = decode_protobuf::<CMsgClientPackageInfoResponse>(packet)?;
    Ok(Decoded {
        job_id: frame.header.target_job,
        event: AppsEvent::PackageInfo(frame.body.into()),
    })
}

fn app_changes(packet: &PacketMsg) -> Result<Decoded, WireError> {
    let frame = decode_protobuf::<CMsgClientAppInfoChanges>(packet)?;
    Ok(Decoded {
        job_id: frame.header.target_job,
        event: AppsEvent::AppChanges(frame.body.into()),
    })
}

fn depot_key(packet: &PacketMsg) -> Result<Decoded, WireError> {
    let frame = decode_fixed::<MsgClientGetDepotDecryptionKeyResponse>(packet)?;
    Ok(Decoded {
        job_id: frame.header.target_job,
        event: AppsEvent::DepotKey(frame.into()),
    })
}
