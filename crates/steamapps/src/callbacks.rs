//! Events posted to the sink for decoded responses.
//!
//! Each type is an immutable snapshot of one inbound message. Absent
//! protobuf fields fall back to zero values, except result codes, which
//! fall back to [`EResult::Fail`].

use steamapps_wire::fixed::{
    DEPOT_KEY_LEN, MsgClientGetDepotDecryptionKeyResponse, MsgClientVACBanStatus,
};
use steamapps_wire::proto::{
    AppInfoResponseApp, AppInfoSection, CMsgClientAppInfoChanges, CMsgClientAppInfoResponse,
    CMsgClientGameConnectTokens, CMsgClientGetAppOwnershipTicketResponse, CMsgClientLicenseList,
    CMsgClientPackageInfoResponse, LicenseEntry, PackageInfoResponsePackage,
};
use steamapps_wire::{EResult, FixedFrame, JobId};

use crate::dispatch::ResponseKind;

/// Number of game connect tokens kept when the server does not say.
const DEFAULT_TOKENS_TO_KEEP: u32 = 10;

/// Identifier of the client a callback was produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(pub u64);

/// One decoded response, as delivered to the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callback {
    /// Job the response answers, copied from the frame header.
    pub job_id: JobId,
    /// Client the callback belongs to, when the sink attaches one.
    pub origin: Option<ClientId>,
    /// Decoded event.
    pub event: AppsEvent,
}

/// Decoded response, one variant per handled message type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppsEvent {
    /// Licenses owned by the account.
    LicenseList(LicenseList),
    /// Game connect tokens.
    GameConnectTokens(GameConnectTokens),
    /// Anti-cheat ban status.
    VacStatus(VacStatus),
    /// App ownership ticket.
    AppOwnershipTicket(AppOwnershipTicket),
    /// App metadata.
    AppInfo(AppInfo),
    /// Package metadata.
    PackageInfo(PackageInfo),
    /// Apps changed since a change number.
    AppChanges(AppChanges),
    /// Depot decryption key.
    DepotKey(DepotKey),
}

impl AppsEvent {
    /// Response kind the event was decoded from.
    #[must_use]
    pub const fn kind(&self) -> ResponseKind {
        match self {
            Self::LicenseList(_) => ResponseKind::LicenseList,
            Self::GameConnectTokens(_) => ResponseKind::GameConnectTokens,
            Self::VacStatus(_) => ResponseKind::VacStatus,
            Self::AppOwnershipTicket(_) => ResponseKind::AppOwnershipTicket,
            Self::AppInfo(_) => ResponseKind::AppInfo,
            Self::PackageInfo(_) => ResponseKind::PackageInfo,
            Self::AppChanges(_) => ResponseKind::AppChanges,
            Self::DepotKey(_) => ResponseKind::DepotKey,
        }
    }
}

/// A license owned by the account.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct License {
    /// Package the license grants.
    pub package_id: u32,
    /// Creation time, seconds since the Unix epoch.
    pub time_created: u32,
    /// Next processing time, seconds since the Unix epoch.
    pub time_next_process: u32,
    /// Playtime limit in minutes; zero means unlimited.
    pub minute_limit: i32,
    /// Minutes of the limit already used.
    pub minutes_used: i32,
    /// Payment method code.
    pub payment_method: u32,
    /// License flag bits.
    pub flags: u32,
    /// Country the license was purchased in.
    pub purchase_country_code: String,
    /// License type code.
    pub license_type: u32,
    /// Territory restriction code.
    pub territory_code: i32,
}

impl From<LicenseEntry> for License {
    fn from(entry: LicenseEntry) -> Self {
        Self {
            package_id: entry.package_id.unwrap_or_default(),
            time_created: entry.time_created.unwrap_or_default(),
            time_next_process: entry.time_next_process.unwrap_or_default(),
            minute_limit: entry.minute_limit.unwrap_or_default(),
            minutes_used: entry.minutes_used.unwrap_or_default(),
            payment_method: entry.payment_method.unwrap_or_default(),
            flags: entry.flags.unwrap_or_default(),
            purchase_country_code: entry.purchase_country_code.unwrap_or_default(),
            license_type: entry.license_type.unwrap_or_default(),
            territory_code: entry.territory_code.unwrap_or_default(),
        }
    }
}

/// Licenses owned by the account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseList {
    /// Result of the license query.
    pub result: EResult,
    /// Owned licenses in server order.
    pub licenses: Vec<License>,
}

impl From<CMsgClientLicenseList> for LicenseList {
    fn from(body: CMsgClientLicenseList) -> Self {
        Self {
            result: body.eresult.map_or(EResult::Fail, EResult::from),
            licenses: body.licenses.into_iter().map(License::from).collect(),
        }
    }
}

/// Game connect tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConnectTokens {
    /// Number of tokens the client should retain.
    pub tokens_to_keep: u32,
    /// Opaque tokens.
    pub tokens: Vec<Vec<u8>>,
}

impl From<CMsgClientGameConnectTokens> for GameConnectTokens {
    fn from(body: CMsgClientGameConnectTokens) -> Self {
        Self {
            tokens_to_keep: body.max_tokens_to_keep.unwrap_or(DEFAULT_TOKENS_TO_KEEP),
            tokens: body.tokens,
        }
    }
}

/// Anti-cheat ban status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacStatus {
    /// Number of active bans.
    pub num_bans: u32,
    /// Raw payload following the fixed body.
    pub payload: Vec<u8>,
}

impl VacStatus {
    /// Banned app ids carried in the payload.
    ///
    /// The payload is a packed array of little-endian `u32`; a trailing
    /// partial entry is ignored.
    #[must_use]
    pub fn banned_apps(&self) -> Vec<u32> {
        self.payload
            .chunks_exact(4)
            .filter_map(|chunk| <[u8; 4]>::try_from(chunk).ok())
            .map(u32::from_le_bytes)
            .collect()
    }
}

impl From<FixedFrame<MsgClientVACBanStatus>> for VacStatus {
    fn from(frame: FixedFrame<MsgClientVACBanStatus>) -> Self {
        Self {
            num_bans: frame.body.num_bans,
            payload: frame.payload,
        }
    }
}

/// App ownership ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppOwnershipTicket {
    /// Result of the ticket request.
    pub result: EResult,
    /// App the ticket is for.
    pub app_id: u32,
    /// Opaque signed ticket; empty on failure.
    pub ticket: Vec<u8>,
}

impl From<CMsgClientGetAppOwnershipTicketResponse> for AppOwnershipTicket {
    fn from(body: CMsgClientGetAppOwnershipTicketResponse) -> Self {
        let result = body
            .eresult
            .and_then(|code| i32::try_from(code).ok())
            .map_or(EResult::Fail, EResult::from);
        Self {
            result,
            app_id: body.app_id.unwrap_or_default(),
            ticket: body.ticket.unwrap_or_default(),
        }
    }
}

/// One metadata section of an app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSection {
    /// Section type identifier.
    pub section_id: u32,
    /// Section content in binary key-value form.
    pub key_values: Vec<u8>,
}

impl From<AppInfoSection> for AppSection {
    fn from(section: AppInfoSection) -> Self {
        Self {
            section_id: section.section_id.unwrap_or_default(),
            key_values: section.section_kv.unwrap_or_default(),
        }
    }
}

/// Metadata for one app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDetails {
    /// App identifier.
    pub app_id: u32,
    /// Change number the metadata was taken at.
    pub change_number: u32,
    /// Returned sections.
    pub sections: Vec<AppSection>,
}

impl From<AppInfoResponseApp> for AppDetails {
    fn from(app: AppInfoResponseApp) -> Self {
        Self {
            app_id: app.app_id.unwrap_or_default(),
            change_number: app.change_number.unwrap_or_default(),
            sections: app.sections.into_iter().map(AppSection::from).collect(),
        }
    }
}

/// App metadata reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    /// Described apps.
    pub apps: Vec<AppDetails>,
    /// Requested apps the server does not know.
    pub unknown_apps: Vec<u32>,
    /// Apps still to arrive in later replies.
    pub apps_pending: u32,
}

impl From<CMsgClientAppInfoResponse> for AppInfo {
    fn from(body: CMsgClientAppInfoResponse) -> Self {
        Self {
            apps: body.apps.into_iter().map(AppDetails::from).collect(),
            unknown_apps: body.apps_unknown,
            apps_pending: body.apps_pending.unwrap_or_default(),
        }
    }
}

/// Metadata for one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDetails {
    /// Package identifier.
    pub package_id: u32,
    /// Change number the metadata was taken at.
    pub change_number: u32,
    /// SHA-1 of `buffer`.
    pub sha: Vec<u8>,
    /// Metadata in binary key-value form.
    pub buffer: Vec<u8>,
}

impl From<PackageInfoResponsePackage> for PackageDetails {
    fn from(package: PackageInfoResponsePackage) -> Self {
        Self {
            package_id: package.package_id.unwrap_or_default(),
            change_number: package.change_number.unwrap_or_default(),
            sha: package.sha.unwrap_or_default(),
            buffer: package.buffer.unwrap_or_default(),
        }
    }
}

/// Package metadata reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    /// Described packages.
    pub packages: Vec<PackageDetails>,
    /// Requested packages the server does not know.
    pub unknown_packages: Vec<u32>,
    /// Packages still to arrive in later replies.
    pub packages_pending: u32,
}

impl From<CMsgClientPackageInfoResponse> for PackageInfo {
    fn from(body: CMsgClientPackageInfoResponse) -> Self {
        Self {
            packages: body.packages.into_iter().map(PackageDetails::from).collect(),
            unknown_packages: body.packages_unknown,
            packages_pending: body.packages_pending.unwrap_or_default(),
        }
    }
}

/// Apps changed since a change number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppChanges {
    /// Current change number on the server.
    pub current_change_number: u32,
    /// The client must discard cached metadata and refetch.
    pub force_full_update: bool,
    /// Changed apps.
    pub app_changes: Vec<u32>,
}

impl From<CMsgClientAppInfoChanges> for AppChanges {
    fn from(body: CMsgClientAppInfoChanges) -> Self {
        Self {
            current_change_number: body.current_change_number.unwrap_or_default(),
            force_full_update: body.force_full_update.unwrap_or_default(),
            app_changes: body.app_ids,
        }
    }
}

/// Depot decryption key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepotKey {
    /// Result of the key request.
    pub result: EResult,
    /// Depot the key belongs to.
    pub depot_id: u32,
    /// AES key; zeroed unless `result` is [`EResult::Ok`].
    pub depot_key: [u8; DEPOT_KEY_LEN],
}

impl From<FixedFrame<MsgClientGetDepotDecryptionKeyResponse>> for DepotKey {
    fn from(frame: FixedFrame<MsgClientGetDepotDecryptionKeyResponse>) -> Self {
        Self {
            result: frame.body.result,
            depot_id: frame.body.depot_id,
            depot_key: frame.body.depot_encryption_key,
        }
    }
}
