//! Protobuf schemas for structured frames.
//!
//! Field numbers match the protocol's published `.proto` definitions. Scalar
//! fields are `optional` (proto2 semantics) so an absent field can be told
//! apart from a zero value.

use crate::emsg::EMsg;

/// Protobuf message that travels as the body of one specific message type.
///
/// Binding the tag to the body type makes the operation-to-tag mapping a
/// property of the type system: a body cannot be sent or decoded under a
/// different tag.
pub trait ProtoBody: prost::Message + Default {
    /// Message type this body is sent under.
    const EMSG: EMsg;
}

/// Header of every structured frame.
#[derive(Clone, PartialEq, prost::Message)]
pub struct CMsgProtoBufHeader {
    /// Account the session belongs to.
    #[prost(fixed64, optional, tag = "1")]
    pub steamid: Option<u64>,
    /// Session identifier assigned at logon.
    #[prost(int32, optional, tag = "2")]
    pub client_sessionid: Option<i32>,
    /// Job the frame originates from.
    #[prost(fixed64, optional, tag = "10")]
    pub jobid_source: Option<u64>,
    /// Job the frame answers.
    #[prost(fixed64, optional, tag = "11")]
    pub jobid_target: Option<u64>,
}

/// Request for an app ownership ticket.
#[derive(Clone, PartialEq, prost::Message)]
pub struct CMsgClientGetAppOwnershipTicket {
    /// App the ticket is requested for.
    #[prost(uint32, optional, tag = "1")]
    pub app_id: Option<u32>,
}

impl ProtoBody for CMsgClientGetAppOwnershipTicket {
    const EMSG: EMsg = EMsg::ClientGetAppOwnershipTicket;
}

/// Reply carrying an app ownership ticket.
#[derive(Clone, PartialEq, prost::Message)]
pub struct CMsgClientGetAppOwnershipTicketResponse {
    /// Result code; absent means failure.
    #[prost(uint32, optional, tag = "1")]
    pub eresult: Option<u32>,
    /// App the ticket belongs to.
    #[prost(uint32, optional, tag = "2")]
    pub app_id: Option<u32>,
    /// Opaque signed ticket.
    #[prost(bytes = "vec", optional, tag = "3")]
    pub ticket: Option<Vec<u8>>,
}

impl ProtoBody for CMsgClientGetAppOwnershipTicketResponse {
    const EMSG: EMsg = EMsg::ClientGetAppOwnershipTicketResponse;
}

/// One app entry in an app info request.
#[derive(Clone, PartialEq, prost::Message)]
pub struct AppInfoRequestApp {
    /// App identifier.
    #[prost(uint32, optional, tag = "1")]
    pub app_id: Option<u32>,
    /// Bitmask of requested metadata sections.
    #[prost(uint32, optional, tag = "2")]
    pub section_flags: Option<u32>,
}

/// Request for app metadata.
#[derive(Clone, PartialEq, prost::Message)]
pub struct CMsgClientAppInfoRequest {
    /// Apps to describe, in request order.
    #[prost(message, repeated, tag = "1")]
    pub apps: Vec<AppInfoRequestApp>,
}

impl ProtoBody for CMsgClientAppInfoRequest {
    const EMSG: EMsg = EMsg::ClientAppInfoRequest;
}

/// One metadata section of an app.
#[derive(Clone, PartialEq, prost::Message)]
pub struct AppInfoSection {
    /// Section type identifier.
    #[prost(uint32, optional, tag = "1")]
    pub section_id: Option<u32>,
    /// Section content in binary key-value form.
    #[prost(bytes = "vec", optional, tag = "2")]
    pub section_kv: Option<Vec<u8>>,
}

/// One app entry in an app info reply.
#[derive(Clone, PartialEq, prost::Message)]
pub struct AppInfoResponseApp {
    /// App identifier.
    #[prost(uint32, optional, tag = "1")]
    pub app_id: Option<u32>,
    /// Change number the metadata was taken at.
    #[prost(uint32, optional, tag = "2")]
    pub change_number: Option<u32>,
    /// Returned sections.
    #[prost(message, repeated, tag = "3")]
    pub sections: Vec<AppInfoSection>,
}

/// Reply carrying app metadata.
#[derive(Clone, PartialEq, prost::Message)]
pub struct CMsgClientAppInfoResponse {
    /// Described apps.
    #[prost(message, repeated, tag = "1")]
    pub apps: Vec<AppInfoResponseApp>,
    /// Requested apps the server does not know.
    #[prost(uint32, repeated, tag = "2")]
    pub apps_unknown: Vec<u32>,
    /// Number of apps still to be delivered in later replies.
    #[prost(uint32, optional, tag = "3")]
    pub apps_pending: Option<u32>,
}

impl ProtoBody for CMsgClientAppInfoResponse {
    const EMSG: EMsg = EMsg::ClientAppInfoResponse;
}

/// Request for package metadata.
#[derive(Clone, PartialEq, prost::Message)]
pub struct CMsgClientPackageInfoRequest {
    /// Packages to describe.
    #[prost(uint32, repeated, tag = "1")]
    pub package_ids: Vec<u32>,
    /// Request only change numbers, not full metadata.
    #[prost(bool, optional, tag = "2")]
    pub meta_data_only: Option<bool>,
}

impl ProtoBody for CMsgClientPackageInfoRequest {
    const EMSG: EMsg = EMsg::ClientPackageInfoRequest;
}

/// One package entry in a package info reply.
#[derive(Clone, PartialEq, prost::Message)]
pub struct PackageInfoResponsePackage {
    /// Package identifier.
    #[prost(uint32, optional, tag = "1")]
    pub package_id: Option<u32>,
    /// Change number the metadata was taken at.
    #[prost(uint32, optional, tag = "2")]
    pub change_number: Option<u32>,
    /// SHA-1 of the metadata buffer.
    #[prost(bytes = "vec", optional, tag = "3")]
    pub sha: Option<Vec<u8>>,
    /// Metadata in binary key-value form.
    #[prost(bytes = "vec", optional, tag = "4")]
    pub buffer: Option<Vec<u8>>,
}

/// Reply carrying package metadata.
#[derive(Clone, PartialEq, prost::Message)]
pub struct CMsgClientPackageInfoResponse {
    /// Described packages.
    #[prost(message, repeated, tag = "1")]
    pub packages: Vec<PackageInfoResponsePackage>,
    /// Requested packages the server does not know.
    #[prost(uint32, repeated, tag = "2")]
    pub packages_unknown: Vec<u32>,
    /// Number of packages still to be delivered in later replies.
    #[prost(uint32, optional, tag = "3")]
    pub packages_pending: Option<u32>,
}

impl ProtoBody for CMsgClientPackageInfoResponse {
    const EMSG: EMsg = EMsg::ClientPackageInfoResponse;
}

/// Request for app changes since a change number.
#[derive(Clone, PartialEq, prost::Message)]
pub struct CMsgClientAppInfoUpdate {
    /// Last change number the client has seen.
    #[prost(uint32, optional, tag = "1")]
    pub last_changenumber: Option<u32>,
    /// Include the list of changed apps in the reply.
    #[prost(bool, optional, tag = "2")]
    pub send_changelist: Option<bool>,
}

impl ProtoBody for CMsgClientAppInfoUpdate {
    const EMSG: EMsg = EMsg::ClientAppInfoUpdate;
}

/// Reply listing changed apps.
#[derive(Clone, PartialEq, prost::Message)]
pub struct CMsgClientAppInfoChanges {
    /// Current change number on the server.
    #[prost(uint32, optional, tag = "1")]
    pub current_change_number: Option<u32>,
    /// The client is too far behind and must refetch everything.
    #[prost(bool, optional, tag = "2")]
    pub force_full_update: Option<bool>,
    /// Apps changed since the requested change number.
    #[prost(uint32, repeated, tag = "3")]
    pub app_ids: Vec<u32>,
}

impl ProtoBody for CMsgClientAppInfoChanges {
    const EMSG: EMsg = EMsg::ClientAppInfoChanges;
}

/// One license owned by the account.
#[derive(Clone, PartialEq, prost::Message)]
pub struct LicenseEntry {
    /// Package the license grants.
    #[prost(uint32, optional, tag = "1")]
    pub package_id: Option<u32>,
    /// Creation time, seconds since the Unix epoch.
    #[prost(fixed32, optional, tag = "2")]
    pub time_created: Option<u32>,
    /// Next billing or expiry processing time.
    #[prost(fixed32, optional, tag = "3")]
    pub time_next_process: Option<u32>,
    /// Playtime limit in minutes, zero for unlimited.
    #[prost(int32, optional, tag = "4")]
    pub minute_limit: Option<i32>,
    /// Minutes of the limit already used.
    #[prost(int32, optional, tag = "5")]
    pub minutes_used: Option<i32>,
    /// How the license was paid for.
    #[prost(uint32, optional, tag = "6")]
    pub payment_method: Option<u32>,
    /// License flag bits.
    #[prost(uint32, optional, tag = "7")]
    pub flags: Option<u32>,
    /// ISO country code of the purchase.
    #[prost(string, optional, tag = "8")]
    pub purchase_country_code: Option<String>,
    /// License type.
    #[prost(uint32, optional, tag = "9")]
    pub license_type: Option<u32>,
    /// Territory restriction code.
    #[prost(int32, optional, tag = "10")]
    pub territory_code: Option<i32>,
}

/// Licenses owned by the account.
#[derive(Clone, PartialEq, prost::Message)]
pub struct CMsgClientLicenseList {
    /// Result code; absent means failure.
    #[prost(int32, optional, tag = "1")]
    pub eresult: Option<i32>,
    /// Owned licenses.
    #[prost(message, repeated, tag = "2")]
    pub licenses: Vec<LicenseEntry>,
}

impl ProtoBody for CMsgClientLicenseList {
    const EMSG: EMsg = EMsg::ClientLicenseList;
}

/// Game connect tokens pushed after logon.
#[derive(Clone, PartialEq, prost::Message)]
pub struct CMsgClientGameConnectTokens {
    /// Number of tokens the client should retain.
    #[prost(uint32, optional, tag = "1")]
    pub max_tokens_to_keep: Option<u32>,
    /// Opaque tokens.
    #[prost(bytes = "vec", repeated, tag = "2")]
    pub tokens: Vec<Vec<u8>>,
}

impl ProtoBody for CMsgClientGameConnectTokens {
    const EMSG: EMsg = EMsg::ClientGameConnectTokens;
}
