//! Outbound request builders.
//!
//! Each operation builds exactly one message and hands it to the transport
//! synchronously. Nothing is validated or remembered; replies arrive later
//! through [`SteamApps::handle`].

use thiserror::Error;
use tracing::debug;

use steamapps_wire::fixed::MsgClientGetDepotDecryptionKey;
use steamapps_wire::proto::{
    AppInfoRequestApp, CMsgClientAppInfoRequest, CMsgClientAppInfoUpdate,
    CMsgClientGetAppOwnershipTicket, CMsgClientPackageInfoRequest,
};
use steamapps_wire::{ClientMsg, EMsg};

use crate::app::App;
use crate::handler::SteamApps;
use crate::transport::TransportError;

/// Tracing target for outbound requests.
pub(crate) const REQUESTS_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::requests");

/// Errors surfaced while sending a request.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The transport refused the message.
    #[error("failed to send {emsg:?}: {source}")]
    Transport {
        /// Tag of the message that was not sent.
        emsg: EMsg,
        /// Transport failure.
        #[source]
        source: TransportError,
    },
}

impl SteamApps {
    /// Requests an ownership ticket for `app_id`.
    ///
    /// The reply arrives as [`AppOwnershipTicket`](crate::AppOwnershipTicket).
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Transport`] when the message cannot be sent.
    pub fn get_app_ownership_ticket(&self, app_id: u32) -> Result<(), RequestError> {
        self.send(ClientMsg::protobuf(&CMsgClientGetAppOwnershipTicket {
            app_id: Some(app_id),
        }))
    }

    /// Requests metadata for `apps`, in the order given.
    ///
    /// An empty iterator sends a request with no entries.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Transport`] when the message cannot be sent.
    pub fn get_app_info(&self, apps: impl IntoIterator<Item = App>) -> Result<(), RequestError> {
        self.send(ClientMsg::protobuf(&CMsgClientAppInfoRequest {
            apps: apps.into_iter().map(AppInfoRequestApp::from).collect(),
        }))
    }

    /// Requests full metadata for `package_ids`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Transport`] when the message cannot be sent.
    pub fn get_package_info(
        &self,
        package_ids: impl IntoIterator<Item = u32>,
    ) -> Result<(), RequestError> {
        self.send(ClientMsg::protobuf(&CMsgClientPackageInfoRequest {
            package_ids: package_ids.into_iter().collect(),
            meta_data_only: Some(false),
        }))
    }

    /// Requests the apps changed since `last_change_number`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Transport`] when the message cannot be sent.
    pub fn get_app_changes(&self, last_change_number: u32) -> Result<(), RequestError> {
        self.send(ClientMsg::protobuf(&CMsgClientAppInfoUpdate {
            last_changenumber: Some(last_change_number),
            send_changelist: Some(true),
        }))
    }

    /// Requests the decryption key for `depot_id`.
    ///
    /// Sent with fixed-header framing.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Transport`] when the message cannot be sent.
    pub fn get_depot_decryption_key(&self, depot_id: u32) -> Result<(), RequestError> {
        self.send(ClientMsg::fixed(&MsgClientGetDepotDecryptionKey { depot_id }))
    }

    fn send(&self, msg: ClientMsg) -> Result<(), RequestError> {
        let emsg = msg.emsg();
        debug!(
            target: REQUESTS_TARGET,
            emsg = emsg.code(),
            schema = ?msg.schema(),
            body_len = msg.body().len(),
            "sending request"
        );
        self.transport
            .send(msg)
            .map_err(|source| RequestError::Transport { emsg, source })
    }
}
