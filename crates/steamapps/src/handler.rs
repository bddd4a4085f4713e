//! The application-service message handler.

use std::fmt;
use std::sync::Arc;

use steamapps_wire::PacketMsg;

use crate::dispatch::{self, DispatchError};
use crate::sink::EventSink;
use crate::transport::Transport;

/// Builds outbound requests and turns inbound responses into callbacks.
///
/// Holds no mutable state: requests are fire-and-forget and every inbound
/// message is handled independently, so one instance can be shared across
/// threads.
#[derive(Clone)]
pub struct SteamApps {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) sink: Arc<dyn EventSink>,
}

impl SteamApps {
    /// Creates a handler sending through `transport` and posting to `sink`.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, sink: Arc<dyn EventSink>) -> Self {
        Self { transport, sink }
    }

    /// Handles one inbound message.
    ///
    /// Messages for other services are ignored. A handled message produces
    /// exactly one callback unless it fails to decode.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Decode`] when the message cannot be decoded
    /// and its handler does not tolerate failures (see
    /// [`ResponseKind::recoverable`](crate::ResponseKind::recoverable)).
    pub fn handle(&self, packet: &PacketMsg) -> Result<(), DispatchError> {
        dispatch::dispatch(packet, self.sink.as_ref())
    }
}

impl fmt::Debug for SteamApps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SteamApps")
            .field("origin", &self.sink.origin())
            .finish_non_exhaustive()
    }
}
