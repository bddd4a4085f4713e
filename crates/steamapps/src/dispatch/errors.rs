//! Error types for inbound dispatch failures.

use thiserror::Error;

use steamapps_wire::{EMsg, WireError};

/// Errors surfaced while handling an inbound message.
#[derive(Debug, Clone, Error)]
pub enum DispatchError {
    /// A handled message could not be decoded and its handler does not
    /// tolerate that.
    #[error("failed to decode {emsg:?}: {source}")]
    Decode {
        /// Tag of the undecodable message.
        emsg: EMsg,
        /// Codec failure.
        #[source]
        source: WireError,
    },
}

impl DispatchError {
    /// Creates a decode error for `emsg`.
    #[must_use]
    pub const fn decode(emsg: EMsg, source: WireError) -> Self {
        Self::Decode { emsg, source }
    }

    /// Tag of the message that failed.
    #[must_use]
    pub const fn emsg(&self) -> EMsg {
        match self {
            Self::Decode { emsg, .. } => *emsg,
        }
    }
}
