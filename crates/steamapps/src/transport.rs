//! Outbound seam to the connection.

use std::io;
use std::sync::Arc;

use thiserror::Error;

use steamapps_wire::ClientMsg;

/// Hands built messages to the connection for framing and delivery.
pub trait Transport: Send + Sync {
    /// Sends one message.
    ///
    /// # Errors
    ///
    /// Returns an error when the connection cannot accept the message.
    fn send(&self, msg: ClientMsg) -> Result<(), TransportError>;
}

impl<T> Transport for Arc<T>
where
    T: Transport + ?Sized,
{
    fn send(&self, msg: ClientMsg) -> Result<(), TransportError> {
        (**self).send(msg)
    }
}

/// Errors reported by a [`Transport`].
#[derive(Debug, Error)]
pub enum TransportError {
    /// The connection is closed.
    #[error("not connected")]
    Disconnected,
    /// Writing to the connection failed.
    #[error("transport I/O failed: {0}")]
    Io(#[from] io::Error),
}
