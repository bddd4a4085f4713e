//! Typed message handler for the application and licensing service.
//!
//! [`SteamApps`] sits between the connection and application code in both
//! directions:
//!
//! - **Outbound**, each request method builds exactly one [`ClientMsg`] in
//!   the framing its message type requires and hands it to the injected
//!   [`Transport`]. Nothing is remembered between calls.
//! - **Inbound**, [`SteamApps::handle`] routes a [`PacketMsg`] by its tag to
//!   one of eight handlers. A handler decodes the frame and posts one
//!   [`Callback`] to the injected [`EventSink`]. Tags owned by other services
//!   are ignored.
//!
//! ## Decode failures
//!
//! Handlers differ in how they treat a frame that fails to decode. Ownership
//! ticket, app info and license list responses are dropped with a warning;
//! every other response surfaces [`DispatchError::Decode`] to the caller. The
//! policy is recorded per handler (see [`ResponseKind::recoverable`]) so it
//! stays visible and testable.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use steamapps::{App, CallbackQueue, SteamApps, Transport, TransportError};
//! use steamapps_wire::ClientMsg;
//!
//! struct Connection;
//!
//! impl Transport for Connection {
//!     fn send(&self, msg: ClientMsg) -> Result<(), TransportError> {
//!         let _frame = msg.encode();
//!         Ok(())
//!     }
//! }
//!
//! let queue = Arc::new(CallbackQueue::new());
//! let apps = SteamApps::new(Arc::new(Connection), queue.clone());
//! apps.get_app_info([App::new(440), App::with_sections(570, 3)])
//!     .expect("send");
//! ```

mod app;
mod callbacks;
mod dispatch;
mod handler;
mod requests;
mod sink;
pub mod telemetry;
mod transport;

pub use app::{ALL_SECTIONS, App};
pub use callbacks::{
    AppChanges, AppDetails, AppInfo, AppOwnershipTicket, AppSection, AppsEvent, Callback,
    ClientId, DepotKey, GameConnectTokens, License, LicenseList, PackageDetails, PackageInfo,
    VacStatus,
};
pub use dispatch::{DispatchError, ResponseKind};
pub use handler::SteamApps;
pub use requests::RequestError;
pub use sink::{CallbackQueue, EventSink};
pub use steamapps_wire::{ClientMsg, EMsg, EResult, JobId, PacketMsg, Schema};
pub use telemetry::{TelemetryError, TelemetryHandle};
pub use transport::{Transport, TransportError};

#[cfg(test)]
mod tests;
