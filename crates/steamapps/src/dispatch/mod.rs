//! Inbound routing from message tag to decode-and-emit handler.
//!
//! The handler table is closed: [`ResponseKind::from_emsg`] classifies every
//! [`EMsg`](steamapps_wire::EMsg) with an exhaustive `match`, so adding a tag
//! to the wire crate does not compile until it is either given a handler or
//! explicitly ignored here.
//!
//! Each handler is described by a `HandlerSpec` carrying its decode function
//! and whether a decode failure is recoverable. Recoverable failures are
//! logged at `warn` under the `steamapps::dispatch` target and dropped; the
//! rest are returned to the caller as [`DispatchError::Decode`].

mod errors;
mod handlers;
mod router;

pub use self::errors::DispatchError;
pub use self::router::ResponseKind;
pub(crate) use self::router::dispatch;
#[cfg(test)]
pub(crate) use self::router::DISPATCH_TARGET;
