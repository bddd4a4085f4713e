//! Destination for decoded callbacks.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use steamapps_config::Config;

use crate::callbacks::{Callback, ClientId};

/// Receives callbacks produced by the inbound handlers.
pub trait EventSink: Send + Sync {
    /// Accepts one callback. Called once per decoded response.
    fn post(&self, callback: Callback);

    /// Client identifier attached to callbacks posted to this sink.
    ///
    /// Sinks shared between clients return `None`.
    fn origin(&self) -> Option<ClientId> {
        None
    }
}

impl<T> EventSink for Arc<T>
where
    T: EventSink + ?Sized,
{
    fn post(&self, callback: Callback) {
        (**self).post(callback);
    }

    fn origin(&self) -> Option<ClientId> {
        (**self).origin()
    }
}

/// Unbounded FIFO of callbacks for application code to poll.
#[derive(Debug, Default)]
pub struct CallbackQueue {
    origin: Option<ClientId>,
    queue: Mutex<VecDeque<Callback>>,
}

impl CallbackQueue {
    /// Creates a queue that attaches no origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a queue that stamps `origin` on every callback.
    #[must_use]
    pub fn with_origin(origin: ClientId) -> Self {
        Self {
            origin: Some(origin),
            queue: Mutex::default(),
        }
    }

    /// Creates a queue using the configured client id, if any.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        config
            .client_id()
            .map_or_else(Self::new, |id| Self::with_origin(ClientId(id)))
    }

    /// Removes and returns the oldest callback.
    pub fn try_next(&self) -> Option<Callback> {
        self.lock().pop_front()
    }

    /// Removes and returns every queued callback, oldest first.
    pub fn drain(&self) -> Vec<Callback> {
        self.lock().drain(..).collect()
    }

    /// Number of queued callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true when no callbacks are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<Callback>> {
        // A panic while holding the lock cannot leave the deque half-updated.
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EventSink for CallbackQueue {
    fn post(&self, callback: Callback) {
        self.lock().push_back(callback);
    }

    fn origin(&self) -> Option<ClientId> {
        self.origin
    }
}
