//! Router event subscription surface
//!
//! Listeners can be attached and detached, but nothing is ever dispatched.
//! Tests use it to check that code subscribes and cleans up after itself.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Router lifecycle events a listener can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouterEvent {
    /// A route change started
    RouteChangeStart,
    /// A route change finished
    RouteChangeComplete,
    /// A route change failed or was cancelled
    RouteChangeError,
    /// History is about to change
    BeforeHistoryChange,
    /// Only the fragment is about to change
    HashChangeStart,
    /// Only the fragment changed
    HashChangeComplete,
}

/// Handle identifying an attached listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Listener callback, receives the URL involved in the event
pub type Listener = Arc<dyn Fn(&str) + Send + Sync>;

/// Attach/detach registry for router events
#[derive(Default)]
pub struct RouterEvents {
    next_id: AtomicU64,
    listeners: Mutex<HashMap<RouterEvent, Vec<(ListenerId, Listener)>>>,
}

impl RouterEvents {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a listener and returns its handle
    pub fn on<F>(&self, event: RouterEvent, listener: F) -> ListenerId
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock()
            .entry(event)
            .or_default()
            .push((id, Arc::new(listener)));
        id
    }

    /// Detaches a listener; returns whether it was attached
    pub fn off(&self, event: RouterEvent, id: ListenerId) -> bool {
        let mut listeners = self.lock();
        let Some(attached) = listeners.get_mut(&event) else {
            return false;
        };
        let before = attached.len();
        attached.retain(|(listener_id, _)| *listener_id != id);
        before != attached.len()
    }

    /// Accepted for API compatibility; listeners are never invoked
    pub fn emit(&self, _event: RouterEvent, _url: &str) {}

    /// Number of listeners attached to `event`
    pub fn listener_count(&self, event: RouterEvent) -> usize {
        self.lock().get(&event).map_or(0, Vec::len)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<RouterEvent, Vec<(ListenerId, Listener)>>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for RouterEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<RouterEvent, usize> = self
            .lock()
            .iter()
            .map(|(event, attached)| (*event, attached.len()))
            .collect();
        f.debug_struct("RouterEvents")
            .field("listeners", &counts)
            .finish()
    }
}
