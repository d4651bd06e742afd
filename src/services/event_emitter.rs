use std::fmt;
use tracing::{debug, instrument};

use crate::models::MenuEvent;

/// Callback invoked with every emitted menu event
pub type Listener = Box<dyn FnMut(&MenuEvent)>;

/// Handle returned by [`EventEmitter::subscribe`], used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// Synchronous registry of menu event listeners
pub struct EventEmitter {
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
    enabled: bool,
}

impl Default for EventEmitter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listeners", &self.listeners.len())
            .field("enabled", &self.enabled)
            .finish()
    }
}

impl EventEmitter {
    pub fn new(enabled: bool) -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
            enabled,
        }
    }

    /// Register a listener. Listeners run in subscription order.
    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        debug!(subscription = %id, "Listener subscribed");
        id
    }

    /// Drop a listener. Returns false when the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        let removed = self.listeners.len() != before;
        debug!(subscription = %id, removed, "Listener unsubscribed");
        removed
    }

    /// Deliver an event to every listener
    #[instrument(skip(self, event), fields(event_type = %event.event_type, item_id = %event.item_id()))]
    pub fn emit(&mut self, event: &MenuEvent) {
        if !self.enabled {
            debug!("Event emission is disabled, skipping event");
            return;
        }

        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }

        debug!(listeners = self.listeners.len(), "Event delivered");
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Toggle emission without dropping listeners
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}
