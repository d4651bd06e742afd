use std::fmt;
use tracing::{info, instrument, warn};

use crate::models::{generate_item_id, MenuEvent, MenuItem, MenuStats, NewMenuItem};
use crate::repositories::{InMemoryMenuRepository, MenuRepository};
use crate::services::event_emitter::{EventEmitter, SubscriptionId};
use crate::services::stats_calculator::compute_stats;

/// Single source of truth for the dishes on the menu.
///
/// One store is created per session and handed to whatever presents it.
/// Input is expected to be validated before it reaches the store; see
/// [`DishForm::validate`](crate::models::DishForm::validate).
pub struct MenuStore {
    repository: Box<dyn MenuRepository>,
    events: EventEmitter,
}

impl Default for MenuStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MenuStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuStore")
            .field("items", &self.repository.len())
            .field("events", &self.events)
            .finish()
    }
}

impl MenuStore {
    /// Create an empty store backed by the in-memory repository
    pub fn new() -> Self {
        Self::with_repository(Box::new(InMemoryMenuRepository::new()))
    }

    /// Create a store over an existing repository
    pub fn with_repository(repository: Box<dyn MenuRepository>) -> Self {
        Self {
            repository,
            events: EventEmitter::default(),
        }
    }

    /// Replace the event emitter, e.g. with one built from configuration
    pub fn with_event_emitter(mut self, events: EventEmitter) -> Self {
        self.events = events;
        self
    }

    /// Add a dish to the end of the menu and return it
    #[instrument(skip(self, request), fields(name = %request.name, course = %request.course))]
    pub fn add_item(&mut self, request: NewMenuItem) -> MenuItem {
        let mut item = MenuItem::new(request);

        while self.repository.contains(&item.id) {
            warn!(item_id = %item.id, "Menu item ID collision detected, regenerating");
            item.id = generate_item_id();
        }

        self.repository.insert(item.clone());
        let menu_size = self.repository.len();

        info!(item_id = %item.id, menu_size, "Menu item added");
        self.events
            .emit(&MenuEvent::item_added(item.clone(), menu_size));

        item
    }

    /// Remove a dish by ID. Returns false, and changes nothing, if the ID is unknown.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, id: &str) -> bool {
        match self.repository.remove(id) {
            Some(item) => {
                let menu_size = self.repository.len();
                info!(menu_size, "Menu item removed");
                self.events.emit(&MenuEvent::item_removed(item, menu_size));
                true
            }
            None => {
                info!("Menu item not found, nothing removed");
                false
            }
        }
    }

    /// Snapshot of the menu in insertion order
    pub fn list_items(&self) -> Vec<MenuItem> {
        self.repository.all()
    }

    pub fn get_item(&self, id: &str) -> Option<MenuItem> {
        self.repository.find(id)
    }

    pub fn len(&self) -> usize {
        self.repository.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repository.is_empty()
    }

    /// Statistics for the current menu, recomputed on every call
    pub fn stats(&self) -> MenuStats {
        compute_stats(&self.repository.all())
    }

    /// Register a callback run after every successful add or remove
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&MenuEvent) + 'static,
    {
        self.events.subscribe(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }
}
