use tracing::debug;

use crate::models::MenuItem;

/// Trait defining the storage seam behind the menu store
pub trait MenuRepository {
    /// Append an item at the end of the menu
    fn insert(&mut self, item: MenuItem);

    /// Remove an item by ID, returning it when it existed
    fn remove(&mut self, id: &str) -> Option<MenuItem>;

    /// Find an item by its ID
    fn find(&self, id: &str) -> Option<MenuItem>;

    /// Check if an item exists
    fn contains(&self, id: &str) -> bool;

    /// All items in insertion order
    fn all(&self) -> Vec<MenuItem>;

    /// Number of stored items
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory repository keeping items in insertion order
#[derive(Debug, Default, Clone)]
pub struct InMemoryMenuRepository {
    items: Vec<MenuItem>,
}

impl InMemoryMenuRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with items, keeping their order
    pub fn with_items(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

impl MenuRepository for InMemoryMenuRepository {
    fn insert(&mut self, item: MenuItem) {
        debug!(item_id = %item.id, "Inserting menu item");
        self.items.push(item);
    }

    fn remove(&mut self, id: &str) -> Option<MenuItem> {
        let index = self.position(id)?;
        debug!(item_id = %id, index, "Removing menu item");
        // Vec::remove shifts later items down, which keeps insertion order
        Some(self.items.remove(index))
    }

    fn find(&self, id: &str) -> Option<MenuItem> {
        self.items.iter().find(|item| item.id == id).cloned()
    }

    fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    fn all(&self) -> Vec<MenuItem> {
        self.items.clone()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
