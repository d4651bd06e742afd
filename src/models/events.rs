use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MenuItem;

/// Event types emitted by the menu store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum MenuEventType {
    ItemAdded,
    ItemRemoved,
}

impl std::fmt::Display for MenuEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuEventType::ItemAdded => write!(f, "ItemAdded"),
            MenuEventType::ItemRemoved => write!(f, "ItemRemoved"),
        }
    }
}

/// Notification sent to subscribers after a successful store mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEvent {
    pub event_type: MenuEventType,
    pub item: MenuItem,
    /// Number of items on the menu once the change was applied
    pub menu_size: usize,
    pub timestamp: DateTime<Utc>,
}

impl MenuEvent {
    pub fn item_added(item: MenuItem, menu_size: usize) -> Self {
        Self {
            event_type: MenuEventType::ItemAdded,
            item,
            menu_size,
            timestamp: Utc::now(),
        }
    }

    pub fn item_removed(item: MenuItem, menu_size: usize) -> Self {
        Self {
            event_type: MenuEventType::ItemRemoved,
            item,
            menu_size,
            timestamp: Utc::now(),
        }
    }

    pub fn item_id(&self) -> &str {
        &self.item.id
    }
}
