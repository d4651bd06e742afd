use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Course;

/// A dish on the menu. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub course: Course,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Request model for adding a dish to the menu
///
/// Callers are expected to have validated the fields already, usually through
/// [`DishForm::validate`](super::DishForm::validate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMenuItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub course: Course,
    pub price: Decimal,
}

impl NewMenuItem {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        course: Course,
        price: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            course,
            price,
        }
    }
}

impl MenuItem {
    /// Create a new MenuItem with a generated ID and creation timestamp
    pub fn new(request: NewMenuItem) -> Self {
        Self {
            id: generate_item_id(),
            name: request.name,
            description: request.description,
            course: request.course,
            price: request.price,
            created_at: Utc::now(),
        }
    }

    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

/// Generate a fresh item ID: `M` followed by the 32 hex digits of a v4 UUID
pub fn generate_item_id() -> String {
    format!("M{}", Uuid::new_v4().simple())
}
