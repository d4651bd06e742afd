use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Course;

/// Aggregate figures shown in the statistics panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MenuStats {
    pub total_items: usize,
    pub avg_starters: Decimal,
    pub avg_mains: Decimal,
    pub avg_desserts: Decimal,
}

impl MenuStats {
    /// Average price for a course. `Course::Other` has no group and reads as zero.
    pub fn average_for(&self, course: Course) -> Decimal {
        match course {
            Course::Starter => self.avg_starters,
            Course::Main => self.avg_mains,
            Course::Dessert => self.avg_desserts,
            Course::Other => Decimal::ZERO,
        }
    }
}
