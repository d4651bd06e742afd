// Re-export all model types
pub use self::enums::*;
pub use self::errors::*;
pub use self::events::*;
pub use self::menu_item::*;
pub use self::stats::*;
pub use self::validation::*;

mod enums;
mod errors;
mod events;
mod menu_item;
mod stats;
mod validation;
