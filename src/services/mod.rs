// Services module - business logic layer

pub mod event_emitter;
pub mod menu_store;
pub mod stats_calculator;

pub use event_emitter::{EventEmitter, Listener, SubscriptionId};
pub use menu_store::MenuStore;
pub use stats_calculator::compute_stats;
