pub mod tracing;

pub use self::tracing::{default_filter_directive, init_observability, ObservabilityError};
