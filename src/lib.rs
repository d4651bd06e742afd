pub mod config;
pub mod display;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod services;

pub use config::{Config, ConfigError};
pub use models::{Course, DishForm, MenuEvent, MenuItem, MenuStats, NewMenuItem, PricePolicy};
pub use observability::init_observability;
pub use services::{compute_stats, MenuStore};
