// Repositories module - data access layer

pub mod menu_repository;

pub use menu_repository::{InMemoryMenuRepository, MenuRepository};
