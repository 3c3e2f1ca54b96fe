//! Catalog module - menu item models, seed data, and the in-memory store.

mod catalog_constants;
mod catalog_errors;
mod catalog_model;
mod catalog_store;


// Re-export the public interface
pub use catalog_constants::seed_menu;
pub use catalog_errors::{CatalogError, Result};
pub use catalog_model::{Category, MenuItem, NewMenuItem};
pub use catalog_store::Catalog;
