//! Cart module - session-scoped item snapshots and their mutations.

mod cart_errors;
mod cart_model;
mod cart_store;

#[cfg(test)]
mod cart_store_tests;

// Re-export the public interface
pub use cart_errors::{CartError, Result};
pub use cart_model::CartLine;
pub use cart_store::Cart;
