//! Orders module - completed order records and the append-only history.

mod orders_history;
mod orders_model;


// Re-export the public interface
pub use orders_history::OrderHistory;
pub use orders_model::{Order, OrderStatus};
