//! Checkout module - the atomic transaction converting a cart into a
//! completed order.

mod checkout_errors;
mod checkout_service;


// Re-export the public interface
pub use checkout_errors::{CheckoutError, Result};
pub use checkout_service::{process_checkout, CheckoutOutcome};
