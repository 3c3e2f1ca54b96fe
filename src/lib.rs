//! Café ordering core.
//!
//! In-memory catalog, cart, wallet ledger and order history behind a single
//! state-owner ([`CafeStore`]), with an atomic checkout transaction, an
//! advisory AI recommendation collaborator, and best-effort blob
//! persistence.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod constants;
pub mod errors;
pub mod orders;
pub mod persist;
pub mod recommend;
pub mod store;
pub mod users;
pub mod wallet;

pub use errors::{Error, Result};
pub use store::CafeStore;
