//! Wallet module - balance, append-only transaction ledger, and its
//! operations.

mod wallet_errors;
mod wallet_ledger;
mod wallet_model;


// Re-export the public interface
pub use wallet_errors::{Result, WalletError};
pub use wallet_model::{Transaction, TransactionType, Wallet};
