use rust_decimal::Decimal;
use thiserror::Error;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, WalletError>;

/// Declined wallet operations
#[derive(Error, Debug)]
pub enum WalletError {
    #[error("Deposit amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),
}
