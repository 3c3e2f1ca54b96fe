use rust_decimal::Decimal;
use thiserror::Error;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, CheckoutError>;

/// Declined checkouts. Every variant leaves cart, catalog, wallet and order
/// history untouched.
#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("Insufficient funds: order total {total} exceeds wallet balance {balance}")]
    InsufficientFunds { total: Decimal, balance: Decimal },

    #[error("Item no longer exists: {name}")]
    MissingItem { name: String },

    #[error("Insufficient stock for {name}, available: {available}")]
    InsufficientStock { name: String, available: u32 },
}
