use thiserror::Error;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, CartError>;

/// Declined cart mutations.
///
/// The original demo swallowed these as silent no-ops; surfacing an explicit
/// reason is a deliberate behavioral tightening. State is never changed when
/// a mutation is declined.
#[derive(Error, Debug)]
pub enum CartError {
    #[error("{name} is sold out")]
    SoldOut { name: String },

    #[error("Cannot add more {name}, only {available} in stock")]
    StockLimitReached { name: String, available: u32 },

    #[error("Not enough stock for {name}, available: {available}")]
    InsufficientStock { name: String, available: u32 },

    #[error("Unknown menu item: {id}")]
    UnknownItem { id: String },
}
