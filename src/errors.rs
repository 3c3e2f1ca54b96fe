use thiserror::Error;

use crate::cart::CartError;
use crate::catalog::CatalogError;
use crate::checkout::CheckoutError;
use crate::persist::PersistError;
use crate::wallet::WalletError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the café ordering core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Catalog operation failed: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Cart operation declined: {0}")]
    Cart(#[from] CartError),

    #[error("Wallet operation declined: {0}")]
    Wallet(#[from] WalletError),

    #[error("Checkout declined: {0}")]
    Checkout(#[from] CheckoutError),

    #[error("Persistence failed: {0}")]
    Persist(#[from] PersistError),

    #[error("Input validation failed: {0}")]
    Validation(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Persist(PersistError::Serialization(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Persist(PersistError::Io(err))
    }
}
