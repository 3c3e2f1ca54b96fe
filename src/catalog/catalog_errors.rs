use thiserror::Error;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors for catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid menu item: {0}")]
    Validation(String),

    #[error("Menu item not found: {0}")]
    NotFound(String),
}
