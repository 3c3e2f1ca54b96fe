use thiserror::Error;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, PersistError>;

/// Errors from the persistence collaborator. The store logs and swallows
/// these; they never reach its callers.
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("Snapshot write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
