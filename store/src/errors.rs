use thiserror::Error;

/// Error type for store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Record missing, or owned by a different user.
    #[error("not found: {0}")]
    NotFound(String),

    /// Uniqueness violation (duplicate email).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Error occurred during a store operation
    #[error("storage error: {0}")]
    Storage(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
