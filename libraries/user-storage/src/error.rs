/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// A thread panicked while holding the store lock
    #[error("Store lock poisoned")]
    LockPoisoned,
}

impl From<StorageError> for user_core::UserError {
    fn from(err: StorageError) -> Self {
        user_core::UserError::storage(err.to_string())
    }
}
