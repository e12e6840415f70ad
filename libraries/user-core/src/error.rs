/// Core error types for the User API
use crate::types::UserId;
use thiserror::Error;

/// Result type alias using `UserError`
pub type Result<T> = std::result::Result<T, UserError>;

/// Core error type for user operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    /// `name` missing or blank
    #[error("Name is required")]
    NameRequired,

    /// `email` missing or blank
    #[error("Email is required")]
    EmailRequired,

    /// A field was present but not a JSON string
    #[error("Field '{field}' must be a string")]
    InvalidFieldType {
        /// Offending field name
        field: &'static str,
    },

    /// `email` does not contain `@`
    #[error("Invalid email format")]
    InvalidEmail,

    /// Request body could not be decoded
    #[error("{0}")]
    InvalidBody(String),

    /// Another record already uses this email
    #[error("Email already exists")]
    EmailExists,

    /// No record with this ID
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// Store failure (e.g. poisoned lock)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl UserError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// True for errors caused by malformed client input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::NameRequired
                | Self::EmailRequired
                | Self::InvalidFieldType { .. }
                | Self::InvalidEmail
                | Self::InvalidBody(_)
        )
    }
}
