//! Domain-specific error types and error handling.
//!
//! Each service owns one error enum. Collaborator failures ([`RepositoryError`],
//! [`PasswordError`]) pass through those enums untouched so the caller sees
//! the original cause.

mod types;

pub use types::{AuthError, FacilityError, ManagerError, ResidentError};

use thiserror::Error;

/// Failure reported by a persistence collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Storage unavailable: {message}")]
    Unavailable { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl RepositoryError {
    pub fn storage(message: impl Into<String>) -> Self {
        RepositoryError::Storage {
            message: message.into(),
        }
    }
}

/// Failure reported by the password-hashing collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password hashing failed: {message}")]
    Hashing { message: String },

    #[error("Stored password hash is malformed")]
    MalformedHash,
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
