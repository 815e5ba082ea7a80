//! Password-hashing collaborator

use crate::errors::PasswordError;

/// One-way password hashing used before any credential is persisted
pub trait PasswordEncoder: Send + Sync {
    /// Hash a plaintext password for storage
    fn encode(&self, raw: &str) -> Result<String, PasswordError>;

    /// Check a plaintext password against a stored hash
    fn matches(&self, raw: &str, encoded: &str) -> Result<bool, PasswordError>;
}
