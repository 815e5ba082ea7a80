//! Token issuance seam

use crate::errors::AuthError;

/// Issues the opaque session token handed back after a successful login
///
/// The token is keyed by username only; signing and verification belong
/// to the implementation.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, username: &str) -> Result<String, AuthError>;
}
