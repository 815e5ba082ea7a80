//! bcrypt-backed implementation of the PasswordEncoder trait.

use af_core::errors::PasswordError;
use af_core::services::PasswordEncoder;
use af_shared::PasswordConfig;

/// Salted bcrypt hashing with a configurable work factor
#[derive(Debug, Clone)]
pub struct BcryptPasswordEncoder {
    cost: u32,
}

impl BcryptPasswordEncoder {
    /// Create an encoder using the cost from `config`
    pub fn new(config: &PasswordConfig) -> Self {
        Self {
            cost: config.bcrypt_cost,
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordEncoder {
    fn default() -> Self {
        Self::new(&PasswordConfig::default())
    }
}

impl PasswordEncoder for BcryptPasswordEncoder {
    fn encode(&self, raw: &str) -> Result<String, PasswordError> {
        bcrypt::hash(raw, self.cost).map_err(|e| {
            tracing::error!(error = %e, event = "password_hashing_failed", "bcrypt hashing failed");
            PasswordError::Hashing {
                message: e.to_string(),
            }
        })
    }

    fn matches(&self, raw: &str, encoded: &str) -> Result<bool, PasswordError> {
        bcrypt::verify(raw, encoded).map_err(|e| {
            tracing::warn!(error = %e, event = "password_hash_rejected", "Stored hash could not be verified");
            PasswordError::MalformedHash
        })
    }
}
