//! Password hashing configuration

use serde::{Deserialize, Deserializer, Serialize};

/// Lowest work factor bcrypt accepts
pub const MIN_BCRYPT_COST: u32 = 4;
/// Highest work factor bcrypt accepts
pub const MAX_BCRYPT_COST: u32 = 31;

/// Password hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasswordConfig {
    /// bcrypt work factor
    #[serde(default = "default_bcrypt_cost", deserialize_with = "deserialize_cost")]
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

impl PasswordConfig {
    /// Create a configuration with the given cost, clamped to bcrypt's range
    pub fn new(bcrypt_cost: u32) -> Self {
        Self {
            bcrypt_cost: bcrypt_cost.clamp(MIN_BCRYPT_COST, MAX_BCRYPT_COST),
        }
    }

    /// Production preset
    pub fn production() -> Self {
        Self::new(12)
    }

    /// Apply the `BCRYPT_COST` override, ignoring unparsable values
    pub fn with_env_overrides(self) -> Self {
        std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|cost| cost.parse().ok())
            .map(Self::new)
            .unwrap_or(self)
    }
}

fn default_bcrypt_cost() -> u32 {
    10
}

fn deserialize_cost<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let cost = u32::deserialize(deserializer)?;
    Ok(cost.clamp(MIN_BCRYPT_COST, MAX_BCRYPT_COST))
}
