//! Configuration module with business-specific sub-modules
//!
//! - `environment` - Environment detection and logging configuration
//! - `password` - Password hashing configuration

pub mod environment;
pub mod password;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use password::PasswordConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Password hashing configuration
    #[serde(default)]
    pub password: PasswordConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            password: PasswordConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            password: PasswordConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            password: PasswordConfig::production(),
            logging: LoggingConfig::for_environment(Environment::Production),
        }
    }

    /// Load configuration from environment
    ///
    /// Starts from the preset matching `ENVIRONMENT` and applies
    /// `BCRYPT_COST`, `LOG_LEVEL` and `LOG_FORMAT` overrides on top.
    pub fn from_env() -> Self {
        let env = Environment::from_env();
        let mut config = match env {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
            Environment::Staging => {
                let mut config = Self::development();
                config.environment = Environment::Staging;
                config.logging = LoggingConfig::for_environment(Environment::Staging);
                config
            }
        };
        config.password = config.password.with_env_overrides();
        config.logging = config.logging.with_env_overrides();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_preset_uses_stronger_hashing() {
        let dev = AppConfig::development();
        let prod = AppConfig::production();

        assert!(prod.password.bcrypt_cost > dev.password.bcrypt_cost);
        assert!(prod.environment.is_production());
        assert_eq!(prod.logging.level, "warn");
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"environment":"staging"}"#).unwrap();

        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.password.bcrypt_cost, PasswordConfig::default().bcrypt_cost);
    }
}
