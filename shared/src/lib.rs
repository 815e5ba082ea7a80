//! Shared utilities and common types for the apartment facilities backend
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types
//! - Validation predicates (email, phone, non-blank names)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, LogFormat, LoggingConfig, PasswordConfig};
pub use utils::validation;
