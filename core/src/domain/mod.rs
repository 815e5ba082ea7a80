//! Domain layer containing persisted entities, data-transfer objects and
//! the fixed messages returned to callers.

pub mod dto;
pub mod entities;
pub mod messages;

// Re-export commonly used domain types
pub use dto::*;
pub use entities::*;
