//! Business services containing domain logic and use cases.
//!
//! Services hold no mutable state of their own. Every call reads from and
//! writes to its repository, so consistency of a find-then-save sequence is
//! whatever the repository implementation provides.

mod accounts;
pub mod auth;
pub mod facility;
pub mod manager;
pub mod password;
pub mod resident;

#[cfg(test)]
pub(crate) mod mocks;

// Re-export commonly used types
pub use auth::{AuthService, TokenIssuer};
pub use facility::FacilityService;
pub use manager::ManagerService;
pub use password::PasswordEncoder;
pub use resident::ResidentService;
