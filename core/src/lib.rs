//! # Apartment Facilities Core
//!
//! Core business logic and domain layer for the apartment facilities backend.
//! This crate contains domain entities, data-transfer objects, business services,
//! repository interfaces and error types. Persistence, password hashing and token
//! issuance are reached only through the traits defined here.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::dto::*;
pub use domain::entities::{Facility, FacilityStatus, Identifiable, Manager, Resident};
pub use errors::*;
pub use repositories::*;
pub use services::{
    AuthService, FacilityService, ManagerService, PasswordEncoder, ResidentService, TokenIssuer,
};
