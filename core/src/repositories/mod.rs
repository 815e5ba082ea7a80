//! Repository interfaces for the persistence collaborator.
//!
//! One trait per entity. Implementations live in the infrastructure crate;
//! services depend only on these traits.

pub mod facility_repository;
pub mod manager_repository;
pub mod resident_repository;

pub use facility_repository::FacilityRepository;
pub use manager_repository::ManagerRepository;
pub use resident_repository::ResidentRepository;
