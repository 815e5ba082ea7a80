//! Data-transfer objects exchanged with callers.
//!
//! Dtos are distinct from the persisted entities. Mapping from an entity to
//! its Dto always drops the password; mapping from a Dto to an entity takes
//! the already-hashed password as a separate argument.

pub mod auth;
pub mod facility_dto;
pub mod manager_dto;
pub mod resident_dto;
pub mod response;

// Re-export commonly used types
pub use auth::{AuthenticationRequest, AuthenticationResponse, UserDetails, UserRole};
pub use facility_dto::FacilityDto;
pub use manager_dto::ManagerDto;
pub use resident_dto::ResidentDto;
pub use response::{
    CreateFacilityResponse, CreateManagerResponse, CreateResidentResponse, CreatedResponse,
};
