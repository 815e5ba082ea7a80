//! In-memory persistence
//!
//! Process-local repository implementations backed by a shared ordered map.
//! Records live as long as the owning [`InMemoryStore`].

pub mod facility_repository;
pub mod manager_repository;
pub mod resident_repository;
mod store;

pub use facility_repository::InMemoryFacilityRepository;
pub use manager_repository::InMemoryManagerRepository;
pub use resident_repository::InMemoryResidentRepository;
pub use store::InMemoryStore;
