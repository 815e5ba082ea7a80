//! Domain entities as the persistence collaborator stores them.

pub mod facility;
pub mod manager;
pub mod resident;

// Re-export commonly used types
pub use facility::{Facility, FacilityStatus};
pub use manager::Manager;
pub use resident::Resident;

/// Records whose integer identity is assigned by persistence on first save
pub trait Identifiable {
    /// Identifier, `None` until the record has been saved
    fn id(&self) -> Option<i32>;

    /// Set the identifier chosen by the persistence layer
    fn assign_id(&mut self, id: i32);
}
