//! Resident repository trait defining the interface for resident persistence.

use async_trait::async_trait;

use crate::domain::entities::Resident;
use crate::errors::RepositoryError;

/// Repository trait for Resident entity persistence operations
#[async_trait]
pub trait ResidentRepository: Send + Sync {
    /// Insert or replace a resident, assigning an id if it has none
    async fn save(&self, resident: Resident) -> Result<Resident, RepositoryError>;

    /// Find a resident by identifier
    async fn find_by_id(&self, id: i32) -> Result<Option<Resident>, RepositoryError>;

    /// All stored residents, in id order
    async fn find_all(&self) -> Result<Vec<Resident>, RepositoryError>;

    /// Remove a resident; removing an unknown id is not an error
    async fn delete_by_id(&self, id: i32) -> Result<(), RepositoryError>;

    /// Find a resident by login name
    async fn find_by_username(&self, user_name: &str)
        -> Result<Option<Resident>, RepositoryError>;
}
