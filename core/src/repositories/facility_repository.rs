use async_trait::async_trait;

use crate::domain::entities::Facility;
use crate::errors::RepositoryError;

/// Repository trait for Facility entity persistence operations
#[async_trait]
pub trait FacilityRepository: Send + Sync {
    async fn save(&self, facility: Facility) -> Result<Facility, RepositoryError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Facility>, RepositoryError>;

    async fn find_all(&self) -> Result<Vec<Facility>, RepositoryError>;

    async fn delete_by_id(&self, id: i32) -> Result<(), RepositoryError>;
}
