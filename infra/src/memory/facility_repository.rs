//! In-memory implementation of the FacilityRepository trait.

use async_trait::async_trait;

use af_core::domain::entities::Facility;
use af_core::errors::RepositoryError;
use af_core::repositories::FacilityRepository;

use super::InMemoryStore;

#[derive(Default)]
pub struct InMemoryFacilityRepository {
    store: InMemoryStore<Facility>,
}

impl InMemoryFacilityRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FacilityRepository for InMemoryFacilityRepository {
    async fn save(&self, facility: Facility) -> Result<Facility, RepositoryError> {
        Ok(self.store.save(facility).await)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Facility>, RepositoryError> {
        Ok(self.store.find_by_id(id).await)
    }

    async fn find_all(&self) -> Result<Vec<Facility>, RepositoryError> {
        Ok(self.store.find_all().await)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), RepositoryError> {
        self.store.delete_by_id(id).await;
        Ok(())
    }
}
