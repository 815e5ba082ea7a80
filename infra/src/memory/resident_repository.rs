//! In-memory implementation of the ResidentRepository trait.

use async_trait::async_trait;

use af_core::domain::entities::Resident;
use af_core::errors::RepositoryError;
use af_core::repositories::ResidentRepository;

use super::InMemoryStore;

/// Resident repository held entirely in process memory
#[derive(Default)]
pub struct InMemoryResidentRepository {
    store: InMemoryStore<Resident>,
}

impl InMemoryResidentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResidentRepository for InMemoryResidentRepository {
    async fn save(&self, resident: Resident) -> Result<Resident, RepositoryError> {
        Ok(self.store.save(resident).await)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Resident>, RepositoryError> {
        Ok(self.store.find_by_id(id).await)
    }

    async fn find_all(&self) -> Result<Vec<Resident>, RepositoryError> {
        Ok(self.store.find_all().await)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), RepositoryError> {
        self.store.delete_by_id(id).await;
        Ok(())
    }

    async fn find_by_username(
        &self,
        user_name: &str,
    ) -> Result<Option<Resident>, RepositoryError> {
        Ok(self
            .store
            .find_first(|resident| resident.user_name == user_name)
            .await)
    }
}
