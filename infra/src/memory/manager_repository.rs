//! In-memory implementation of the ManagerRepository trait.

use async_trait::async_trait;

use af_core::domain::entities::Manager;
use af_core::errors::RepositoryError;
use af_core::repositories::ManagerRepository;

use super::InMemoryStore;

/// Manager repository held entirely in process memory
#[derive(Default)]
pub struct InMemoryManagerRepository {
    store: InMemoryStore<Manager>,
}

impl InMemoryManagerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ManagerRepository for InMemoryManagerRepository {
    async fn save(&self, manager: Manager) -> Result<Manager, RepositoryError> {
        Ok(self.store.save(manager).await)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Manager>, RepositoryError> {
        Ok(self.store.find_by_id(id).await)
    }

    async fn find_all(&self) -> Result<Vec<Manager>, RepositoryError> {
        Ok(self.store.find_all().await)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), RepositoryError> {
        self.store.delete_by_id(id).await;
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.store.count().await)
    }

    async fn find_by_username(&self, user_name: &str) -> Result<Option<Manager>, RepositoryError> {
        Ok(self
            .store
            .find_first(|manager| manager.user_name == user_name)
            .await)
    }
}
