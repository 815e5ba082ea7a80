//! Manager repository trait defining the interface for manager persistence.

use async_trait::async_trait;

use crate::domain::entities::Manager;
use crate::errors::RepositoryError;

/// Repository trait for Manager entity persistence operations
///
/// Implementations own every stored record; callers receive clones and
/// must `save` to make a change visible.
#[async_trait]
pub trait ManagerRepository: Send + Sync {
    /// Insert or replace a manager
    ///
    /// # Returns
    /// * `Ok(Manager)` - The stored record, with an id assigned if it had none
    /// * `Err(RepositoryError)` - Storage failure
    async fn save(&self, manager: Manager) -> Result<Manager, RepositoryError>;

    /// Find a manager by identifier
    ///
    /// # Returns
    /// * `Ok(Some(Manager))` - Manager found
    /// * `Ok(None)` - No manager with the given id
    /// * `Err(RepositoryError)` - Storage failure
    async fn find_by_id(&self, id: i32) -> Result<Option<Manager>, RepositoryError>;

    /// All stored managers, in id order
    async fn find_all(&self) -> Result<Vec<Manager>, RepositoryError>;

    /// Remove a manager; removing an unknown id is not an error
    async fn delete_by_id(&self, id: i32) -> Result<(), RepositoryError>;

    /// Number of stored managers
    async fn count(&self) -> Result<u64, RepositoryError>;

    /// Find a manager by login name
    async fn find_by_username(&self, user_name: &str) -> Result<Option<Manager>, RepositoryError>;
}
