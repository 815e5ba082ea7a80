//! Generic id-keyed record store

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use af_core::domain::entities::Identifiable;

/// Ordered map of records keyed by persistence-assigned id
///
/// Ids start at 1 and are never reused, even after a delete.
pub struct InMemoryStore<T> {
    records: Arc<RwLock<BTreeMap<i32, T>>>,
    next_id: AtomicI32,
}

impl<T> InMemoryStore<T>
where
    T: Identifiable + Clone + Send + Sync,
{
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: AtomicI32::new(1),
        }
    }

    /// Insert a new record or replace the one with the same id
    pub async fn save(&self, mut record: T) -> T {
        let mut records = self.records.write().await;

        let id = match record.id() {
            Some(id) => {
                // Explicit ids must not collide with ids handed out later
                self.next_id.fetch_max(id.saturating_add(1), Ordering::SeqCst);
                id
            }
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                record.assign_id(id);
                id
            }
        };

        records.insert(id, record.clone());
        record
    }

    pub async fn find_by_id(&self, id: i32) -> Option<T> {
        self.records.read().await.get(&id).cloned()
    }

    /// All records in ascending id order
    pub async fn find_all(&self) -> Vec<T> {
        self.records.read().await.values().cloned().collect()
    }

    /// First record, in id order, satisfying `predicate`
    pub async fn find_first<F>(&self, predicate: F) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        self.records
            .read()
            .await
            .values()
            .find(|record| predicate(record))
            .cloned()
    }

    /// Remove a record, returning whether one was present
    pub async fn delete_by_id(&self, id: i32) -> bool {
        self.records.write().await.remove(&id).is_some()
    }

    pub async fn count(&self) -> u64 {
        self.records.read().await.len() as u64
    }
}

impl<T> Default for InMemoryStore<T>
where
    T: Identifiable + Clone + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}
