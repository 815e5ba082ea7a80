//! Recording test doubles for the service collaborators

use async_trait::async_trait;
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::entities::{Facility, Identifiable, Manager, Resident};
use crate::errors::{AuthError, PasswordError, RepositoryError};
use crate::repositories::{FacilityRepository, ManagerRepository, ResidentRepository};
use crate::services::auth::TokenIssuer;
use crate::services::password::PasswordEncoder;

/// Vec-backed store that counts writes so tests can assert on them
pub struct MockStore<T> {
    pub records: Mutex<Vec<T>>,
    next_id: AtomicI32,
    save_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    failure: Mutex<Option<RepositoryError>>,
}

impl<T: Identifiable + Clone> MockStore<T> {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
            save_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
            failure: Mutex::new(None),
        }
    }

    /// Seed the store with existing records
    pub fn with_records(records: Vec<T>) -> Self {
        let store = Self::new();
        let max_id = records.iter().filter_map(|r| r.id()).max().unwrap_or(0);
        store.next_id.store(max_id + 1, Ordering::SeqCst);
        *store.records.lock().unwrap() = records;
        store
    }

    /// Make every subsequent call fail with `error`
    pub fn fail_with(&self, error: RepositoryError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn get(&self, id: i32) -> Option<T> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id() == Some(id))
            .cloned()
    }

    fn check(&self) -> Result<(), RepositoryError> {
        match self.failure.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn save_record(&self, mut record: T) -> Result<T, RepositoryError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let mut records = self.records.lock().unwrap();
        match record.id() {
            Some(id) => {
                records.retain(|r| r.id() != Some(id));
            }
            None => {
                record.assign_id(self.next_id.fetch_add(1, Ordering::SeqCst));
            }
        }
        records.push(record.clone());
        Ok(record)
    }

    fn find_record(&self, id: i32) -> Result<Option<T>, RepositoryError> {
        self.check()?;
        Ok(self.get(id))
    }

    fn all_records(&self) -> Result<Vec<T>, RepositoryError> {
        self.check()?;
        let mut records = self.records.lock().unwrap().clone();
        records.sort_by_key(|r| r.id());
        Ok(records)
    }

    fn delete_record(&self, id: i32) -> Result<(), RepositoryError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.records.lock().unwrap().retain(|r| r.id() != Some(id));
        Ok(())
    }

    fn count_records(&self) -> Result<u64, RepositoryError> {
        self.check()?;
        Ok(self.records.lock().unwrap().len() as u64)
    }
}

pub type MockManagerRepository = MockStore<Manager>;
pub type MockResidentRepository = MockStore<Resident>;
pub type MockFacilityRepository = MockStore<Facility>;

#[async_trait]
impl ManagerRepository for MockStore<Manager> {
    async fn save(&self, manager: Manager) -> Result<Manager, RepositoryError> {
        self.save_record(manager)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Manager>, RepositoryError> {
        self.find_record(id)
    }

    async fn find_all(&self) -> Result<Vec<Manager>, RepositoryError> {
        self.all_records()
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), RepositoryError> {
        self.delete_record(id)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        self.count_records()
    }

    async fn find_by_username(&self, user_name: &str) -> Result<Option<Manager>, RepositoryError> {
        Ok(self
            .all_records()?
            .into_iter()
            .find(|m| m.user_name == user_name))
    }
}

#[async_trait]
impl ResidentRepository for MockStore<Resident> {
    async fn save(&self, resident: Resident) -> Result<Resident, RepositoryError> {
        self.save_record(resident)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Resident>, RepositoryError> {
        self.find_record(id)
    }

    async fn find_all(&self) -> Result<Vec<Resident>, RepositoryError> {
        self.all_records()
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), RepositoryError> {
        self.delete_record(id)
    }

    async fn find_by_username(
        &self,
        user_name: &str,
    ) -> Result<Option<Resident>, RepositoryError> {
        Ok(self
            .all_records()?
            .into_iter()
            .find(|r| r.user_name == user_name))
    }
}

#[async_trait]
impl FacilityRepository for MockStore<Facility> {
    async fn save(&self, facility: Facility) -> Result<Facility, RepositoryError> {
        self.save_record(facility)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Facility>, RepositoryError> {
        self.find_record(id)
    }

    async fn find_all(&self) -> Result<Vec<Facility>, RepositoryError> {
        self.all_records()
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), RepositoryError> {
        self.delete_record(id)
    }
}

/// Reversible "hash" so tests can tell what was encoded
pub struct MockPasswordEncoder {
    encode_calls: AtomicUsize,
    pub encoded: Mutex<Vec<String>>,
}

impl MockPasswordEncoder {
    pub fn new() -> Self {
        Self {
            encode_calls: AtomicUsize::new(0),
            encoded: Mutex::new(Vec::new()),
        }
    }

    pub fn encode_calls(&self) -> usize {
        self.encode_calls.load(Ordering::SeqCst)
    }

    pub fn hash_of(raw: &str) -> String {
        format!("encoded:{}", raw)
    }
}

impl PasswordEncoder for MockPasswordEncoder {
    fn encode(&self, raw: &str) -> Result<String, PasswordError> {
        self.encode_calls.fetch_add(1, Ordering::SeqCst);
        self.encoded.lock().unwrap().push(raw.to_string());
        Ok(Self::hash_of(raw))
    }

    fn matches(&self, raw: &str, encoded: &str) -> Result<bool, PasswordError> {
        if !encoded.starts_with("encoded:") {
            return Err(PasswordError::MalformedHash);
        }
        Ok(Self::hash_of(raw) == encoded)
    }
}

pub struct MockTokenIssuer;

impl TokenIssuer for MockTokenIssuer {
    fn issue(&self, username: &str) -> Result<String, AuthError> {
        Ok(format!("token-for-{}", username))
    }
}
