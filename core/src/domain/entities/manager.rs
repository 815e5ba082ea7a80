//! Manager entity representing the single administrator of the apartment.

use super::Identifiable;

/// Persisted manager record
///
/// At most one manager exists at any time. The `password` field always
/// holds a hash produced by the password encoder, never plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Manager {
    /// Identifier assigned by persistence on creation
    pub id: Option<i32>,

    /// Login name, unique across the system
    pub user_name: String,

    /// Hashed password
    pub password: String,

    /// Role label (e.g. "Manager")
    pub role: String,

    /// Account status label (e.g. "Active")
    pub status: String,

    /// Display name
    pub name: String,

    pub phone: String,

    pub email: String,
}

impl Identifiable for Manager {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn assign_id(&mut self, id: i32) {
        self.id = Some(id);
    }
}
