//! Resident entity representing a registered apartment resident.

use super::Identifiable;

/// Persisted resident record
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Resident {
    /// Identifier assigned by persistence on creation
    pub id: Option<i32>,

    pub user_name: String,

    /// Hashed password
    pub password: String,

    pub name: String,

    /// Contact email, validated before every write
    pub email: String,

    /// Contact phone, validated before every write
    pub phone: String,

    /// Apartment the resident lives in
    pub apartment_number: String,
}

impl Identifiable for Resident {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn assign_id(&mut self, id: i32) {
        self.id = Some(id);
    }
}
