//! Resident request/response shape and its mapping to the persisted entity.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Resident;

/// Resident data as callers send and receive it
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResidentDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub apartment_number: String,
}

impl From<&Resident> for ResidentDto {
    fn from(resident: &Resident) -> Self {
        Self {
            id: resident.id,
            user_name: resident.user_name.clone(),
            password: None,
            name: resident.name.clone(),
            email: resident.email.clone(),
            phone: resident.phone.clone(),
            apartment_number: resident.apartment_number.clone(),
        }
    }
}

impl ResidentDto {
    /// Build a new, unsaved entity carrying `password_hash`
    pub fn into_entity(self, password_hash: String) -> Resident {
        Resident {
            id: None,
            user_name: self.user_name,
            password: password_hash,
            name: self.name,
            email: self.email,
            phone: self.phone,
            apartment_number: self.apartment_number,
        }
    }

    /// Overwrite the mutable fields of `resident`
    pub fn apply_to(self, resident: &mut Resident, password_hash: Option<String>) {
        resident.user_name = self.user_name;
        resident.name = self.name;
        resident.email = self.email;
        resident.phone = self.phone;
        resident.apartment_number = self.apartment_number;
        if let Some(hash) = password_hash {
            resident.password = hash;
        }
    }

    /// Plaintext password, if one was supplied and is not empty
    pub fn supplied_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}
