//! Manager request/response shape and its mapping to the persisted entity.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Manager;

/// Manager data as callers send and receive it
///
/// `password` is read on input only. Every Dto built from a [`Manager`]
/// leaves it `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ManagerDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl From<&Manager> for ManagerDto {
    fn from(manager: &Manager) -> Self {
        Self {
            id: manager.id,
            user_name: manager.user_name.clone(),
            password: None,
            role: manager.role.clone(),
            status: manager.status.clone(),
            name: manager.name.clone(),
            phone: manager.phone.clone(),
            email: manager.email.clone(),
        }
    }
}

impl ManagerDto {
    /// Build a new, unsaved entity carrying `password_hash`
    ///
    /// Any id on the Dto is ignored; persistence assigns one on save.
    pub fn into_entity(self, password_hash: String) -> Manager {
        Manager {
            id: None,
            user_name: self.user_name,
            password: password_hash,
            role: self.role,
            status: self.status,
            name: self.name,
            phone: self.phone,
            email: self.email,
        }
    }

    /// Overwrite the mutable fields of `manager`, replacing the stored hash
    /// only when a new one is supplied
    pub fn apply_to(self, manager: &mut Manager, password_hash: Option<String>) {
        manager.user_name = self.user_name;
        manager.role = self.role;
        manager.status = self.status;
        manager.name = self.name;
        manager.phone = self.phone;
        manager.email = self.email;
        if let Some(hash) = password_hash {
            manager.password = hash;
        }
    }

    /// Plaintext password, if one was supplied and is not empty
    pub fn supplied_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}
