//! Facility request/response shape and its mapping to the persisted entity.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Facility, FacilityStatus};

/// Facility data as callers send and receive it
///
/// On input a missing `status` means "use the default" (Available on
/// creation, unchanged on update). On output it is always present.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FacilityDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub picture: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<FacilityStatus>,
}

impl From<&Facility> for FacilityDto {
    fn from(facility: &Facility) -> Self {
        Self {
            id: facility.id,
            name: facility.name.clone(),
            description: facility.description.clone(),
            picture: facility.picture.clone(),
            status: Some(facility.status),
        }
    }
}

impl FacilityDto {
    /// Build a new, unsaved entity
    pub fn into_entity(self) -> Facility {
        Facility {
            id: None,
            name: self.name,
            description: self.description,
            picture: self.picture,
            status: self.status.unwrap_or_default(),
        }
    }

    /// Overwrite the mutable fields of `facility`
    pub fn apply_to(self, facility: &mut Facility) {
        facility.name = self.name;
        facility.description = self.description;
        facility.picture = self.picture;
        if let Some(status) = self.status {
            facility.status = status;
        }
    }
}
