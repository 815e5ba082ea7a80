//! Response wrapper returned by registration operations.

use serde::{Deserialize, Serialize};

use super::{FacilityDto, ManagerDto, ResidentDto};

/// Pairs a human-readable status message with the persisted record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResponse<T> {
    pub message: String,
    pub dto: T,
}

impl<T> CreatedResponse<T> {
    pub fn new(message: impl Into<String>, dto: T) -> Self {
        Self {
            message: message.into(),
            dto,
        }
    }
}

pub type CreateManagerResponse = CreatedResponse<ManagerDto>;
pub type CreateResidentResponse = CreatedResponse<ResidentDto>;
pub type CreateFacilityResponse = CreatedResponse<FacilityDto>;
