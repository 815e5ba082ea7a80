//! Facility entity representing a shared, bookable apartment facility.

use serde::{Deserialize, Serialize};

use super::Identifiable;

/// Booking status of a facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FacilityStatus {
    /// Free to book
    #[default]
    Available,
    /// Currently booked
    Occupied,
}

impl FacilityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FacilityStatus::Available => "Available",
            FacilityStatus::Occupied => "Occupied",
        }
    }
}

impl std::fmt::Display for FacilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted facility record
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Facility {
    /// Identifier assigned by persistence on creation
    pub id: Option<i32>,

    /// Non-blank display name
    pub name: String,

    pub description: String,

    /// Reference to the facility picture (file name or URL)
    pub picture: String,

    pub status: FacilityStatus,
}

impl Identifiable for Facility {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn assign_id(&mut self, id: i32) {
        self.id = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_facility_defaults_to_available() {
        let facility = Facility::default();
        assert_eq!(facility.status, FacilityStatus::Available);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(FacilityStatus::Occupied.to_string(), "Occupied");
        assert_eq!(FacilityStatus::Available.as_str(), "Available");
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&FacilityStatus::Available).unwrap();
        assert_eq!(json, "\"Available\"");

        let status: FacilityStatus = serde_json::from_str("\"Occupied\"").unwrap();
        assert_eq!(status, FacilityStatus::Occupied);
    }
}
