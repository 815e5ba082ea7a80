//! Main facility service implementation

use std::sync::Arc;

use af_shared::validation;

use crate::domain::dto::{CreateFacilityResponse, CreatedResponse, FacilityDto};
use crate::domain::entities::{Facility, FacilityStatus};
use crate::domain::messages;
use crate::errors::FacilityError;
use crate::repositories::FacilityRepository;

/// Reject empty or whitespace-only facility names
pub fn validate_name(name: &str) -> Result<(), FacilityError> {
    if validation::is_not_blank(name) {
        Ok(())
    } else {
        Err(FacilityError::InvalidName)
    }
}

/// Facility service for the facility lifecycle and booking status
pub struct FacilityService<R>
where
    R: FacilityRepository,
{
    repository: Arc<R>,
}

impl<R> FacilityService<R>
where
    R: FacilityRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Register a facility
    ///
    /// A request without a status creates the facility as Available.
    pub async fn create_facility(
        &self,
        dto: FacilityDto,
    ) -> Result<CreateFacilityResponse, FacilityError> {
        if let Err(err) = validate_name(&dto.name) {
            tracing::warn!(event = "facility_validation_failed", "Rejected facility without a name");
            return Err(err);
        }

        let saved = self.repository.save(dto.into_entity()).await?;

        tracing::info!(
            facility_id = ?saved.id,
            status = %saved.status,
            event = "facility_registered",
            "Registered facility"
        );

        Ok(CreatedResponse::new(
            messages::FACILITY_STATUS_SUCCESS,
            FacilityDto::from(&saved),
        ))
    }

    /// Overwrite the facility identified by `id` with the fields of `dto`
    pub async fn update_facility(&self, dto: FacilityDto, id: i32) -> Result<String, FacilityError> {
        let mut facility = self.load(id).await?;
        validate_name(&dto.name)?;

        dto.apply_to(&mut facility);
        self.repository.save(facility).await?;

        tracing::info!(facility_id = id, event = "facility_updated", "Updated facility");
        Ok(messages::facility_updated(id))
    }

    /// Delete the facility identified by `id`
    pub async fn delete_facility(&self, id: i32) -> Result<String, FacilityError> {
        self.load(id).await?;
        self.repository.delete_by_id(id).await?;

        tracing::info!(facility_id = id, event = "facility_deleted", "Deleted facility");
        Ok(messages::facility_deleted(id))
    }

    pub async fn get_all_facility(&self) -> Result<Vec<FacilityDto>, FacilityError> {
        let facilities = self.repository.find_all().await?;
        tracing::debug!(count = facilities.len(), "Loaded facilities");

        Ok(facilities.iter().map(FacilityDto::from).collect())
    }

    pub async fn get_facility_by_id(&self, id: i32) -> Result<FacilityDto, FacilityError> {
        let facility = self.load(id).await?;
        Ok(FacilityDto::from(&facility))
    }

    /// Release an occupied facility
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - `"Facility with id:{id} is available now."`
    /// * `Err(FacilityError::NotFound)` - No facility with that id
    /// * `Err(FacilityError::AlreadyAvailable)` - Facility was not occupied
    pub async fn change_status_to_available(&self, id: i32) -> Result<String, FacilityError> {
        self.transition(id, FacilityStatus::Available).await?;
        Ok(messages::facility_available(id))
    }

    /// Book an available facility
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - `"Facility with id:{id} is occupied now."`
    /// * `Err(FacilityError::NotFound)` - No facility with that id
    /// * `Err(FacilityError::AlreadyOccupied)` - Facility was already booked
    pub async fn change_status_to_occupied(&self, id: i32) -> Result<String, FacilityError> {
        self.transition(id, FacilityStatus::Occupied).await?;
        Ok(messages::facility_occupied(id))
    }

    async fn transition(&self, id: i32, target: FacilityStatus) -> Result<Facility, FacilityError> {
        let mut facility = self.load(id).await?;

        if facility.status == target {
            tracing::warn!(
                facility_id = id,
                status = %target,
                event = "facility_status_unchanged",
                "Facility already in requested status"
            );
            return Err(match target {
                FacilityStatus::Available => FacilityError::AlreadyAvailable,
                FacilityStatus::Occupied => FacilityError::AlreadyOccupied,
            });
        }

        facility.status = target;
        let saved = self.repository.save(facility).await?;

        tracing::info!(
            facility_id = id,
            status = %target,
            event = "facility_status_changed",
            "Changed facility status"
        );
        Ok(saved)
    }

    async fn load(&self, id: i32) -> Result<Facility, FacilityError> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(facility_id = id, event = "facility_not_found", "Facility not found");
            FacilityError::NotFound
        })
    }
}
