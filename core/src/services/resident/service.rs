//! Main resident service implementation

use std::sync::Arc;

use af_shared::validation;

use crate::domain::dto::{CreateResidentResponse, CreatedResponse, ResidentDto};
use crate::domain::entities::Resident;
use crate::domain::messages;
use crate::errors::ResidentError;
use crate::repositories::{ManagerRepository, ResidentRepository};
use crate::services::accounts::username_in_use;
use crate::services::password::PasswordEncoder;

/// Check the email and phone shape of a resident request
///
/// Email is checked first, so a request with both fields wrong reports
/// [`ResidentError::InvalidEmail`].
pub fn validate_contact(dto: &ResidentDto) -> Result<(), ResidentError> {
    if !validation::is_valid_email(&dto.email) {
        return Err(ResidentError::InvalidEmail);
    }
    if !validation::is_valid_phone(&dto.phone) {
        return Err(ResidentError::InvalidPhone);
    }
    Ok(())
}

/// Resident service for registration and maintenance of resident records
pub struct ResidentService<R, M, P>
where
    R: ResidentRepository,
    M: ManagerRepository,
    P: PasswordEncoder,
{
    repository: Arc<R>,
    /// Consulted so a resident never takes the manager's username
    managers: Arc<M>,
    password_encoder: Arc<P>,
}

impl<R, M, P> ResidentService<R, M, P>
where
    R: ResidentRepository,
    M: ManagerRepository,
    P: PasswordEncoder,
{
    /// Create a new resident service
    pub fn new(repository: Arc<R>, managers: Arc<M>, password_encoder: Arc<P>) -> Self {
        Self {
            repository,
            managers,
            password_encoder,
        }
    }

    /// Register a resident
    ///
    /// Email and phone are validated before the repository or the encoder
    /// is touched.
    ///
    /// # Returns
    ///
    /// * `Ok(CreateResidentResponse)` - Success message and the stored resident, password cleared
    /// * `Err(ResidentError::InvalidEmail | InvalidPhone)` - Contact details have the wrong shape
    /// * `Err(ResidentError::PasswordRequired)` - No password supplied
    /// * `Err(ResidentError::UsernameTaken)` - A manager or resident already uses the username
    pub async fn create_resident(
        &self,
        dto: ResidentDto,
    ) -> Result<CreateResidentResponse, ResidentError> {
        if let Err(err) = validate_contact(&dto) {
            tracing::warn!(
                user_name = %dto.user_name,
                error = %err,
                event = "resident_validation_failed",
                "Rejected resident registration"
            );
            return Err(err);
        }
        let raw_password = dto
            .supplied_password()
            .ok_or(ResidentError::PasswordRequired)?;
        self.ensure_username_free(&dto.user_name).await?;

        let password_hash = self.password_encoder.encode(raw_password)?;
        let saved = self.repository.save(dto.into_entity(password_hash)).await?;

        tracing::info!(
            resident_id = ?saved.id,
            event = "resident_registered",
            "Registered resident"
        );

        Ok(CreatedResponse::new(
            messages::RESIDENT_STATUS_SUCCESS,
            ResidentDto::from(&saved),
        ))
    }

    /// Overwrite the resident identified by `id` with the fields of `dto`
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - `"resident with id:{id} is updated successfully."`
    /// * `Err(ResidentError::NotFound)` - No resident with that id
    /// * `Err(ResidentError::InvalidEmail | InvalidPhone)` - New contact details have the wrong shape
    /// * `Err(ResidentError::UsernameTaken)` - The new username belongs to another account
    pub async fn update_resident(
        &self,
        dto: ResidentDto,
        id: i32,
    ) -> Result<String, ResidentError> {
        let mut resident = self.load(id).await?;
        validate_contact(&dto)?;
        if dto.user_name != resident.user_name {
            self.ensure_username_free(&dto.user_name).await?;
        }

        let password_hash = match dto.supplied_password() {
            Some(raw) => Some(self.password_encoder.encode(raw)?),
            None => None,
        };
        dto.apply_to(&mut resident, password_hash);
        self.repository.save(resident).await?;

        tracing::info!(resident_id = id, event = "resident_updated", "Updated resident");
        Ok(messages::resident_updated(id))
    }

    /// Delete the resident identified by `id`
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - `"resident with id:{id} is deleted successfully."`
    /// * `Err(ResidentError::NotFound)` - No resident with that id; nothing is deleted
    pub async fn delete_resident(&self, id: i32) -> Result<String, ResidentError> {
        self.load(id).await?;
        self.repository.delete_by_id(id).await?;

        tracing::info!(resident_id = id, event = "resident_deleted", "Deleted resident");
        Ok(messages::resident_deleted(id))
    }

    /// Every stored resident, passwords cleared
    pub async fn get_all_resident(&self) -> Result<Vec<ResidentDto>, ResidentError> {
        let residents = self.repository.find_all().await?;
        tracing::debug!(count = residents.len(), "Loaded residents");

        Ok(residents.iter().map(ResidentDto::from).collect())
    }

    /// The resident identified by `id`, password cleared
    pub async fn get_resident_by_id(&self, id: i32) -> Result<ResidentDto, ResidentError> {
        let resident = self.load(id).await?;
        Ok(ResidentDto::from(&resident))
    }

    async fn load(&self, id: i32) -> Result<Resident, ResidentError> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(resident_id = id, event = "resident_not_found", "Resident not found");
            ResidentError::NotFound
        })
    }

    async fn ensure_username_free(&self, user_name: &str) -> Result<(), ResidentError> {
        if username_in_use(self.managers.as_ref(), self.repository.as_ref(), user_name).await? {
            tracing::warn!(
                user_name = %user_name,
                event = "username_taken",
                "Rejected resident username already in use"
            );
            return Err(ResidentError::UsernameTaken);
        }
        Ok(())
    }
}
