//! Main manager service implementation

use std::sync::Arc;

use crate::domain::dto::{CreateManagerResponse, CreatedResponse, ManagerDto};
use crate::domain::messages;
use crate::errors::ManagerError;
use crate::repositories::{ManagerRepository, ResidentRepository};
use crate::services::accounts::username_in_use;
use crate::services::password::PasswordEncoder;

/// Manager service enforcing the single-manager rule
pub struct ManagerService<M, R, P>
where
    M: ManagerRepository,
    R: ResidentRepository,
    P: PasswordEncoder,
{
    /// Manager repository for persistence
    repository: Arc<M>,
    /// Residents share the username namespace with the manager
    residents: Arc<R>,
    /// Hashes passwords before they are stored
    password_encoder: Arc<P>,
}

impl<M, R, P> ManagerService<M, R, P>
where
    M: ManagerRepository,
    R: ResidentRepository,
    P: PasswordEncoder,
{
    /// Create a new manager service
    pub fn new(repository: Arc<M>, residents: Arc<R>, password_encoder: Arc<P>) -> Self {
        Self {
            repository,
            residents,
            password_encoder,
        }
    }

    /// Register the apartment manager
    ///
    /// This method:
    /// 1. Rejects a missing password
    /// 2. Rejects the request if any manager is already stored
    /// 3. Rejects a username a resident already uses
    /// 4. Hashes the password and saves the new record
    ///
    /// # Returns
    ///
    /// * `Ok(CreateManagerResponse)` - Success message and the stored manager, password cleared
    /// * `Err(ManagerError::AlreadyExists)` - A manager is already registered
    /// * `Err(ManagerError::PasswordRequired)` - No password supplied
    /// * `Err(ManagerError::UsernameTaken)` - Another account uses the username
    pub async fn create_manager(
        &self,
        dto: ManagerDto,
    ) -> Result<CreateManagerResponse, ManagerError> {
        let raw_password = dto
            .supplied_password()
            .ok_or(ManagerError::PasswordRequired)?;

        if self.repository.count().await? > 0 {
            tracing::warn!(
                user_name = %dto.user_name,
                event = "manager_already_exists",
                "Rejected registration of a second manager"
            );
            return Err(ManagerError::AlreadyExists);
        }
        self.ensure_username_free(&dto.user_name).await?;

        let password_hash = self.password_encoder.encode(raw_password)?;
        let saved = self.repository.save(dto.into_entity(password_hash)).await?;

        tracing::info!(
            manager_id = ?saved.id,
            event = "manager_registered",
            "Registered apartment manager"
        );

        Ok(CreatedResponse::new(
            messages::MANAGER_STATUS_SUCCESS,
            ManagerDto::from(&saved),
        ))
    }

    /// Overwrite the manager identified by `id` with the fields of `dto`
    ///
    /// A supplied password is re-hashed; an absent one keeps the stored hash.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - `"manager with id:{id} is updated successfully."`
    /// * `Err(ManagerError::NotFound)` - No manager with that id
    /// * `Err(ManagerError::UsernameTaken)` - The new username belongs to another account
    pub async fn update_manager(&self, dto: ManagerDto, id: i32) -> Result<String, ManagerError> {
        let mut manager = self.repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(manager_id = id, event = "manager_not_found", "Manager not found");
            ManagerError::NotFound
        })?;
        if dto.user_name != manager.user_name {
            self.ensure_username_free(&dto.user_name).await?;
        }

        let password_hash = match dto.supplied_password() {
            Some(raw) => Some(self.password_encoder.encode(raw)?),
            None => None,
        };
        dto.apply_to(&mut manager, password_hash);
        self.repository.save(manager).await?;

        tracing::info!(manager_id = id, event = "manager_updated", "Updated manager");
        Ok(messages::manager_updated(id))
    }

    /// The registered manager, or an empty Dto if none exists yet
    pub async fn get_manager(&self) -> Result<ManagerDto, ManagerError> {
        let managers = self.repository.find_all().await?;
        tracing::debug!(count = managers.len(), "Loaded managers");

        Ok(managers.first().map(ManagerDto::from).unwrap_or_default())
    }

    async fn ensure_username_free(&self, user_name: &str) -> Result<(), ManagerError> {
        if username_in_use(self.repository.as_ref(), self.residents.as_ref(), user_name).await? {
            tracing::warn!(
                user_name = %user_name,
                event = "username_taken",
                "Rejected manager username already in use"
            );
            return Err(ManagerError::UsernameTaken);
        }
        Ok(())
    }
}
