//! # Infrastructure Layer
//!
//! Concrete collaborators for the apartment facilities services:
//! - **Memory**: in-memory repositories for managers, residents and facilities
//! - **Password**: bcrypt password encoder
//! - **Logging**: tracing subscriber bootstrap
//!
//! [`FacilitiesBackend`] wires them into ready-to-use services.

use std::sync::Arc;

use af_core::services::{
    AuthService, FacilityService, ManagerService, ResidentService, TokenIssuer,
};
use af_shared::{AppConfig, Environment};

/// Logging module - tracing subscriber initialization
pub mod logging;

/// Memory module - process-local repository implementations
pub mod memory;

/// Password module - password encoder implementations
pub mod password;

pub use logging::init_tracing;
use memory::{InMemoryFacilityRepository, InMemoryManagerRepository, InMemoryResidentRepository};
use password::BcryptPasswordEncoder;

pub type InMemoryManagerService =
    ManagerService<InMemoryManagerRepository, InMemoryResidentRepository, BcryptPasswordEncoder>;
pub type InMemoryResidentService =
    ResidentService<InMemoryResidentRepository, InMemoryManagerRepository, BcryptPasswordEncoder>;
pub type InMemoryFacilityService = FacilityService<InMemoryFacilityRepository>;
pub type InMemoryAuthService<T> = AuthService<
    InMemoryManagerRepository,
    InMemoryResidentRepository,
    BcryptPasswordEncoder,
    T,
>;

/// Service container sharing one set of repositories across all services
pub struct FacilitiesBackend<T: TokenIssuer> {
    pub managers: Arc<InMemoryManagerService>,
    pub residents: Arc<InMemoryResidentService>,
    pub facilities: Arc<InMemoryFacilityService>,
    pub auth: Arc<InMemoryAuthService<T>>,
}

impl<T: TokenIssuer> FacilitiesBackend<T> {
    /// Build every service over fresh in-memory repositories
    pub fn in_memory(config: &AppConfig, token_issuer: T) -> Self {
        let manager_repository = Arc::new(InMemoryManagerRepository::new());
        let resident_repository = Arc::new(InMemoryResidentRepository::new());
        let facility_repository = Arc::new(InMemoryFacilityRepository::new());
        let password_encoder = Arc::new(BcryptPasswordEncoder::new(&config.password));

        tracing::info!(
            environment = %config.environment,
            bcrypt_cost = password_encoder.cost(),
            "Initialized in-memory facilities backend"
        );

        Self {
            managers: Arc::new(ManagerService::new(
                manager_repository.clone(),
                resident_repository.clone(),
                password_encoder.clone(),
            )),
            residents: Arc::new(ResidentService::new(
                resident_repository.clone(),
                manager_repository.clone(),
                password_encoder.clone(),
            )),
            facilities: Arc::new(FacilityService::new(facility_repository)),
            auth: Arc::new(AuthService::new(
                manager_repository,
                resident_repository,
                password_encoder,
                Arc::new(token_issuer),
            )),
        }
    }
}

/// Load application configuration from the environment
///
/// The per-environment file (`.env.development`, `.env.production`, ...) is
/// read first, then `.env`. Neither overrides variables already set.
pub fn load_config() -> Result<AppConfig, InfrastructureError> {
    let environment = Environment::from_env();
    if dotenvy::from_filename(environment.env_file()).is_ok() {
        tracing::debug!(file = environment.env_file(), "Loaded environment file");
    }
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    if config.logging.level.trim().is_empty() {
        return Err(InfrastructureError::Config("LOG_LEVEL must not be empty".to_string()));
    }

    Ok(config)
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Tracing subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}
