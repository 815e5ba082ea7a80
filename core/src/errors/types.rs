//! Per-service error enums
//!
//! Display strings are the fixed constants from [`crate::domain::messages`];
//! `code()` gives the outer layer a stable identifier to map to a status.

use thiserror::Error;

use super::{PasswordError, RepositoryError};
use crate::domain::messages;

/// Manager registration and update failures
#[derive(Error, Debug)]
pub enum ManagerError {
    #[error("{}", messages::MANAGER_ALREADY_EXISTS)]
    AlreadyExists,

    #[error("{}", messages::MANAGER_NOT_FOUND)]
    NotFound,

    #[error("{}", messages::PASSWORD_REQUIRED)]
    PasswordRequired,

    #[error("{}", messages::USERNAME_TAKEN)]
    UsernameTaken,

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Password(#[from] PasswordError),
}

impl ManagerError {
    pub fn code(&self) -> &'static str {
        match self {
            ManagerError::AlreadyExists => "MANAGER_ALREADY_EXISTS",
            ManagerError::NotFound => "MANAGER_NOT_FOUND",
            ManagerError::PasswordRequired => "PASSWORD_REQUIRED",
            ManagerError::UsernameTaken => "USERNAME_TAKEN",
            ManagerError::Repository(_) => "REPOSITORY_FAILURE",
            ManagerError::Password(_) => "PASSWORD_HASHING_FAILURE",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ManagerError::NotFound)
    }
}

/// Resident registration, update, delete and lookup failures
#[derive(Error, Debug)]
pub enum ResidentError {
    #[error("{}", messages::RESIDENT_NOT_FOUND)]
    NotFound,

    #[error("{}", messages::INVALID_EMAIL)]
    InvalidEmail,

    #[error("{}", messages::INVALID_PHONE)]
    InvalidPhone,

    #[error("{}", messages::PASSWORD_REQUIRED)]
    PasswordRequired,

    #[error("{}", messages::USERNAME_TAKEN)]
    UsernameTaken,

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Password(#[from] PasswordError),
}

impl ResidentError {
    pub fn code(&self) -> &'static str {
        match self {
            ResidentError::NotFound => "RESIDENT_NOT_FOUND",
            ResidentError::InvalidEmail => "INVALID_EMAIL",
            ResidentError::InvalidPhone => "INVALID_PHONE",
            ResidentError::PasswordRequired => "PASSWORD_REQUIRED",
            ResidentError::UsernameTaken => "USERNAME_TAKEN",
            ResidentError::Repository(_) => "REPOSITORY_FAILURE",
            ResidentError::Password(_) => "PASSWORD_HASHING_FAILURE",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ResidentError::NotFound)
    }
}

/// Facility lifecycle and status transition failures
#[derive(Error, Debug)]
pub enum FacilityError {
    #[error("{}", messages::FACILITY_NOT_FOUND)]
    NotFound,

    #[error("{}", messages::INVALID_FACILITY_NAME)]
    InvalidName,

    #[error("{}", messages::FACILITY_ALREADY_AVAILABLE)]
    AlreadyAvailable,

    #[error("{}", messages::FACILITY_ALREADY_OCCUPIED)]
    AlreadyOccupied,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl FacilityError {
    pub fn code(&self) -> &'static str {
        match self {
            FacilityError::NotFound => "FACILITY_NOT_FOUND",
            FacilityError::InvalidName => "INVALID_FACILITY_NAME",
            FacilityError::AlreadyAvailable => "FACILITY_ALREADY_AVAILABLE",
            FacilityError::AlreadyOccupied => "FACILITY_ALREADY_OCCUPIED",
            FacilityError::Repository(_) => "REPOSITORY_FAILURE",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FacilityError::NotFound)
    }
}

/// Login failures
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("{}", messages::BAD_CREDENTIALS)]
    BadCredentials,

    #[error("Token issuance failed: {message}")]
    TokenIssuance { message: String },

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Password(#[from] PasswordError),
}

impl AuthError {
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::BadCredentials => "BAD_CREDENTIALS",
            AuthError::TokenIssuance { .. } => "TOKEN_ISSUANCE_FAILURE",
            AuthError::Repository(_) => "REPOSITORY_FAILURE",
            AuthError::Password(_) => "PASSWORD_HASHING_FAILURE",
        }
    }
}
