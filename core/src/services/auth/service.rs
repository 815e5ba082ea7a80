//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::dto::{
    AuthenticationRequest, AuthenticationResponse, UserDetails, UserRole,
};
use crate::errors::AuthError;
use crate::repositories::{ManagerRepository, ResidentRepository};
use crate::services::password::PasswordEncoder;

use super::token::TokenIssuer;

/// Stored credentials for one account, never leaves this module
struct StoredCredentials {
    username: String,
    password_hash: String,
    role: UserRole,
}

/// Authentication service verifying manager and resident credentials
pub struct AuthService<M, R, P, T>
where
    M: ManagerRepository,
    R: ResidentRepository,
    P: PasswordEncoder,
    T: TokenIssuer,
{
    managers: Arc<M>,
    residents: Arc<R>,
    password_encoder: Arc<P>,
    token_issuer: Arc<T>,
}

impl<M, R, P, T> AuthService<M, R, P, T>
where
    M: ManagerRepository,
    R: ResidentRepository,
    P: PasswordEncoder,
    T: TokenIssuer,
{
    pub fn new(
        managers: Arc<M>,
        residents: Arc<R>,
        password_encoder: Arc<P>,
        token_issuer: Arc<T>,
    ) -> Self {
        Self {
            managers,
            residents,
            password_encoder,
            token_issuer,
        }
    }

    /// Verify a username/password pair and issue a token for it
    ///
    /// Managers are looked up before residents. Unknown usernames and wrong
    /// passwords produce the same [`AuthError::BadCredentials`].
    pub async fn login(
        &self,
        request: AuthenticationRequest,
    ) -> Result<AuthenticationResponse, AuthError> {
        let Some(credentials) = self.find_credentials(&request.username).await? else {
            tracing::warn!(event = "login_failed", reason = "unknown_user", "Login rejected");
            return Err(AuthError::BadCredentials);
        };

        if !self
            .password_encoder
            .matches(&request.password, &credentials.password_hash)?
        {
            tracing::warn!(
                username = %credentials.username,
                event = "login_failed",
                reason = "bad_password",
                "Login rejected"
            );
            return Err(AuthError::BadCredentials);
        }

        let token = self.token_issuer.issue(&credentials.username)?;

        tracing::info!(
            username = %credentials.username,
            role = ?credentials.role,
            event = "login_succeeded",
            "Issued token"
        );
        Ok(AuthenticationResponse { token })
    }

    /// Account details for `username`, if any account uses it
    pub async fn load_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserDetails>, AuthError> {
        Ok(self
            .find_credentials(username)
            .await?
            .map(|credentials| UserDetails {
                username: credentials.username,
                role: credentials.role,
            }))
    }

    async fn find_credentials(
        &self,
        username: &str,
    ) -> Result<Option<StoredCredentials>, AuthError> {
        if let Some(manager) = self.managers.find_by_username(username).await? {
            return Ok(Some(StoredCredentials {
                username: manager.user_name,
                password_hash: manager.password,
                role: UserRole::Manager,
            }));
        }

        Ok(self
            .residents
            .find_by_username(username)
            .await?
            .map(|resident| StoredCredentials {
                username: resident.user_name,
                password_hash: resident.password,
                role: UserRole::Resident,
            }))
    }
}
