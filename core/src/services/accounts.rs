//! Username lookups shared by the manager and resident services

use crate::errors::RepositoryError;
use crate::repositories::{ManagerRepository, ResidentRepository};

/// Check whether any manager or resident already logs in as `user_name`
///
/// Usernames share one namespace across both account kinds, since login
/// resolves a username against managers first and then residents.
pub(crate) async fn username_in_use<M, R>(
    managers: &M,
    residents: &R,
    user_name: &str,
) -> Result<bool, RepositoryError>
where
    M: ManagerRepository + ?Sized,
    R: ResidentRepository + ?Sized,
{
    if managers.find_by_username(user_name).await?.is_some() {
        return Ok(true);
    }
    Ok(residents.find_by_username(user_name).await?.is_some())
}
