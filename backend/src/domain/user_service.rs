//! User registration and listing services.
//!
//! Registration is find-or-create: an existing username resolves to its
//! stored user, and a registration that loses a concurrent uniqueness race
//! re-reads the winning record instead of failing.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{UserRepository, UserRepositoryError, UsersCommand, UsersQuery};
use crate::domain::{Error, UserId, UserSummary, Username};

/// Map repository failures onto domain errors.
///
/// Every persistence failure surfaces as an internal error carrying the
/// adapter's message.
pub(crate) fn map_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => {
            Error::internal(format!("user repository unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserRepositoryError::DuplicateUsername { username } => {
            Error::internal(format!("unexpected username conflict: {username}"))
        }
    }
}

/// User service implementing [`UsersCommand`] and [`UsersQuery`].
#[derive(Clone)]
pub struct UserService<R> {
    repo: Arc<R>,
}

impl<R> UserService<R> {
    /// Create a new service over the given repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    async fn find_existing(&self, username: &Username) -> Result<Option<UserSummary>, Error> {
        self.repo
            .find_by_username(username)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, username: Username) -> Result<UserSummary, Error> {
        if let Some(existing) = self.find_existing(&username).await? {
            debug!(user_id = %existing.id(), "username already registered");
            return Ok(existing);
        }

        let user = UserSummary::new(UserId::random(), username);
        match self.repo.insert(&user).await {
            Ok(()) => {
                info!(user_id = %user.id(), "registered user");
                Ok(user)
            }
            Err(err @ UserRepositoryError::DuplicateUsername { .. }) => {
                debug!("username registered concurrently; re-reading");
                match self.find_existing(user.username()).await? {
                    Some(existing) => Ok(existing),
                    None => Err(map_repository_error(err)),
                }
            }
            Err(err) => Err(map_repository_error(err)),
        }
    }
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<UserSummary>, Error> {
        self.repo
            .list_summaries()
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
