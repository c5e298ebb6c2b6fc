//! Driven port for user and exercise log persistence.

use async_trait::async_trait;

use crate::domain::{Exercise, User, UserId, UserSummary, Username};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// Another user already holds the username.
        DuplicateUsername { username: String } => "username already taken: {username}",
    }
}

/// Storage for users and their append-only exercise logs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Look up a user by exact username.
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserSummary>, UserRepositoryError>;

    /// Persist a newly registered user.
    ///
    /// Fails with [`UserRepositoryError::DuplicateUsername`] when the username
    /// is already taken.
    async fn insert(&self, user: &UserSummary) -> Result<(), UserRepositoryError>;

    /// Fetch a user together with its full log in append order.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;

    /// All users in creation order, without their logs.
    async fn list_summaries(&self) -> Result<Vec<UserSummary>, UserRepositoryError>;

    /// Append one exercise to the end of a user's log.
    async fn append_exercise(
        &self,
        id: &UserId,
        exercise: &Exercise,
    ) -> Result<(), UserRepositoryError>;
}
