//! Process-local `UserRepository` implementation.
//!
//! Holds every user and log behind a single mutex. Data lives only as long as
//! the process, which suits local development and behavioural tests.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{Exercise, User, UserId, UserSummary, Username};

/// In-memory implementation of the [`UserRepository`] port.
///
/// Users are kept in insertion order so listings follow creation order.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    fn users(&self) -> Result<MutexGuard<'_, Vec<User>>, UserRepositoryError> {
        self.users
            .lock()
            .map_err(|_| UserRepositoryError::query("in-memory user store lock poisoned"))
    }

    /// Number of stored users.
    pub fn len(&self) -> Result<usize, UserRepositoryError> {
        Ok(self.users()?.len())
    }

    /// Whether the store holds no users.
    pub fn is_empty(&self) -> Result<bool, UserRepositoryError> {
        Ok(self.users()?.is_empty())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserSummary>, UserRepositoryError> {
        Ok(self
            .users()?
            .iter()
            .find(|user| user.username() == username)
            .map(User::summary))
    }

    async fn insert(&self, user: &UserSummary) -> Result<(), UserRepositoryError> {
        let mut users = self.users()?;
        if users.iter().any(|stored| stored.username() == user.username()) {
            return Err(UserRepositoryError::duplicate_username(
                user.username().as_ref(),
            ));
        }
        users.push(User::new(*user.id(), user.username().clone(), Vec::new()));
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.users()?.iter().find(|user| user.id() == id).cloned())
    }

    async fn list_summaries(&self) -> Result<Vec<UserSummary>, UserRepositoryError> {
        Ok(self.users()?.iter().map(User::summary).collect())
    }

    async fn append_exercise(
        &self,
        id: &UserId,
        exercise: &Exercise,
    ) -> Result<(), UserRepositoryError> {
        let mut users = self.users()?;
        let Some(user) = users.iter_mut().find(|user| user.id() == id) else {
            return Err(UserRepositoryError::query(format!("no user with id {id}")));
        };
        user.record(exercise.clone());
        Ok(())
    }
}
