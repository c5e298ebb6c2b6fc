//! Driving port for user registration.

use async_trait::async_trait;

use crate::domain::{Error, UserSummary, Username};

/// Domain use-case port for creating users.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Return the user named `username`, registering it first if needed.
    ///
    /// Repeating the call with the same username yields the same identifier.
    async fn create_user(&self, username: Username) -> Result<UserSummary, Error>;
}
