//! Driving port for user listings.
//!
//! Inbound adapters use this port to read the user directory without
//! depending on the persistence adapter.

use async_trait::async_trait;

use crate::domain::{Error, UserSummary};

/// Domain use-case port for listing users.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every user, in creation order, without exercise logs.
    async fn list_users(&self) -> Result<Vec<UserSummary>, Error>;
}
