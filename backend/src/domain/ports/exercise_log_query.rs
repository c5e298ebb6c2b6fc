//! Driving port for filtered exercise log reads.

use async_trait::async_trait;

use crate::domain::{Error, Exercise, LogFilter, UserId, UserSummary};

/// A user's log after filtering, sorting, and limiting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseLogView {
    /// Owner of the log.
    pub user: UserSummary,
    /// Matching entries sorted by date.
    pub entries: Vec<Exercise>,
}

impl ExerciseLogView {
    /// Number of entries in the filtered view, not in the stored log.
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

/// Domain use-case port for reading exercise logs.
#[async_trait]
pub trait ExerciseLogQuery: Send + Sync {
    /// Return the user's log narrowed by `filter`.
    ///
    /// Fails with a `not_found` error when the user does not exist.
    async fn query_log(&self, user_id: &UserId, filter: LogFilter)
    -> Result<ExerciseLogView, Error>;
}
