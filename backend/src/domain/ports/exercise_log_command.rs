//! Driving port for appending exercises to a user's log.

use async_trait::async_trait;

use crate::domain::{
    Description, DurationMinutes, Error, Exercise, ExerciseDate, UserId, UserSummary,
};

/// Validated request to append an exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendExerciseRequest {
    /// Owner of the log.
    pub user_id: UserId,
    /// Exercise description.
    pub description: Description,
    /// Exercise duration.
    pub duration: DurationMinutes,
    /// Supplied date, or `None` to record today's date.
    pub date: Option<ExerciseDate>,
}

/// Outcome of a successful append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendExerciseResponse {
    /// Owner of the log.
    pub user: UserSummary,
    /// The entry as stored, with its resolved date.
    pub exercise: Exercise,
}

/// Domain use-case port for recording exercises.
#[async_trait]
pub trait ExerciseLogCommand: Send + Sync {
    /// Append an exercise to the end of the user's log.
    ///
    /// Fails with a `not_found` error when the user does not exist.
    async fn append_exercise(
        &self,
        request: AppendExerciseRequest,
    ) -> Result<AppendExerciseResponse, Error>;
}
