//! Exercise log services: appending entries and reading filtered logs.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use super::user_service::map_repository_error;
use crate::domain::ports::{
    AppendExerciseRequest, AppendExerciseResponse, ExerciseLogCommand, ExerciseLogQuery,
    ExerciseLogView, UserRepository,
};
use crate::domain::{Error, Exercise, ExerciseDate, LogFilter, User, UserId};

/// Message returned when a log owner cannot be resolved.
pub(crate) const USER_NOT_FOUND: &str = "User not found";

/// Exercise log service implementing [`ExerciseLogCommand`] and
/// [`ExerciseLogQuery`].
///
/// Entries appended without a date are stamped with today's UTC date from
/// the injected clock.
#[derive(Clone)]
pub struct ExerciseLogService<R> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> ExerciseLogService<R> {
    /// Create a new service over `repo`, reading "today" from `clock`.
    ///
    /// # Examples
    /// ```
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// use exercise_tracker::domain::ExerciseLogService;
    /// use exercise_tracker::outbound::memory::InMemoryUserRepository;
    ///
    /// let service = ExerciseLogService::new(
    ///     Arc::new(InMemoryUserRepository::default()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

impl<R> ExerciseLogService<R>
where
    R: UserRepository,
{
    async fn require_user(&self, user_id: &UserId) -> Result<User, Error> {
        self.repo
            .find_by_id(user_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND))
    }
}

#[async_trait]
impl<R> ExerciseLogCommand for ExerciseLogService<R>
where
    R: UserRepository,
{
    async fn append_exercise(
        &self,
        request: AppendExerciseRequest,
    ) -> Result<AppendExerciseResponse, Error> {
        let AppendExerciseRequest {
            user_id,
            description,
            duration,
            date,
        } = request;
        let user = self.require_user(&user_id).await?;

        let date = date.unwrap_or_else(|| ExerciseDate::today(self.clock.as_ref()));
        let exercise = Exercise::new(description, duration, date);
        self.repo
            .append_exercise(&user_id, &exercise)
            .await
            .map_err(map_repository_error)?;

        info!(user_id = %user_id, %date, "appended exercise");
        Ok(AppendExerciseResponse {
            user: user.summary(),
            exercise,
        })
    }
}

#[async_trait]
impl<R> ExerciseLogQuery for ExerciseLogService<R>
where
    R: UserRepository,
{
    async fn query_log(
        &self,
        user_id: &UserId,
        filter: LogFilter,
    ) -> Result<ExerciseLogView, Error> {
        let user = self.require_user(user_id).await?;
        let entries = filter.apply(user.log()).into_iter().cloned().collect();
        Ok(ExerciseLogView {
            user: user.summary(),
            entries,
        })
    }
}

#[cfg(test)]
#[path = "exercise_log_service_tests.rs"]
mod tests;
