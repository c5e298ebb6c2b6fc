//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Users live in `users`; each log entry is a row in `exercises` keyed by a
//! monotonic id, so reading entries ordered by id reproduces append order.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{
    Description, DurationMinutes, Exercise, ExerciseDate, User, UserId, UserSummary, Username,
};

use super::diesel_error_mapping::{map_diesel_error, map_insert_user_error, map_pool_error};
use super::models::{ExerciseRow, NewExerciseRow, NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::{exercises, users};

/// Diesel-backed implementation of the [`UserRepository`] port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_summary(row: UserRow) -> Result<UserSummary, UserRepositoryError> {
    let username = Username::new(row.username)
        .map_err(|err| UserRepositoryError::query(format!("invalid stored username: {err}")))?;
    Ok(UserSummary::new(UserId::from_uuid(row.id), username))
}

fn row_to_exercise(row: ExerciseRow) -> Result<Exercise, UserRepositoryError> {
    let description = Description::new(row.description).map_err(|err| {
        UserRepositoryError::query(format!("invalid stored description: {err}"))
    })?;
    let minutes = u32::try_from(row.duration_minutes).map_err(|_| {
        UserRepositoryError::query(format!(
            "stored duration out of range: {}",
            row.duration_minutes
        ))
    })?;
    Ok(Exercise::new(
        description,
        DurationMinutes::new(minutes),
        ExerciseDate::from(row.performed_on),
    ))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserSummary>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::username.eq(username.as_ref()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_summary).transpose()
    }

    async fn insert(&self, user: &UserSummary) -> Result<(), UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewUserRow {
            id: *user.id().as_uuid(),
            username: user.username().as_ref(),
        };

        diesel::insert_into(users::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_insert_user_error(err, user.username().as_ref()))
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::id.eq(id.as_uuid()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        let Some(row) = row else {
            return Ok(None);
        };

        let entries: Vec<ExerciseRow> = exercises::table
            .filter(exercises::user_id.eq(row.id))
            .order(exercises::id.asc())
            .select(ExerciseRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let summary = row_to_summary(row)?;
        let log = entries
            .into_iter()
            .map(row_to_exercise)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(User::new(
            *summary.id(),
            summary.username().clone(),
            log,
        )))
    }

    async fn list_summaries(&self) -> Result<Vec<UserSummary>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .order((users::created_at.asc(), users::id.asc()))
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_summary).collect()
    }

    async fn append_exercise(
        &self,
        id: &UserId,
        exercise: &Exercise,
    ) -> Result<(), UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewExerciseRow {
            user_id: *id.as_uuid(),
            description: exercise.description().as_ref(),
            duration_minutes: i64::from(exercise.duration().minutes()),
            performed_on: exercise.date().as_naive_date(),
        };

        diesel::insert_into(exercises::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
