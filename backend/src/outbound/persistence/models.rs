//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence module.

use chrono::NaiveDate;
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{exercises, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub username: String,
}

/// Insertable struct for creating user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub username: &'a str,
}

/// Row struct for reading log entries.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = exercises)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ExerciseRow {
    pub description: String,
    pub duration_minutes: i64,
    pub performed_on: NaiveDate,
}

/// Insertable struct for appending log entries.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = exercises)]
pub(crate) struct NewExerciseRow<'a> {
    pub user_id: Uuid,
    pub description: &'a str,
    pub duration_minutes: i64,
    pub performed_on: NaiveDate,
}
