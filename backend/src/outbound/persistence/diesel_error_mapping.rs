//! Diesel and pool error mapping for the user repository.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::UserRepositoryError;

use super::pool::PoolError;

pub(super) fn map_pool_error(error: PoolError) -> UserRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserRepositoryError::connection(message)
        }
    }
}

/// Map Diesel failures onto repository errors, keeping the database message.
pub(super) fn map_diesel_error(error: DieselError) -> UserRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => UserRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(err) => {
            UserRepositoryError::query(format!("database query error: {err}"))
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            UserRepositoryError::connection(format!("database connection error: {}", info.message()))
        }
        DieselError::DatabaseError(_, info) => {
            UserRepositoryError::query(format!("database error: {}", info.message()))
        }
        other => UserRepositoryError::query(format!("database error: {other}")),
    }
}

/// Like [`map_diesel_error`], but reports unique violations as a taken
/// username.
pub(super) fn map_insert_user_error(error: DieselError, username: &str) -> UserRepositoryError {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            debug!("username unique constraint rejected insert");
            UserRepositoryError::duplicate_username(username)
        }
        other => map_diesel_error(other),
    }
}
