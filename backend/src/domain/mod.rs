//! Domain primitives, aggregates, ports, and services.
//!
//! Purpose: define strongly typed entities shared by the HTTP and persistence
//! adapters, and the services that implement the driving ports over the
//! [`ports::UserRepository`] driven port.
//!
//! Public surface:
//! - Error (alias to `error::Error`) - API error payload.
//! - User, UserSummary, Exercise - the stored aggregate and its projections.
//! - LogFilter - pure read-time filtering of exercise logs.

pub mod calendar;
pub mod error;
pub mod exercise;
mod exercise_log_service;
pub mod log_filter;
pub mod ports;
pub mod trace_id;
pub mod user;
mod user_service;

pub use self::calendar::ExerciseDate;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::exercise::{Description, DurationMinutes, Exercise, ExerciseValidationError};
pub use self::exercise_log_service::ExerciseLogService;
pub(crate) use self::exercise_log_service::USER_NOT_FOUND;
pub use self::log_filter::LogFilter;
pub use self::trace_id::TraceId;
pub use self::user::{User, UserId, UserSummary, UserValidationError, Username};
pub use self::user_service::UserService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use exercise_tracker::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("User not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
