//! Exercise log API handlers.
//!
//! ```text
//! POST /api/users/{_id}/exercises  description=run&duration=30&date=2023-01-02
//! GET  /api/users/{_id}/logs?from=2023-01-01&to=2023-01-31&limit=5
//! ```
//!
//! Request validation runs in a fixed order before the store is touched:
//! body decoding, required fields, then the duration, then the user
//! identifier. Invalid
//! dates and limits are never errors; they fall back to their defaults.

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::ports::{AppendExerciseRequest, AppendExerciseResponse, ExerciseLogView};
use crate::domain::{
    Description, DurationMinutes, Error, Exercise, ExerciseDate, ExerciseValidationError,
    LogFilter, USER_NOT_FOUND, UserId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{Payload, decoded_payload};
use crate::inbound::http::validation::{
    FieldName, ValidationCode, field_error, missing_field_error, non_empty,
    undecodable_body_error,
};

const DESCRIPTION_FIELD: FieldName = FieldName::new("description");
const DURATION_FIELD: FieldName = FieldName::new("duration");
const FIELDS_REQUIRED: &str = "Description and duration are required";
const DURATION_NOT_A_NUMBER: &str = "Duration must be a number";
const DURATION_NOT_WHOLE: &str = "Duration must be a whole number of minutes";

/// Duration as sent by clients: a JSON number or numeric text.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum DurationInput {
    /// Numeric duration, e.g. from a JSON body.
    Minutes(f64),
    /// Textual duration, e.g. from a form field.
    Text(String),
}

impl DurationInput {
    fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }

    fn parse(&self) -> Result<DurationMinutes, ExerciseValidationError> {
        match self {
            Self::Minutes(value) => DurationMinutes::from_number(*value),
            Self::Text(text) => DurationMinutes::parse(text),
        }
    }
}

/// Body for `POST /api/users/{_id}/exercises`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct AppendExerciseBody {
    /// What was done.
    #[serde(default)]
    pub description: Option<String>,
    /// Minutes spent.
    #[serde(default)]
    pub duration: Option<DurationInput>,
    /// Calendar date; today is used when absent or unparsable.
    #[serde(default)]
    pub date: Option<String>,
}

/// Query parameters for `GET /api/users/{_id}/logs`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LogQuery {
    /// Inclusive lower date bound.
    pub from: Option<String>,
    /// Inclusive upper date bound.
    pub to: Option<String>,
    /// Maximum number of entries after sorting.
    pub limit: Option<String>,
}

/// A freshly appended exercise.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
pub struct ExerciseResponse {
    /// Owner identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Owner username.
    pub username: String,
    /// Rendered date, e.g. `Mon Jan 02 2023`.
    pub date: String,
    /// Minutes spent.
    pub duration: u32,
    /// Description as given.
    pub description: String,
}

impl From<AppendExerciseResponse> for ExerciseResponse {
    fn from(value: AppendExerciseResponse) -> Self {
        let AppendExerciseResponse { user, exercise } = value;
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
            date: exercise.date().to_string(),
            duration: exercise.duration().minutes(),
            description: exercise.description().as_ref().to_owned(),
        }
    }
}

/// One entry of a log response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
pub struct LogEntryResponse {
    pub description: String,
    pub duration: u32,
    pub date: String,
}

impl From<&Exercise> for LogEntryResponse {
    fn from(value: &Exercise) -> Self {
        Self {
            description: value.description().as_ref().to_owned(),
            duration: value.duration().minutes(),
            date: value.date().to_string(),
        }
    }
}

/// A user's filtered log.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
pub struct LogResponse {
    /// Owner identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Owner username.
    pub username: String,
    /// Entries in `log`, not in the stored log.
    pub count: usize,
    /// Entries sorted by date.
    pub log: Vec<LogEntryResponse>,
}

impl From<ExerciseLogView> for LogResponse {
    fn from(value: ExerciseLogView) -> Self {
        Self {
            id: value.user.id().to_string(),
            username: value.user.username().to_string(),
            count: value.count(),
            log: value.entries.iter().map(LogEntryResponse::from).collect(),
        }
    }
}

fn map_duration_error(err: ExerciseValidationError) -> Error {
    match err {
        ExerciseValidationError::DurationNotWholeMinutes => {
            field_error(DURATION_FIELD, ValidationCode::NotWholeMinutes, DURATION_NOT_WHOLE)
        }
        _ => field_error(DURATION_FIELD, ValidationCode::NotANumber, DURATION_NOT_A_NUMBER),
    }
}

/// Unknown and malformed identifiers both name no user.
fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|err| {
        debug!(%err, "rejected malformed user id");
        Error::not_found(USER_NOT_FOUND)
    })
}

fn parse_append_request(
    raw_user_id: &str,
    body: AppendExerciseBody,
) -> Result<AppendExerciseRequest, Error> {
    let description = non_empty(body.description);
    let duration = body.duration.filter(|input| !input.is_blank());
    let (description, duration) = match (description, duration) {
        (Some(description), Some(duration)) => (description, duration),
        (None, _) => return Err(missing_field_error(DESCRIPTION_FIELD, FIELDS_REQUIRED)),
        (Some(_), None) => return Err(missing_field_error(DURATION_FIELD, FIELDS_REQUIRED)),
    };

    let duration = duration.parse().map_err(map_duration_error)?;
    let description = Description::new(description)
        .map_err(|_| missing_field_error(DESCRIPTION_FIELD, FIELDS_REQUIRED))?;
    let user_id = parse_user_id(raw_user_id)?;
    let date = body.date.as_deref().and_then(ExerciseDate::parse);

    Ok(AppendExerciseRequest {
        user_id,
        description,
        duration,
        date,
    })
}

/// Append an exercise to a user's log.
#[utoipa::path(
    post,
    path = "/api/users/{_id}/exercises",
    params(("_id" = String, Path, description = "User identifier")),
    request_body(content(
        (AppendExerciseBody = "application/json"),
        (AppendExerciseBody = "application/x-www-form-urlencoded")
    )),
    responses(
        (status = 200, description = "Appended exercise", body = ExerciseResponse),
        (status = 400, description = "Missing fields or non-numeric duration", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["exercises"],
    operation_id = "appendExercise"
)]
#[post("/users/{_id}/exercises")]
pub async fn append_exercise(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: Payload<AppendExerciseBody>,
) -> ApiResult<web::Json<ExerciseResponse>> {
    let body = decoded_payload(payload).ok_or_else(|| undecodable_body_error(FIELDS_REQUIRED))?;
    let request = parse_append_request(&path, body)?;
    let response = state.exercises.append_exercise(request).await?;
    Ok(web::Json(response.into()))
}

/// Read a user's log, filtered by date window and limited in size.
#[utoipa::path(
    get,
    path = "/api/users/{_id}/logs",
    params(("_id" = String, Path, description = "User identifier"), LogQuery),
    responses(
        (status = 200, description = "Filtered log", body = LogResponse),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["exercises"],
    operation_id = "getLog"
)]
#[get("/users/{_id}/logs")]
pub async fn get_log(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<LogQuery>,
) -> ApiResult<web::Json<LogResponse>> {
    let user_id = parse_user_id(&path)?;
    let LogQuery { from, to, limit } = query.into_inner();
    let filter = LogFilter::from_raw(from.as_deref(), to.as_deref(), limit.as_deref());
    let view = state.exercises_query.query_log(&user_id, filter).await?;
    Ok(web::Json(view.into()))
}

#[cfg(test)]
#[path = "exercises_tests.rs"]
mod tests;
