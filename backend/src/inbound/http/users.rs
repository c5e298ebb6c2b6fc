//! Users API handlers.
//!
//! ```text
//! POST /api/users  username=ada        -> {"username":"ada","_id":"..."}
//! GET  /api/users                      -> [{"username":"ada","_id":"..."}]
//! ```
//!
//! Bodies may be JSON or URL-encoded forms. A body that decodes as neither
//! is rejected without blaming a particular field.

use actix_web::{Either, get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{UserSummary, Username};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, missing_field_error, non_empty, undecodable_body_error,
};

const USERNAME_FIELD: FieldName = FieldName::new("username");
const USERNAME_REQUIRED: &str = "Username is required";

/// Body for `POST /api/users`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    /// Desired username.
    #[serde(default)]
    pub username: Option<String>,
}

/// A user as returned by the users endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
pub struct UserResponse {
    /// Unique username.
    pub username: String,
    /// Stable user identifier.
    #[serde(rename = "_id")]
    pub id: String,
}

impl From<UserSummary> for UserResponse {
    fn from(value: UserSummary) -> Self {
        Self {
            id: value.id().to_string(),
            username: value.username().to_string(),
        }
    }
}

/// JSON or form body, absent when the payload could not be decoded.
pub(crate) type Payload<T> = Option<Either<web::Json<T>, web::Form<T>>>;

pub(crate) fn decoded_payload<T>(payload: Payload<T>) -> Option<T> {
    payload.map(|body| match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    })
}

/// Create a user, or return the existing user with the same username.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body(content(
        (CreateUserRequest = "application/json"),
        (CreateUserRequest = "application/x-www-form-urlencoded")
    )),
    responses(
        (status = 200, description = "Created or existing user", body = UserResponse),
        (status = 400, description = "Missing username", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: Payload<CreateUserRequest>,
) -> ApiResult<web::Json<UserResponse>> {
    let request =
        decoded_payload(payload).ok_or_else(|| undecodable_body_error(USERNAME_REQUIRED))?;
    let username = non_empty(request.username)
        .and_then(|raw| Username::new(raw).ok())
        .ok_or_else(|| missing_field_error(USERNAME_FIELD, USERNAME_REQUIRED))?;

    let user = state.users.create_user(username).await?;
    Ok(web::Json(user.into()))
}

/// List every user in creation order.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users", body = [UserResponse]),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(users.into_iter().map(UserResponse::from).collect()))
}

#[cfg(test)]
mod tests;
