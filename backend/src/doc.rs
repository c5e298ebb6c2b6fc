//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every REST endpoint and the error envelope schema.
//! The document backs Swagger UI in debug builds and is exported by the
//! `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Exercise tracker API",
        description = "Create users, log exercises, and query filtered exercise logs."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::exercises::append_exercise,
        crate::inbound::http::exercises::get_log,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::index::index,
    ),
    components(schemas(ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "users", description = "User registration and listing"),
        (name = "exercises", description = "Exercise logging and log queries"),
        (name = "health", description = "Endpoints for health checks"),
        (name = "pages", description = "Human-facing pages")
    )
)]
pub struct ApiDoc;
