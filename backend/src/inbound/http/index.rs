//! Landing page served at the site root.

use actix_web::{HttpResponse, get, http::header::ContentType};

const WELCOME_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Exercise Tracker</title>
  </head>
  <body>
    <h1>Exercise Tracker API</h1>
    <p>Create users with <code>POST /api/users</code>, log exercises with
    <code>POST /api/users/:_id/exercises</code>, and read logs with
    <code>GET /api/users/:_id/logs?[from][&amp;to][&amp;limit]</code>.</p>
  </body>
</html>
"#;

/// Serve the welcome page.
#[utoipa::path(
    get,
    path = "/",
    tags = ["pages"],
    responses((status = 200, description = "Welcome page", content_type = "text/html"))
)]
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(WELCOME_PAGE)
}
