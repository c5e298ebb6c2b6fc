//! Permissive CORS handling.
//!
//! Every response carries `Access-Control-Allow-Origin: *` via
//! [`cors_headers`]. Preflight `OPTIONS` requests never match a route, so
//! [`fallback`] answers them; any other unmatched request gets a JSON 404.

use actix_web::http::{Method, StatusCode};
use actix_web::middleware::DefaultHeaders;
use actix_web::{HttpRequest, HttpResponse};

use crate::domain::Error;

/// Allow-origin header applied to every response.
pub const ALLOW_ORIGIN: (&str, &str) = ("access-control-allow-origin", "*");
const ALLOW_METHODS: (&str, &str) = ("access-control-allow-methods", "GET, POST, OPTIONS");
const ALLOW_HEADERS: (&str, &str) = ("access-control-allow-headers", "content-type");
const MAX_AGE: (&str, &str) = ("access-control-max-age", "86400");

/// Middleware adding the allow-origin header to every response.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new().add(ALLOW_ORIGIN)
}

/// Default service: answer CORS preflights, otherwise report an unknown route.
pub async fn fallback(req: HttpRequest) -> Result<HttpResponse, Error> {
    if req.method() == Method::OPTIONS {
        return Ok(HttpResponse::build(StatusCode::NO_CONTENT)
            .insert_header(ALLOW_METHODS)
            .insert_header(ALLOW_HEADERS)
            .insert_header(MAX_AGE)
            .finish());
    }
    Err(Error::not_found(format!(
        "no route for {} {}",
        req.method(),
        req.path()
    )))
}
