//! Exercise tracker backend library.
//!
//! Hexagonal layout: `domain` holds entities, ports, and services;
//! `inbound::http` drives them over REST; `outbound` provides the
//! PostgreSQL and in-memory repositories.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
