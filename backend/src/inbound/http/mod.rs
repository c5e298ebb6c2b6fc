//! HTTP inbound adapter exposing REST endpoints.

pub mod cors;
pub mod error;
pub mod exercises;
pub mod health;
pub mod index;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;
