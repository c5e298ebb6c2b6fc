//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Provides the [`DieselUserRepository`] implementation of the domain's
//! `UserRepository` port, backed by `diesel-async` with `bb8` connection
//! pooling.
//!
//! - **Thin adapter**: the repository only translates between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Typed errors**: pool and Diesel failures map onto
//!   `UserRepositoryError` variants.
//!
//! # Example
//!
//! ```ignore
//! use exercise_tracker::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/tracker")).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
