//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repository using Diesel ORM
//! - **memory**: process-local repository used when no database is configured
//!
//! Adapters are thin translators between domain types and storage
//! representations. They contain no business logic.

pub mod memory;
pub mod persistence;
