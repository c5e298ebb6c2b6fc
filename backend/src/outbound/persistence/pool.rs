//! Async connection pool for Diesel PostgreSQL connections.
//!
//! Wraps `diesel-async` and `bb8`. Checkout is non-blocking and bounded by
//! the configured timeout; failures surface as [`PoolError`] values.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

const DEFAULT_MAX_SIZE: u32 = 10;
const DEFAULT_MIN_IDLE: u32 = 2;
const DEFAULT_CHECKOUT_TIMEOUT: Duration = Duration::from_secs(30);

/// Pool construction and checkout failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// No connection became available in time, or connecting failed.
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },
    /// The pool itself could not be built.
    #[error("failed to build connection pool: {message}")]
    Build { message: String },
}

impl PoolError {
    /// Checkout failure carrying `message`.
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout { message: message.into() }
    }

    /// Build failure carrying `message`.
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build { message: message.into() }
    }
}

/// Configuration for the database connection pool.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use exercise_tracker::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("postgres://tracker@localhost/tracker")
///     .with_max_size(20)
///     .with_connection_timeout(Duration::from_secs(5));
/// assert_eq!(config.max_size(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    min_idle: Option<u32>,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Configuration for `database_url` with at most 10 connections, 2 kept
    /// idle, and a 30 second checkout timeout.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: DEFAULT_MAX_SIZE,
            min_idle: Some(DEFAULT_MIN_IDLE),
            connection_timeout: DEFAULT_CHECKOUT_TIMEOUT,
        }
    }

    /// Cap the number of open connections.
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Idle connections kept warm; clamped to the maximum size on build.
    pub fn with_min_idle(mut self, min_idle: Option<u32>) -> Self {
        self.min_idle = min_idle;
        self
    }

    /// Bound how long a checkout may wait.
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Database URL.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Maximum pool size.
    pub fn max_size(&self) -> u32 {
        self.max_size
    }
}

/// Shared handle on the bb8 pool of async PostgreSQL connections.
#[derive(Clone)]
pub struct DbPool(Pool<AsyncPgConnection>);

impl DbPool {
    /// Build a pool from `config`.
    ///
    /// # Errors
    /// Returns [`PoolError::Build`] when bb8 cannot establish the pool.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let PoolConfig {
            database_url,
            max_size,
            min_idle,
            connection_timeout,
        } = config;
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);

        Pool::builder()
            .max_size(max_size)
            // bb8 rejects min_idle above max_size.
            .min_idle(min_idle.map(|idle| idle.min(max_size)))
            .connection_timeout(connection_timeout)
            .build(manager)
            .await
            .map(Self)
            .map_err(|err| PoolError::build(err.to_string()))
    }

    /// Check out a connection.
    ///
    /// # Errors
    /// Returns [`PoolError::Checkout`] when the checkout times out or the
    /// connection cannot be opened.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.0
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_config_defaults() {
        let config = PoolConfig::new("postgres://localhost/tracker");

        assert_eq!(config.database_url(), "postgres://localhost/tracker");
        assert_eq!(config.max_size(), DEFAULT_MAX_SIZE);
        assert_eq!(config.min_idle, Some(DEFAULT_MIN_IDLE));
        assert_eq!(config.connection_timeout, DEFAULT_CHECKOUT_TIMEOUT);
    }

    #[rstest]
    fn pool_config_overrides() {
        let config = PoolConfig::new("postgres://localhost/tracker")
            .with_max_size(4)
            .with_min_idle(None)
            .with_connection_timeout(Duration::from_secs(3));

        assert_eq!(config.max_size(), 4);
        assert_eq!(config.min_idle, None);
        assert_eq!(config.connection_timeout, Duration::from_secs(3));
    }

    #[rstest]
    #[case(PoolError::checkout("connection refused"), "connection refused")]
    #[case(PoolError::build("invalid URL"), "invalid URL")]
    fn pool_error_display_keeps_message(#[case] error: PoolError, #[case] fragment: &str) {
        assert!(error.to_string().contains(fragment));
    }
}
