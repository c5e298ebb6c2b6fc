//! Server settings and the resolved server configuration.
//!
//! [`ServerSettings`] is loaded by OrthoConfig from CLI flags and
//! `TRACKER_*` environment variables. [`ServerConfig`] is the validated
//! result handed to [`super::create_server`].

use std::io;
use std::net::{IpAddr, SocketAddr};

use exercise_tracker::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use ortho_config::OrthoConfig;
use serde::Deserialize;
use tracing::info;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Configuration values controlling the HTTP listener and the store.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TRACKER")]
pub struct ServerSettings {
    /// IP address to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// PostgreSQL URL; the in-memory store is used when absent.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Skip applying embedded migrations at start-up.
    #[ortho_config(default = false)]
    pub skip_migrations: bool,
}

impl ServerSettings {
    /// Configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Configured port, falling back to 3000.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Configured pool size, falling back to 10.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    /// Whether migrations run before the pool is built.
    pub fn migrations_enabled(&self) -> bool {
        !self.skip_migrations
    }

    /// Database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Socket address built from host and port.
    ///
    /// # Errors
    /// Returns [`io::ErrorKind::InvalidInput`] when the host is not an IP
    /// address.
    pub fn bind_addr(&self) -> io::Result<SocketAddr> {
        let host = self.host();
        let ip: IpAddr = host.parse().map_err(|err| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid host {host:?}: {err}"),
            )
        })?;
        Ok(SocketAddr::new(ip, self.port()))
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a configuration bound to `bind_addr` with no database.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
        }
    }

    /// Attach a database connection pool for the persistence adapter.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Resolve settings into a configuration, connecting to the database and
    /// applying migrations when one is configured.
    ///
    /// # Errors
    /// Propagates invalid bind addresses, migration failures, and pool
    /// construction failures as [`io::Error`].
    pub async fn from_settings(settings: &ServerSettings) -> io::Result<Self> {
        let config = Self::new(settings.bind_addr()?);
        let Some(url) = settings.database_url() else {
            info!("no database configured; using in-memory store");
            return Ok(config);
        };

        if settings.migrations_enabled() {
            run_migrations(url).await.map_err(io::Error::other)?;
        }
        let pool = DbPool::new(PoolConfig::new(url).with_max_size(settings.pool_max_size()))
            .await
            .map_err(io::Error::other)?;
        info!(pool_max_size = settings.pool_max_size(), "using PostgreSQL store");
        Ok(config.with_db_pool(pool))
    }
}
