//! Connection source.
//!
//! A [`ConnectionSource`] resolves a connection target, loads its driver and
//! owns the `sqlx` pool connections are borrowed from. Connections go back to
//! the pool when the returned [`PoolConnection`] is dropped.

use std::time::Duration;

use oxide_dbtype::{ConnectionTarget, DatabaseType, QueryBuilder, SqlValue};
use sqlx::any::{AnyPoolOptions, AnyRow};
use sqlx::pool::PoolConnection;
use sqlx::{Any, AnyPool};
use tracing::{debug, info};

use crate::driver::LoadDriver;
use crate::error::Result;
use crate::probe;

/// Pool settings for a [`ConnectionSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionOptions {
    /// Maximum number of pooled connections.
    pub max_connections: u32,
    /// Create the directory and file of file-backed databases.
    pub create_if_missing: bool,
    /// How long to wait for a free connection.
    pub acquire_timeout: Duration,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            max_connections: 5,
            create_if_missing: true,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

impl ConnectionOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of pooled connections.
    #[must_use]
    pub const fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets whether file-backed databases are created when missing.
    #[must_use]
    pub const fn create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }

    /// Sets how long to wait for a free connection.
    #[must_use]
    pub const fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }
}

/// Hands out connections to one database.
#[derive(Debug, Clone)]
pub struct ConnectionSource {
    target: ConnectionTarget,
    pool: AnyPool,
}

impl ConnectionSource {
    /// Connects to `url` with default options.
    ///
    /// # Errors
    ///
    /// See [`Self::connect`].
    pub async fn open(url: &str) -> Result<Self> {
        Self::connect(url, ConnectionOptions::default()).await
    }

    /// Resolves `url`, loads its driver and opens a pool.
    ///
    /// For file-backed databases the parent directory is created first and
    /// the file is opened in create mode. An in-memory SQLite database only
    /// lives as long as its connection, so its pool keeps exactly one
    /// connection open.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConnectError::Dialect`] for unknown targets,
    /// [`crate::ConnectError::DriverLoad`] when the driver is not compiled
    /// in, and database or IO errors from opening the pool.
    pub async fn connect(url: &str, options: ConnectionOptions) -> Result<Self> {
        let target = ConnectionTarget::parse(url)?;
        let db = target.database_type();
        db.load_driver()?;

        let mut url = target.url().to_string();
        let mut pool_options = AnyPoolOptions::new()
            .max_connections(options.max_connections)
            .acquire_timeout(options.acquire_timeout);

        match target.file_path() {
            Some(path) if options.create_if_missing => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    debug!(dir = %parent.display(), "Creating database directory");
                    tokio::fs::create_dir_all(parent).await?;
                }
                if !url.contains("mode=") {
                    url.push(if url.contains('?') { '&' } else { '?' });
                    url.push_str("mode=rwc");
                }
            }
            Some(_) => {}
            None if db == DatabaseType::Sqlite => {
                pool_options = pool_options
                    .max_connections(1)
                    .min_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None);
            }
            None => {}
        }

        let pool = pool_options.connect(&url).await?;
        info!(dialect = db.name(), url = %target.url(), "Connected");
        Ok(Self { target, pool })
    }

    /// Returns the resolved target.
    #[must_use]
    pub const fn target(&self) -> &ConnectionTarget {
        &self.target
    }

    /// Returns the database type of the target.
    #[must_use]
    pub const fn database_type(&self) -> DatabaseType {
        self.target.database_type()
    }

    /// Borrows a connection for reading.
    ///
    /// # Errors
    ///
    /// Returns a database error when no connection can be acquired.
    pub async fn read_only_connection(&self) -> Result<PoolConnection<Any>> {
        Ok(self.pool.acquire().await?)
    }

    /// Borrows a connection for writing.
    ///
    /// # Errors
    ///
    /// Returns a database error when no connection can be acquired.
    pub async fn read_write_connection(&self) -> Result<PoolConnection<Any>> {
        Ok(self.pool.acquire().await?)
    }

    /// Pings the database and returns the value the ping statement produced.
    ///
    /// The connection is released on every path.
    ///
    /// # Errors
    ///
    /// Returns a database error when the connection or the query fails.
    pub async fn ping(&self) -> Result<i64> {
        let mut conn = self.read_only_connection().await?;
        probe::ping(&mut conn, self.database_type()).await
    }

    /// Runs a SELECT and returns its rows, binding the builder's parameters.
    ///
    /// # Errors
    ///
    /// Returns a dialect error when the query cannot be built for this
    /// database and a database error when it fails.
    pub async fn fetch_all(&self, query: QueryBuilder) -> Result<Vec<AnyRow>> {
        let (sql, params) = query.build()?;
        debug!(sql = %sql, params = params.len(), "Running query");
        let mut q = sqlx::query(&sql);
        for value in params {
            q = match value {
                SqlValue::Null => q.bind(None::<i64>),
                SqlValue::Bool(b) => q.bind(b),
                SqlValue::Int(i) => q.bind(i),
                SqlValue::Float(f) => q.bind(f),
                SqlValue::Text(s) => q.bind(s),
                SqlValue::Blob(b) => q.bind(b),
            };
        }
        let mut conn = self.read_only_connection().await?;
        Ok(q.fetch_all(&mut *conn).await?)
    }

    /// Closes every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
        debug!(dialect = self.database_type().name(), "Connection source closed");
    }
}
