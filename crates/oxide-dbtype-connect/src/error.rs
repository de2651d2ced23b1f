//! Error types for connecting to and running SQL against a database.

use oxide_dbtype::DialectError;

/// Errors that can occur while talking to a live database.
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    /// The backend's driver is not compiled into this build.
    #[error("Driver '{driver}' for database type {dialect} is not available")]
    DriverLoad {
        /// Dialect name.
        dialect: &'static str,
        /// Driver name.
        driver: &'static str,
    },

    /// Dialect resolution or SQL generation failed.
    #[error(transparent)]
    Dialect(#[from] DialectError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// IO error (creating database directories, reading schema files).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The ping statement returned something other than 1.
    #[error("Ping statement '{statement}' returned {value}, expected 1")]
    UnexpectedPing {
        /// The statement that was run.
        statement: &'static str,
        /// The value it returned.
        value: i64,
    },
}

/// Result type for connection operations.
pub type Result<T> = std::result::Result<T, ConnectError>;
