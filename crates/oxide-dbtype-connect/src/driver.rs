//! Driver loading.
//!
//! Drivers are `sqlx` backends selected at compile time. SQLite is always
//! present; PostgreSQL and MySQL/MariaDB come with the `postgres` and
//! `mysql` features. The remaining backends have no `sqlx` driver.

use oxide_dbtype::DatabaseType;
use tracing::debug;

use crate::error::{ConnectError, Result};

/// Loads the driver of a database type.
pub trait LoadDriver {
    /// Returns whether the driver is compiled into this build.
    fn is_driver_available(&self) -> bool;

    /// Makes the driver usable through `sqlx::Any`.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectError::DriverLoad`] when the driver is not compiled in.
    fn load_driver(&self) -> Result<()>;
}

impl LoadDriver for DatabaseType {
    fn is_driver_available(&self) -> bool {
        match self {
            Self::Sqlite => true,
            Self::Postgres => cfg!(feature = "postgres"),
            Self::MySql | Self::MariaDb => cfg!(feature = "mysql"),
            Self::H2
            | Self::Derby
            | Self::Hsqldb
            | Self::Oracle
            | Self::SqlServer
            | Self::Db2 => false,
        }
    }

    fn load_driver(&self) -> Result<()> {
        if !self.is_driver_available() {
            return Err(ConnectError::DriverLoad {
                dialect: self.name(),
                driver: self.driver_name(),
            });
        }
        sqlx::any::install_default_drivers();
        debug!(dialect = self.name(), driver = self.driver_name(), "Driver loaded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_driver_loads() {
        assert!(DatabaseType::Sqlite.load_driver().is_ok());
        // Loading twice is fine.
        assert!(DatabaseType::Sqlite.load_driver().is_ok());
    }

    #[test]
    fn test_missing_drivers() {
        for db in [
            DatabaseType::H2,
            DatabaseType::Derby,
            DatabaseType::Hsqldb,
            DatabaseType::Oracle,
            DatabaseType::SqlServer,
            DatabaseType::Db2,
        ] {
            match db.load_driver() {
                Err(ConnectError::DriverLoad { dialect, driver }) => {
                    assert_eq!(dialect, db.name());
                    assert_eq!(driver, db.driver_name());
                }
                other => panic!("{db}: expected DriverLoad, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_feature_gated_drivers() {
        assert_eq!(
            DatabaseType::Postgres.is_driver_available(),
            cfg!(feature = "postgres")
        );
        assert_eq!(
            DatabaseType::MariaDb.is_driver_available(),
            cfg!(feature = "mysql")
        );
    }
}
