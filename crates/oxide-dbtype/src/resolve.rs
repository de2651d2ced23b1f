//! Connection target resolution.
//!
//! Targets look like `jdbc:<backend>:<rest>`, `<backend>:<rest>` or
//! `<backend>://<host>/<db>`. Resolution only inspects the string, so a
//! [`DatabaseType`] can be obtained before any connection exists.

use std::path::PathBuf;

use crate::dialect::DatabaseType;
use crate::error::{DialectError, Result};

const JDBC_PREFIX: &str = "jdbc:";

/// Resolves the database type named by a connection target.
///
/// # Errors
///
/// Returns [`DialectError::UnknownDialect`] when no backend claims the scheme.
pub fn resolve(target: &str) -> Result<DatabaseType> {
    let scheme = scheme_of(target);
    if scheme.is_empty() {
        return Err(unknown(target));
    }
    DatabaseType::ALL
        .into_iter()
        .find(|db| {
            db.profile()
                .schemes
                .iter()
                .any(|s| s.eq_ignore_ascii_case(scheme))
        })
        .ok_or_else(|| unknown(target))
}

fn unknown(target: &str) -> DialectError {
    DialectError::UnknownDialect {
        target: target.to_string(),
    }
}

fn strip_jdbc(target: &str) -> &str {
    let trimmed = target.trim();
    match trimmed.get(..JDBC_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(JDBC_PREFIX) => &trimmed[JDBC_PREFIX.len()..],
        _ => trimmed,
    }
}

fn scheme_of(target: &str) -> &str {
    let rest = strip_jdbc(target);
    rest.split_once(':').map_or("", |(scheme, _)| scheme)
}

/// A resolved connection target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionTarget {
    database_type: DatabaseType,
    url: String,
}

impl ConnectionTarget {
    /// Parses and resolves a connection target.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnknownDialect`] when no backend claims the scheme.
    pub fn parse(target: &str) -> Result<Self> {
        let database_type = resolve(target)?;
        Ok(Self {
            database_type,
            url: strip_jdbc(target).to_string(),
        })
    }

    /// Returns the resolved database type.
    #[must_use]
    pub const fn database_type(&self) -> DatabaseType {
        self.database_type
    }

    /// Returns the URL without any `jdbc:` prefix.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the database file for file-backed targets.
    ///
    /// In-memory targets (`sqlite::memory:`, `sqlite://:memory:`) have none.
    #[must_use]
    pub fn file_path(&self) -> Option<PathBuf> {
        if !self.database_type.is_file_backed() {
            return None;
        }
        let (_, rest) = self.url.split_once(':')?;
        let rest = rest.strip_prefix("//").unwrap_or(rest);
        let path = rest.split_once('?').map_or(rest, |(path, _)| path);
        if path.is_empty() || path.contains(":memory:") {
            return None;
        }
        Some(PathBuf::from(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_jdbc_urls() {
        assert_eq!(resolve("jdbc:h2:mem:appdb"), Ok(DatabaseType::H2));
        assert_eq!(
            resolve("jdbc:postgresql://localhost/appdb"),
            Ok(DatabaseType::Postgres)
        );
        assert_eq!(resolve("jdbc:sqlite:target/db"), Ok(DatabaseType::Sqlite));
        assert_eq!(
            resolve("jdbc:sqlserver://localhost:1433"),
            Ok(DatabaseType::SqlServer)
        );
        assert_eq!(
            resolve("jdbc:oracle:thin:@localhost:1521:xe"),
            Ok(DatabaseType::Oracle)
        );
    }

    #[test]
    fn test_resolve_native_urls() {
        assert_eq!(resolve("sqlite::memory:"), Ok(DatabaseType::Sqlite));
        assert_eq!(
            resolve("postgres://user@localhost/db"),
            Ok(DatabaseType::Postgres)
        );
        assert_eq!(resolve("mysql://localhost/db"), Ok(DatabaseType::MySql));
        assert_eq!(resolve("MariaDB://localhost/db"), Ok(DatabaseType::MariaDb));
    }

    #[test]
    fn test_resolve_unknown() {
        for target in ["jdbc:foo:bar", "nothing", "", "jdbc:", ":memory:"] {
            assert!(
                matches!(resolve(target), Err(DialectError::UnknownDialect { .. })),
                "{target} should not resolve"
            );
        }
    }

    #[test]
    fn test_every_scheme_round_trips() {
        for db in DatabaseType::ALL {
            let target = format!("jdbc:{}:somewhere", db.scheme());
            assert_eq!(resolve(&target), Ok(db));
        }
    }

    #[test]
    fn test_target_strips_jdbc() {
        let target = ConnectionTarget::parse("jdbc:sqlite:target/test/appdb").unwrap();
        assert_eq!(target.database_type(), DatabaseType::Sqlite);
        assert_eq!(target.url(), "sqlite:target/test/appdb");
        assert_eq!(
            target.file_path(),
            Some(PathBuf::from("target/test/appdb"))
        );
    }

    #[test]
    fn test_file_path_ignores_memory_and_options() {
        let target = ConnectionTarget::parse("sqlite::memory:").unwrap();
        assert_eq!(target.file_path(), None);

        let target = ConnectionTarget::parse("sqlite://data/app.db?mode=rwc").unwrap();
        assert_eq!(target.file_path(), Some(PathBuf::from("data/app.db")));

        let target = ConnectionTarget::parse("postgres://localhost/db").unwrap();
        assert_eq!(target.file_path(), None);
    }
}
