//! Connectivity probe.

use oxide_dbtype::DatabaseType;
use sqlx::{AnyConnection, Row};
use tracing::debug;

use crate::error::{ConnectError, Result};

/// Runs the dialect's ping statement on `conn` and returns its scalar result.
///
/// Drivers report the literal `1` as either a 64-bit or a 32-bit integer, so
/// both are accepted.
///
/// # Errors
///
/// Returns a database error when the statement fails or returns no integer.
pub async fn ping(conn: &mut AnyConnection, db: DatabaseType) -> Result<i64> {
    let statement = db.ping_statement();
    debug!(dialect = db.name(), sql = %statement, "Pinging");
    let row = sqlx::query(statement).fetch_one(&mut *conn).await?;
    let value = match row.try_get::<i64, _>(0) {
        Ok(value) => value,
        Err(_) => i64::from(row.try_get::<i32, _>(0)?),
    };
    debug!(dialect = db.name(), value, "Ping answered");
    Ok(value)
}

/// Checks that a ping returned 1.
///
/// # Errors
///
/// Returns [`ConnectError::UnexpectedPing`] for any other value.
pub fn check_ping(db: DatabaseType, value: i64) -> Result<()> {
    if value == 1 {
        Ok(())
    } else {
        Err(ConnectError::UnexpectedPing {
            statement: db.ping_statement(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_ping() {
        assert!(check_ping(DatabaseType::Sqlite, 1).is_ok());
        match check_ping(DatabaseType::Oracle, 0) {
            Err(ConnectError::UnexpectedPing { statement, value }) => {
                assert_eq!(statement, "SELECT 1 FROM DUAL");
                assert_eq!(value, 0);
            }
            other => panic!("expected UnexpectedPing, got {other:?}"),
        }
    }
}
