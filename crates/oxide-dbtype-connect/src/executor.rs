//! Table executor.
//!
//! Runs the CREATE TABLE / DROP TABLE statements rendered for a
//! [`TableInfo`] against a [`ConnectionSource`], in order, on one connection.

use oxide_dbtype::{DatabaseType, TableDdl, TableInfo};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::source::ConnectionSource;

/// Creates and drops tables through a connection source.
#[derive(Debug, Clone)]
pub struct TableExecutor {
    source: ConnectionSource,
    dry_run: bool,
}

impl TableExecutor {
    /// Creates a new table executor.
    #[must_use]
    pub const fn new(source: ConnectionSource) -> Self {
        Self {
            source,
            dry_run: false,
        }
    }

    /// Enables dry-run mode (SQL is printed but not executed).
    #[must_use]
    pub const fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Returns the connection source.
    #[must_use]
    pub const fn source(&self) -> &ConnectionSource {
        &self.source
    }

    /// Returns the database type statements are rendered for.
    #[must_use]
    pub const fn database_type(&self) -> DatabaseType {
        self.source.database_type()
    }

    /// Renders the statements that create `table`.
    ///
    /// # Errors
    ///
    /// Propagates rendering errors such as unsupported generated ids.
    pub fn sql_for_create(&self, table: &TableInfo, if_not_exists: bool) -> Result<TableDdl> {
        Ok(self
            .database_type()
            .create_table_statements(table, if_not_exists)?)
    }

    /// Creates `table`. Returns the number of statements run.
    ///
    /// # Errors
    ///
    /// Propagates rendering errors and the first database error.
    pub async fn create_table(&self, table: &TableInfo) -> Result<usize> {
        self.create(table, false).await
    }

    /// Creates `table` with `IF NOT EXISTS` where the dialect accepts it.
    ///
    /// # Errors
    ///
    /// Propagates rendering errors and the first database error.
    pub async fn create_table_if_not_exists(&self, table: &TableInfo) -> Result<usize> {
        if !self.database_type().is_create_if_not_exists_supported() {
            warn!(
                dialect = self.database_type().name(),
                table = %table.name,
                "IF NOT EXISTS not supported, creating unconditionally"
            );
        }
        self.create(table, true).await
    }

    async fn create(&self, table: &TableInfo, if_not_exists: bool) -> Result<usize> {
        info!(
            dialect = self.database_type().name(),
            table = %table.name,
            "Creating table"
        );
        let ddl = self.sql_for_create(table, if_not_exists)?;
        let count = self.run(&ddl, false).await?;
        info!(table = %table.name, statements = count, "Table created");
        Ok(count)
    }

    /// Drops `table` and the sequences created with it.
    ///
    /// With `ignore_errors`, failing statements are logged and skipped.
    /// Returns the number of statements that succeeded.
    ///
    /// # Errors
    ///
    /// Returns the first database error unless `ignore_errors` is set.
    pub async fn drop_table(&self, table: &TableInfo, ignore_errors: bool) -> Result<usize> {
        info!(
            dialect = self.database_type().name(),
            table = %table.name,
            "Dropping table"
        );
        let ddl = self.database_type().drop_table_statements(table, false);
        let count = self.run(&ddl, ignore_errors).await?;
        info!(table = %table.name, statements = count, "Table dropped");
        Ok(count)
    }

    async fn run(&self, ddl: &TableDdl, ignore_errors: bool) -> Result<usize> {
        if self.dry_run {
            let mut count = 0;
            for sql in ddl.all_sql() {
                debug!(sql = %sql, "Executing SQL");
                println!("{sql};");
                count += 1;
            }
            return Ok(count);
        }

        let mut conn = self.source.read_write_connection().await?;
        let mut count = 0;
        for sql in ddl.statements() {
            debug!(sql = %sql, "Executing SQL");
            match sqlx::query(sql).execute(&mut *conn).await {
                Ok(_) => count += 1,
                Err(e) if ignore_errors => {
                    warn!(sql = %sql, error = %e, "Ignoring failed statement");
                }
                Err(e) => return Err(e.into()),
            }
        }
        for sql in &ddl.queries_after {
            debug!(sql = %sql, "Running query");
            let rows = sqlx::query(sql).fetch_all(&mut *conn).await?;
            debug!(sql = %sql, rows = rows.len(), "Query returned");
            count += 1;
        }
        Ok(count)
    }
}
