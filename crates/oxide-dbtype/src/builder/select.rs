//! SELECT statement builder.
//!
//! Every token is written with a trailing space, so a PostgreSQL query with
//! a limit renders as `SELECT * FROM "foo" LIMIT 1232 `.

use super::expr::Condition;
use super::value::SqlValue;
use crate::dialect::DatabaseType;
use crate::error::{DialectError, Result};

/// A SELECT statement for one table, rendered for one [`DatabaseType`].
///
/// LIMIT and OFFSET are validated against the dialect when they are set,
/// and placed where the dialect expects them when the query is built.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    db: DatabaseType,
    table: String,
    distinct: bool,
    columns: Vec<String>,
    where_clause: Option<Condition>,
    order_by: Vec<(String, bool)>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl QueryBuilder {
    /// Creates a `SELECT *` over `table`.
    #[must_use]
    pub fn new(db: DatabaseType, table: &str) -> Self {
        Self {
            db,
            table: String::from(table),
            distinct: false,
            columns: vec![],
            where_clause: None,
            order_by: vec![],
            limit: None,
            offset: None,
        }
    }

    /// Returns the dialect this query renders for.
    #[must_use]
    pub const fn database_type(&self) -> DatabaseType {
        self.db
    }

    /// Selects the given columns instead of `*`.
    #[must_use]
    pub fn columns(mut self, cols: &[&str]) -> Self {
        self.columns = cols.iter().map(|c| String::from(*c)).collect();
        self
    }

    /// Adds DISTINCT.
    #[must_use]
    pub const fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Adds a WHERE condition. Repeated calls are combined with AND.
    #[must_use]
    pub fn where_clause(mut self, cond: Condition) -> Self {
        self.where_clause = Some(match self.where_clause.take() {
            Some(existing) => existing.and(cond),
            None => cond,
        });
        self
    }

    /// Adds an ORDER BY column.
    #[must_use]
    pub fn order_by(mut self, column: &str, ascending: bool) -> Self {
        self.order_by.push((String::from(column), ascending));
        self
    }

    /// Limits the number of returned rows.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnsupportedLimit`] when the dialect cannot
    /// limit a SELECT.
    pub fn limit(mut self, n: u64) -> Result<Self> {
        if !self.db.is_limit_sql_supported() {
            return Err(DialectError::UnsupportedLimit {
                dialect: self.db.name(),
            });
        }
        self.limit = Some(n);
        Ok(self)
    }

    /// Skips the first `n` rows.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnsupportedOffset`] when the dialect cannot
    /// offset a SELECT.
    pub fn offset(mut self, n: u64) -> Result<Self> {
        if !self.db.is_offset_sql_supported() {
            return Err(DialectError::UnsupportedOffset {
                dialect: self.db.name(),
            });
        }
        self.offset = Some(n);
        Ok(self)
    }

    /// Builds the SQL text and its bind parameters.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::OffsetWithoutLimit`] when an offset is set
    /// without a limit on a dialect that writes the offset inside LIMIT.
    pub fn build(self) -> Result<(String, Vec<SqlValue>)> {
        let db = self.db;
        if self.offset.is_some() && self.limit.is_none() && db.is_offset_limit_argument() {
            return Err(DialectError::OffsetWithoutLimit { dialect: db.name() });
        }
        let folded_offset = if db.is_offset_limit_argument() {
            self.offset
        } else {
            None
        };

        let mut sql = String::from("SELECT ");
        let mut params = vec![];

        // HSQLDB wants LIMIT ahead of DISTINCT, SQL Server wants TOP after it.
        let limit_before_distinct = db.is_limit_after_select() && db.is_offset_limit_argument();
        if limit_before_distinct {
            if let Some(limit) = self.limit {
                db.append_limit_value(&mut sql, limit, folded_offset);
            }
        }
        if self.distinct {
            sql.push_str("DISTINCT ");
        }
        if db.is_limit_after_select() && !limit_before_distinct {
            if let Some(limit) = self.limit {
                db.append_limit_value(&mut sql, limit, folded_offset);
            }
        }

        if self.columns.is_empty() {
            sql.push('*');
        } else {
            for (i, column) in self.columns.iter().enumerate() {
                if i > 0 {
                    sql.push(',');
                }
                db.append_escaped_entity_name(&mut sql, column);
            }
        }
        sql.push_str(" FROM ");
        db.append_escaped_entity_name(&mut sql, &self.table);
        sql.push(' ');

        if let Some(cond) = &self.where_clause {
            sql.push_str("WHERE ");
            cond.render(db, &mut sql, &mut params);
            sql.push(' ');
        }

        if !self.order_by.is_empty() {
            sql.push_str("ORDER BY ");
            for (i, (column, ascending)) in self.order_by.iter().enumerate() {
                if i > 0 {
                    sql.push(',');
                }
                db.append_escaped_entity_name(&mut sql, column);
                if !ascending {
                    sql.push_str(" DESC");
                }
            }
            sql.push(' ');
        }

        if !db.is_limit_after_select() {
            if let Some(limit) = self.limit {
                db.append_limit_value(&mut sql, limit, folded_offset);
            }
        }
        if !db.is_offset_limit_argument() {
            if let Some(offset) = self.offset {
                db.append_offset_value(&mut sql, offset);
            }
        }

        Ok((sql, params))
    }

    /// Builds only the SQL text.
    ///
    /// # Errors
    ///
    /// Same as [`Self::build`].
    pub fn build_sql(self) -> Result<String> {
        self.build().map(|(sql, _)| sql)
    }
}
