//! CREATE TABLE / DROP TABLE assembly.

use tracing::debug;

use crate::column::TableStatements;
use crate::dialect::DatabaseType;
use crate::error::{DialectError, Result};
use crate::field::TableInfo;

/// The statements that create or drop one table, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableDdl {
    /// Statements run first (sequences).
    pub statements_before: Vec<String>,
    /// The CREATE TABLE or DROP TABLE statement itself.
    pub main: String,
    /// Statements run after the main statement.
    pub statements_after: Vec<String>,
    /// Queries run last.
    pub queries_after: Vec<String>,
}

impl TableDdl {
    /// Returns every statement (queries excluded) in execution order.
    pub fn statements(&self) -> impl Iterator<Item = &str> {
        self.statements_before
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.main.as_str()))
            .chain(self.statements_after.iter().map(String::as_str))
    }

    /// Returns every statement followed by every query.
    #[must_use]
    pub fn all_sql(&self) -> Vec<String> {
        self.statements()
            .map(str::to_string)
            .chain(self.queries_after.iter().cloned())
            .collect()
    }
}

impl DatabaseType {
    /// Builds the statements that create `table`.
    ///
    /// `IF NOT EXISTS` is only written when the dialect accepts it, and then
    /// on the sequences created with the table as well.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::EmptyTable`] for a table without fields and
    /// propagates column rendering errors.
    pub fn create_table_statements(self, table: &TableInfo, if_not_exists: bool) -> Result<TableDdl> {
        if table.fields.is_empty() {
            return Err(DialectError::EmptyTable {
                table: table.name.clone(),
            });
        }

        let guarded = if_not_exists && self.is_create_if_not_exists_supported();
        let mut out = if guarded {
            TableStatements::if_not_exists()
        } else {
            TableStatements::new()
        };
        let mut columns = Vec::with_capacity(table.fields.len());
        for field in &table.fields {
            let mut sb = String::new();
            self.append_column_arg(&table.name, &mut sb, field, &mut out)?;
            columns.push(sb);
        }
        self.add_primary_key_sql(&table.name, &table.fields, &mut out)?;
        self.add_unique_combo_sql(&table.fields, &mut out);

        let mut sql = String::from("CREATE TABLE ");
        if guarded {
            sql.push_str("IF NOT EXISTS ");
        }
        self.append_escaped_entity_name(&mut sql, &table.name);
        sql.push_str(" (");
        columns.extend(out.additional_args);
        sql.push_str(&columns.join(", "));
        sql.push(')');
        if let Some(suffix) = self.profile().create_table_suffix {
            sql.push(' ');
            sql.push_str(suffix);
        }
        debug!(dialect = self.name(), table = %table.name, sql = %sql, "built CREATE TABLE");

        Ok(TableDdl {
            statements_before: out.statements_before,
            main: sql,
            statements_after: out.statements_after,
            queries_after: out.queries_after,
        })
    }

    /// Builds the statements that drop `table` and the sequences created with it.
    #[must_use]
    pub fn drop_table_statements(self, table: &TableInfo, if_exists: bool) -> TableDdl {
        let guard = if if_exists && self.is_create_if_not_exists_supported() {
            "IF EXISTS "
        } else {
            ""
        };
        let mut sql = format!("DROP TABLE {guard}");
        self.append_escaped_entity_name(&mut sql, &table.name);

        let statements_after = table
            .fields
            .iter()
            .filter_map(|f| self.sequence_name_for(&table.name, f))
            .map(|seq| format!("DROP SEQUENCE {guard}{}", self.escaped_entity_name(&seq)))
            .collect();

        TableDdl {
            main: sql,
            statements_after,
            ..TableDdl::default()
        }
    }
}
