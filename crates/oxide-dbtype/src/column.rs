//! Column definition rendering.
//!
//! [`DatabaseType::append_column_arg`] writes one column of a CREATE TABLE
//! statement. Everything that cannot live inside the column fragment (table
//! constraints, sequences, follow-up statements) is collected in a
//! [`TableStatements`] shared by all columns of the table.

use tracing::trace;

use crate::dialect::{DatabaseType, GeneratedIdStyle};
use crate::error::{DialectError, Result};
use crate::field::FieldType;

/// Side output of column rendering for one table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableStatements {
    /// Constraint clauses appended after the columns, inside the parentheses.
    pub additional_args: Vec<String>,
    /// Statements to run before CREATE TABLE.
    pub statements_before: Vec<String>,
    /// Statements to run after CREATE TABLE.
    pub statements_after: Vec<String>,
    /// Queries to run after CREATE TABLE.
    pub queries_after: Vec<String>,
    /// Write `IF NOT EXISTS` on the sequences created before the table.
    pub if_not_exists: bool,
}

impl TableStatements {
    /// Creates empty side output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates empty side output whose sequences tolerate existing ones.
    #[must_use]
    pub fn if_not_exists() -> Self {
        Self {
            if_not_exists: true,
            ..Self::default()
        }
    }
}

impl DatabaseType {
    /// Appends the definition of `field` to `sb`.
    ///
    /// The fragment has the shape
    /// `<column> <type>[(width)] [generated id] [PRIMARY KEY] [DEFAULT v] [NOT NULL]`.
    /// A primary key is inlined only when this dialect places generated ids
    /// inline; otherwise it is left for [`Self::add_primary_key_sql`].
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnsupportedGeneratedId`] when `field` asks for a
    /// sequence and the dialect has none, and
    /// [`DialectError::NonIntegerGeneratedId`] when an inlined generated id is
    /// not an integer.
    pub fn append_column_arg(
        self,
        table: &str,
        sb: &mut String,
        field: &FieldType,
        out: &mut TableStatements,
    ) -> Result<()> {
        let mut parts = vec![
            self.escaped_entity_name(field.column_name()),
            self.column_type(field),
        ];

        if let Some(sequence) = field.generated_id_sequence.as_deref() {
            if !self.is_sequences_supported() {
                return Err(DialectError::UnsupportedGeneratedId {
                    dialect: self.name(),
                    field: field.name.clone(),
                });
            }
            self.configure_generated_id_sequence(&mut parts, field, sequence, out)?;
        } else if field.generated_id {
            self.configure_generated_id(table, &mut parts, field, out)?;
        }

        if !field.is_generated_id() {
            if let Some(default) = self.render_default(&field.default) {
                parts.push(format!("DEFAULT {default}"));
            }
            if !field.nullable {
                parts.push("NOT NULL".to_string());
            }
            if field.unique {
                out.additional_args
                    .push(format!("UNIQUE ({})", self.escaped_entity_name(field.column_name())));
            }
        }

        let fragment = parts.join(" ");
        trace!(dialect = self.name(), column = %fragment, "rendered column");
        sb.push_str(&fragment);
        Ok(())
    }

    fn configure_generated_id(
        self,
        table: &str,
        parts: &mut Vec<String>,
        field: &FieldType,
        out: &mut TableStatements,
    ) -> Result<()> {
        match self.profile().generated_id {
            GeneratedIdStyle::Keyword(keyword) => parts.push(keyword.to_string()),
            GeneratedIdStyle::InlinePrimaryKey => {
                if !field.sql_type.is_integer() {
                    return Err(DialectError::NonIntegerGeneratedId {
                        dialect: self.name(),
                        field: field.name.clone(),
                    });
                }
                parts.push("PRIMARY KEY AUTOINCREMENT".to_string());
            }
            GeneratedIdStyle::Sequence => {
                let sequence = self.generate_id_sequence_name(table, field.column_name());
                self.configure_generated_id_sequence(parts, field, &sequence, out)?;
            }
        }
        Ok(())
    }

    /// Returns whether `field`'s primary key was already written inline.
    #[must_use]
    pub fn is_primary_key_inline(self, field: &FieldType) -> bool {
        field.generated_id
            && field.generated_id_sequence.is_none()
            && !self.profile().generated_id_sql_at_end
    }

    /// Adds one `PRIMARY KEY (...)` clause covering every id field that was not
    /// already inlined by [`Self::append_column_arg`].
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::CompositeGeneratedId`] when a field carries its
    /// primary key inline and other id fields remain, since a table has only
    /// one primary key.
    pub fn add_primary_key_sql(
        self,
        table: &str,
        fields: &[FieldType],
        out: &mut TableStatements,
    ) -> Result<()> {
        let (inline, deferred): (Vec<&FieldType>, Vec<&FieldType>) = fields
            .iter()
            .filter(|f| f.is_id())
            .partition(|f| self.is_primary_key_inline(f));
        if let Some(field) = inline.first() {
            if inline.len() > 1 || !deferred.is_empty() {
                return Err(DialectError::CompositeGeneratedId {
                    dialect: self.name(),
                    table: table.to_string(),
                    field: field.name.clone(),
                });
            }
        }
        if !deferred.is_empty() {
            let columns: Vec<String> = deferred
                .iter()
                .map(|f| self.escaped_entity_name(f.column_name()))
                .collect();
            out.additional_args
                .push(format!("PRIMARY KEY ({})", columns.join(",")));
        }
        Ok(())
    }

    /// Adds one `UNIQUE (...)` clause per unique-combo group, in field order.
    pub fn add_unique_combo_sql(self, fields: &[FieldType], out: &mut TableStatements) {
        let mut groups: Vec<(&str, Vec<String>)> = Vec::new();
        for field in fields {
            let Some(group) = field.unique_combo.as_deref() else {
                continue;
            };
            let column = self.escaped_entity_name(field.column_name());
            match groups.iter_mut().find(|(name, _)| *name == group) {
                Some((_, columns)) => columns.push(column),
                None => groups.push((group, vec![column])),
            }
        }
        for (_, columns) in groups {
            out.additional_args
                .push(format!("UNIQUE ({})", columns.join(",")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{DefaultValue, SqlType};

    fn render(db: DatabaseType, field: &FieldType) -> (String, TableStatements) {
        let mut sb = String::new();
        let mut out = TableStatements::new();
        db.append_column_arg("foo", &mut sb, field, &mut out).unwrap();
        (sb, out)
    }

    #[test]
    fn test_plain_column() {
        let field = FieldType::new("stuff", SqlType::String).not_null();
        let (sql, out) = render(DatabaseType::H2, &field);
        assert_eq!(sql, "`stuff` VARCHAR(255) NOT NULL");
        assert_eq!(out, TableStatements::default());
    }

    #[test]
    fn test_width_omitted_when_unsupported() {
        let field = FieldType::new("stuff", SqlType::String).width(10);
        let (sql, _) = render(DatabaseType::Sqlite, &field);
        assert_eq!(sql, "`stuff` VARCHAR");
    }

    #[test]
    fn test_id_is_deferred() {
        let field = FieldType::new("id", SqlType::String).id();
        let (sql, mut out) = render(DatabaseType::Postgres, &field);
        assert_eq!(sql, "\"id\" VARCHAR(255)");
        DatabaseType::Postgres
            .add_primary_key_sql("foo", std::slice::from_ref(&field), &mut out)
            .unwrap();
        assert_eq!(out.additional_args, vec!["PRIMARY KEY (\"id\")"]);
    }

    #[test]
    fn test_sqlite_generated_id_inline() {
        let field = FieldType::new("id", SqlType::Long).generated_id();
        let (sql, mut out) = render(DatabaseType::Sqlite, &field);
        assert_eq!(sql, "`id` INTEGER PRIMARY KEY AUTOINCREMENT");
        DatabaseType::Sqlite
            .add_primary_key_sql("foo", std::slice::from_ref(&field), &mut out)
            .unwrap();
        assert!(out.additional_args.is_empty());
    }

    #[test]
    fn test_keyword_generated_ids() {
        let field = FieldType::new("id", SqlType::Integer).generated_id();
        assert_eq!(
            render(DatabaseType::MySql, &field).0,
            "`id` INTEGER AUTO_INCREMENT"
        );
        assert_eq!(
            render(DatabaseType::SqlServer, &field).0,
            "[id] INTEGER IDENTITY(1,1)"
        );
        assert_eq!(
            render(DatabaseType::Derby, &field).0,
            "\"id\" INTEGER GENERATED BY DEFAULT AS IDENTITY"
        );
    }

    #[test]
    fn test_postgres_generated_id_uses_derived_sequence() {
        let field = FieldType::new("id", SqlType::Integer).generated_id();
        let (sql, out) = render(DatabaseType::Postgres, &field);
        assert_eq!(sql, "\"id\" INTEGER DEFAULT NEXTVAL('\"foo_id_seq\"')");
        assert_eq!(out.statements_before, vec!["CREATE SEQUENCE \"foo_id_seq\""]);
    }

    #[test]
    fn test_sequence_rejected_without_support() {
        let field = FieldType::new("genId", SqlType::Integer).generated_id_sequence("genId_seq");
        let mut sb = String::new();
        let mut out = TableStatements::new();
        let err = DatabaseType::H2
            .append_column_arg("foo", &mut sb, &field, &mut out)
            .unwrap_err();
        assert!(matches!(err, DialectError::UnsupportedGeneratedId { .. }));
        assert!(out.statements_before.is_empty());
    }

    #[test]
    fn test_oracle_sequence_goes_before() {
        let field = FieldType::new("genId", SqlType::Integer).generated_id_sequence("genId_seq");
        let (sql, out) = render(DatabaseType::Oracle, &field);
        assert_eq!(sql, "\"genId\" INTEGER");
        assert_eq!(out.statements_before, vec!["CREATE SEQUENCE \"genId_seq\""]);
    }

    #[test]
    fn test_default_and_unique() {
        let field = FieldType::new("flag", SqlType::Boolean)
            .default(DefaultValue::Bool(false))
            .not_null()
            .unique();
        let (sql, out) = render(DatabaseType::Postgres, &field);
        assert_eq!(sql, "\"flag\" BOOLEAN DEFAULT FALSE NOT NULL");
        assert_eq!(out.additional_args, vec!["UNIQUE (\"flag\")"]);
    }

    #[test]
    fn test_string_default_is_escaped() {
        let field = FieldType::new("name", SqlType::String)
            .default(DefaultValue::String("o'neil".to_string()));
        let (sql, _) = render(DatabaseType::H2, &field);
        assert_eq!(sql, "`name` VARCHAR(255) DEFAULT 'o''neil'");
    }

    #[test]
    fn test_composite_primary_key() {
        let fields = vec![
            FieldType::new("a", SqlType::Integer).id(),
            FieldType::new("b", SqlType::Integer).id(),
            FieldType::new("c", SqlType::Integer),
        ];
        let mut out = TableStatements::new();
        DatabaseType::MySql
            .add_primary_key_sql("foo", &fields, &mut out)
            .unwrap();
        assert_eq!(out.additional_args, vec!["PRIMARY KEY (`a`,`b`)"]);
    }

    #[test]
    fn test_sqlite_inline_key_cannot_join_other_ids() {
        let fields = vec![
            FieldType::new("id", SqlType::Long).generated_id(),
            FieldType::new("k", SqlType::Integer).id(),
        ];
        let mut out = TableStatements::new();
        let err = DatabaseType::Sqlite
            .add_primary_key_sql("foo", &fields, &mut out)
            .unwrap_err();
        assert!(matches!(err, DialectError::CompositeGeneratedId { ref field, .. } if field == "id"));
        assert!(out.additional_args.is_empty());

        // Dialects that defer every key keep them in one clause.
        let mut out = TableStatements::new();
        DatabaseType::H2
            .add_primary_key_sql("foo", &fields, &mut out)
            .unwrap();
        assert_eq!(out.additional_args, vec!["PRIMARY KEY (`id`,`k`)"]);
    }

    #[test]
    fn test_sqlite_generated_id_must_be_integer() {
        let field = FieldType::new("id", SqlType::String).generated_id();
        let mut sb = String::new();
        let mut out = TableStatements::new();
        let err = DatabaseType::Sqlite
            .append_column_arg("foo", &mut sb, &field, &mut out)
            .unwrap_err();
        assert!(matches!(err, DialectError::NonIntegerGeneratedId { .. }));
        assert!(sb.is_empty());

        let field = FieldType::new("id", SqlType::Short).generated_id();
        assert_eq!(
            render(DatabaseType::Sqlite, &field).0,
            "`id` INTEGER PRIMARY KEY AUTOINCREMENT"
        );
    }

    #[test]
    fn test_sequence_without_generated_flag() {
        let field: FieldType = serde_json::from_str(
            r#"{"name": "id", "sql_type": "long", "generated_id_sequence": "my_seq", "nullable": false}"#,
        )
        .unwrap();
        let (sql, out) = render(DatabaseType::Postgres, &field);
        assert_eq!(sql, "\"id\" BIGINT DEFAULT NEXTVAL('\"my_seq\"')");
        assert_eq!(out.statements_before, vec!["CREATE SEQUENCE \"my_seq\""]);
    }

    #[test]
    fn test_sequences_tolerate_existing_ones() {
        let field = FieldType::new("id", SqlType::Integer).generated_id();
        let mut sb = String::new();
        let mut out = TableStatements::if_not_exists();
        DatabaseType::Postgres
            .append_column_arg("foo", &mut sb, &field, &mut out)
            .unwrap();
        assert_eq!(
            out.statements_before,
            vec!["CREATE SEQUENCE IF NOT EXISTS \"foo_id_seq\""]
        );
    }

    #[test]
    fn test_unique_combo_groups() {
        let fields = vec![
            FieldType::new("a", SqlType::Integer).unique_combo("ab"),
            FieldType::new("x", SqlType::Integer).unique_combo("x"),
            FieldType::new("b", SqlType::Integer).unique_combo("ab"),
        ];
        let mut out = TableStatements::new();
        DatabaseType::H2.add_unique_combo_sql(&fields, &mut out);
        assert_eq!(out.additional_args, vec!["UNIQUE (`a`,`b`)", "UNIQUE (`x`)"]);
    }
}
