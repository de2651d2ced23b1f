//! SQL dialect support.
//!
//! Every supported backend is one variant of [`DatabaseType`]. A variant maps
//! to a static [`DialectProfile`] holding its quoting rules, ping statement,
//! driver name and capability flags, plus a handful of per-backend hooks for
//! column types and generated ids that live in the submodules.

mod db2;
mod derby;
mod h2;
mod hsqldb;
mod mysql;
mod oracle;
mod postgres;
mod sqlite;
mod sqlserver;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::column::TableStatements;
use crate::error::DialectError;
use crate::field::{DefaultValue, FieldType, SqlType};

/// Prefix used for SQL comment lines in every dialect.
pub const COMMENT_LINE_PREFIX: &str = "-- ";

/// How a dialect renders a database-generated id column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratedIdStyle {
    /// A keyword appended to the column (e.g. `AUTO_INCREMENT`).
    Keyword(&'static str),
    /// `PRIMARY KEY AUTOINCREMENT` inlined into the column.
    InlinePrimaryKey,
    /// A sequence named after the table and column backs the id.
    Sequence,
}

/// Fixed per-backend rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DialectProfile {
    /// Dialect name.
    pub name: &'static str,
    /// URL schemes that resolve to this dialect; the first is canonical.
    pub schemes: &'static [&'static str],
    /// Opening and closing identifier quote characters.
    pub entity_quote: (char, char),
    /// String literal quote character.
    pub literal_quote: char,
    /// Name of the backend driver.
    pub driver: &'static str,
    /// Statement used to check that a connection is alive.
    pub ping_statement: &'static str,
    /// Whether `VARCHAR(n)` may carry a width.
    pub varchar_width_supported: bool,
    /// Whether SELECT supports a row limit.
    pub limit_supported: bool,
    /// Whether the limit goes right after `SELECT`.
    pub limit_after_select: bool,
    /// Whether SELECT supports an offset.
    pub offset_supported: bool,
    /// Whether the offset is an argument of the LIMIT clause.
    pub offset_in_limit: bool,
    /// Whether `CREATE SEQUENCE` is available.
    pub sequences_supported: bool,
    /// Whether generated-id primary keys go into the trailing PRIMARY KEY clause.
    pub generated_id_sql_at_end: bool,
    /// Generated id rendering.
    pub generated_id: GeneratedIdStyle,
    /// Whether `CREATE TABLE IF NOT EXISTS` is accepted.
    pub create_if_not_exists_supported: bool,
    /// Whether bind parameters are numbered (`$1`) instead of `?`.
    pub numbered_placeholders: bool,
    /// Whether the database lives in a local file named by the URL.
    pub file_backed: bool,
    /// Text appended after the closing parenthesis of CREATE TABLE.
    pub create_table_suffix: Option<&'static str>,
}

/// Base profile the backend profiles override.
pub(crate) const BASE_PROFILE: DialectProfile = DialectProfile {
    name: "base",
    schemes: &[],
    entity_quote: ('`', '`'),
    literal_quote: '\'',
    driver: "",
    ping_statement: "SELECT 1",
    varchar_width_supported: true,
    limit_supported: true,
    limit_after_select: false,
    offset_supported: true,
    offset_in_limit: false,
    sequences_supported: false,
    generated_id_sql_at_end: true,
    generated_id: GeneratedIdStyle::Keyword("AUTO_INCREMENT"),
    create_if_not_exists_supported: false,
    numbered_placeholders: false,
    file_backed: false,
    create_table_suffix: None,
};

/// A supported database backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    /// H2.
    H2,
    /// Apache Derby.
    Derby,
    /// HyperSQL.
    Hsqldb,
    /// MySQL.
    MySql,
    /// MariaDB.
    MariaDb,
    /// PostgreSQL.
    Postgres,
    /// SQLite.
    Sqlite,
    /// Oracle.
    Oracle,
    /// Microsoft SQL Server.
    SqlServer,
    /// IBM DB2.
    Db2,
}

impl DatabaseType {
    /// Every supported backend, in resolution order.
    pub const ALL: [Self; 10] = [
        Self::H2,
        Self::Derby,
        Self::Hsqldb,
        Self::MySql,
        Self::MariaDb,
        Self::Postgres,
        Self::Sqlite,
        Self::Oracle,
        Self::SqlServer,
        Self::Db2,
    ];

    /// Returns the fixed rules of this backend.
    #[must_use]
    pub fn profile(self) -> &'static DialectProfile {
        match self {
            Self::H2 => &h2::PROFILE,
            Self::Derby => &derby::PROFILE,
            Self::Hsqldb => &hsqldb::PROFILE,
            Self::MySql => &mysql::PROFILE,
            Self::MariaDb => &mysql::MARIADB_PROFILE,
            Self::Postgres => &postgres::PROFILE,
            Self::Sqlite => &sqlite::PROFILE,
            Self::Oracle => &oracle::PROFILE,
            Self::SqlServer => &sqlserver::PROFILE,
            Self::Db2 => &db2::PROFILE,
        }
    }

    /// Returns the dialect name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.profile().name
    }

    /// Returns the canonical URL scheme.
    #[must_use]
    pub fn scheme(self) -> &'static str {
        self.profile().schemes[0]
    }

    /// Returns the prefix for SQL comment lines.
    #[must_use]
    pub fn comment_line_prefix(self) -> &'static str {
        COMMENT_LINE_PREFIX
    }

    /// Returns the identifier quote characters.
    #[must_use]
    pub fn entity_quote(self) -> (char, char) {
        self.profile().entity_quote
    }

    /// Returns the string literal quote character.
    #[must_use]
    pub fn literal_quote(self) -> char {
        self.profile().literal_quote
    }

    /// Returns the backend driver name.
    #[must_use]
    pub fn driver_name(self) -> &'static str {
        self.profile().driver
    }

    /// Returns the statement used to ping a connection.
    #[must_use]
    pub fn ping_statement(self) -> &'static str {
        self.profile().ping_statement
    }

    /// Returns whether `VARCHAR` columns may carry a width.
    #[must_use]
    pub fn is_varchar_field_width_supported(self) -> bool {
        self.profile().varchar_width_supported
    }

    /// Returns whether SELECT supports a row limit.
    #[must_use]
    pub fn is_limit_sql_supported(self) -> bool {
        self.profile().limit_supported
    }

    /// Returns whether the limit is written right after `SELECT`.
    #[must_use]
    pub fn is_limit_after_select(self) -> bool {
        self.profile().limit_after_select
    }

    /// Returns whether SELECT supports an offset.
    #[must_use]
    pub fn is_offset_sql_supported(self) -> bool {
        self.profile().offset_supported
    }

    /// Returns whether the offset is written inside the LIMIT clause.
    #[must_use]
    pub fn is_offset_limit_argument(self) -> bool {
        self.profile().offset_in_limit
    }

    /// Returns whether sequences are available for generated ids.
    #[must_use]
    pub fn is_sequences_supported(self) -> bool {
        self.profile().sequences_supported
    }

    /// Returns whether `CREATE TABLE IF NOT EXISTS` is accepted.
    #[must_use]
    pub fn is_create_if_not_exists_supported(self) -> bool {
        self.profile().create_if_not_exists_supported
    }

    /// Returns whether the database lives in a local file.
    #[must_use]
    pub fn is_file_backed(self) -> bool {
        self.profile().file_backed
    }

    /// Appends `name` quoted as an identifier.
    ///
    /// Dotted names are quoted part by part so `schema.table` stays qualified.
    pub fn append_escaped_entity_name(self, sb: &mut String, name: &str) {
        let (open, close) = self.entity_quote();
        for (i, part) in name.split('.').enumerate() {
            if i > 0 {
                sb.push('.');
            }
            sb.push(open);
            for c in part.chars() {
                if c == close {
                    sb.push(close);
                }
                sb.push(c);
            }
            sb.push(close);
        }
    }

    /// Returns `name` quoted as an identifier.
    #[must_use]
    pub fn escaped_entity_name(self, name: &str) -> String {
        let mut sb = String::with_capacity(name.len() + 2);
        self.append_escaped_entity_name(&mut sb, name);
        sb
    }

    /// Appends `word` quoted as a string literal.
    pub fn append_escaped_word(self, sb: &mut String, word: &str) {
        let quote = self.literal_quote();
        sb.push(quote);
        for c in word.chars() {
            if c == quote {
                sb.push(quote);
            }
            sb.push(c);
        }
        sb.push(quote);
    }

    /// Returns `word` quoted as a string literal.
    #[must_use]
    pub fn escaped_word(self, word: &str) -> String {
        let mut sb = String::with_capacity(word.len() + 2);
        self.append_escaped_word(&mut sb, word);
        sb
    }

    /// Returns the bind placeholder for the 1-based parameter `index`.
    #[must_use]
    pub fn placeholder(self, index: usize) -> String {
        if self.profile().numbered_placeholders {
            format!("${index}")
        } else {
            String::from("?")
        }
    }

    /// Derives the sequence name used for a generated id without an explicit sequence.
    #[must_use]
    pub fn generate_id_sequence_name(self, table: &str, column: &str) -> String {
        let name = format!("{table}_{column}_seq");
        match self {
            Self::Oracle => oracle::upper_case_entity_name(&name),
            _ => name,
        }
    }

    /// Returns the sequence backing `field`, if this dialect uses one for it.
    #[must_use]
    pub fn sequence_name_for(self, table: &str, field: &FieldType) -> Option<String> {
        if !self.is_sequences_supported() || !field.is_generated_id() {
            return None;
        }
        match &field.generated_id_sequence {
            Some(seq) => Some(seq.clone()),
            None if self.profile().generated_id == GeneratedIdStyle::Sequence => {
                Some(self.generate_id_sequence_name(table, field.column_name()))
            }
            None => None,
        }
    }

    /// Returns the query that fetches the next value of a sequence.
    #[must_use]
    pub fn next_sequence_value_query(self, sequence: &str) -> Option<String> {
        let seq = self.escaped_entity_name(sequence);
        match self {
            Self::Postgres => Some(format!("SELECT NEXTVAL('{seq}')")),
            Self::Oracle => Some(format!("SELECT {seq}.nextval FROM dual")),
            Self::Hsqldb => Some(format!("CALL NEXT VALUE FOR {seq}")),
            _ => None,
        }
    }

    /// Returns the column type for `field`, width included when supported.
    #[must_use]
    pub fn column_type(self, field: &FieldType) -> String {
        let specific = match self {
            Self::H2 => h2::type_name(field),
            Self::Derby => derby::type_name(field),
            Self::Hsqldb => hsqldb::type_name(field),
            Self::MySql | Self::MariaDb => mysql::type_name(field),
            Self::Postgres => postgres::type_name(field),
            Self::Sqlite => sqlite::type_name(field),
            Self::Oracle => oracle::type_name(field),
            Self::SqlServer => sqlserver::type_name(field),
            Self::Db2 => db2::type_name(field),
        };
        specific.unwrap_or_else(|| self.base_type_name(field))
    }

    fn base_type_name(self, field: &FieldType) -> String {
        match field.sql_type {
            SqlType::String | SqlType::Uuid => self.varchar(field, "VARCHAR"),
            SqlType::LongString => "TEXT".to_string(),
            SqlType::Boolean => "BOOLEAN".to_string(),
            SqlType::Date => "TIMESTAMP".to_string(),
            SqlType::Char => "CHAR".to_string(),
            SqlType::Byte => "TINYINT".to_string(),
            SqlType::ByteArray | SqlType::Serializable => "BLOB".to_string(),
            SqlType::Short => "SMALLINT".to_string(),
            SqlType::Integer => "INTEGER".to_string(),
            SqlType::Long => "BIGINT".to_string(),
            SqlType::Float => "FLOAT".to_string(),
            SqlType::Double => "DOUBLE PRECISION".to_string(),
            SqlType::BigDecimal => "NUMERIC".to_string(),
        }
    }

    /// Renders a character type with the field width, or bare when widths are unsupported.
    pub(crate) fn varchar(self, field: &FieldType, type_name: &str) -> String {
        match field.effective_width() {
            Some(width) if self.is_varchar_field_width_supported() => {
                format!("{type_name}({width})")
            }
            _ => type_name.to_string(),
        }
    }

    /// Renders a default value.
    #[must_use]
    pub fn render_default(self, default: &DefaultValue) -> Option<String> {
        match default {
            DefaultValue::None => None,
            DefaultValue::Null => Some("NULL".to_string()),
            DefaultValue::Bool(b) => {
                let literal = match (self, *b) {
                    (Self::Postgres | Self::H2 | Self::Hsqldb, true) => "TRUE",
                    (Self::Postgres | Self::H2 | Self::Hsqldb, false) => "FALSE",
                    (_, true) => "1",
                    (_, false) => "0",
                };
                Some(literal.to_string())
            }
            DefaultValue::Integer(i) => Some(i.to_string()),
            DefaultValue::Float(f) => Some(f.to_string()),
            DefaultValue::String(s) => Some(self.escaped_word(s)),
            DefaultValue::Expression(expr) => Some(expr.clone()),
        }
    }

    /// Renders the sequence-backed part of a generated id column.
    pub(crate) fn configure_generated_id_sequence(
        self,
        parts: &mut Vec<String>,
        field: &FieldType,
        sequence: &str,
        out: &mut TableStatements,
    ) -> Result<(), DialectError> {
        let if_not_exists = out.if_not_exists && self.is_create_if_not_exists_supported();
        let before = &mut out.statements_before;
        match self {
            Self::Postgres => {
                postgres::configure_sequence(self, parts, sequence, if_not_exists, before);
            }
            Self::Oracle => oracle::configure_sequence(self, sequence, before),
            Self::Hsqldb => {
                hsqldb::configure_sequence(self, parts, field, sequence, if_not_exists, before);
            }
            _ => {
                return Err(DialectError::UnsupportedGeneratedId {
                    dialect: self.name(),
                    field: field.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Writes the LIMIT (and folded OFFSET) clause, space terminated.
    pub(crate) fn append_limit_value(self, sb: &mut String, limit: u64, offset: Option<u64>) {
        match self {
            Self::SqlServer => sqlserver::append_limit_value(sb, limit),
            Self::Hsqldb => hsqldb::append_limit_value(sb, limit, offset),
            Self::MySql | Self::MariaDb => mysql::append_limit_value(sb, limit, offset),
            _ => {
                sb.push_str("LIMIT ");
                sb.push_str(&limit.to_string());
                sb.push(' ');
            }
        }
    }

    /// Writes the standalone OFFSET clause, space terminated.
    pub(crate) fn append_offset_value(self, sb: &mut String, offset: u64) {
        sb.push_str("OFFSET ");
        sb.push_str(&offset.to_string());
        sb.push(' ');
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DatabaseType {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::resolve::resolve(s)
    }
}
