//! SQLite dialect.
//!
//! SQLite ignores `VARCHAR` widths, and its `AUTOINCREMENT` keyword is only
//! legal on an `INTEGER PRIMARY KEY` column, so generated ids carry their
//! primary key inline instead of in the trailing constraint list.

use super::{DialectProfile, GeneratedIdStyle, BASE_PROFILE};
use crate::field::FieldType;

pub(super) static PROFILE: DialectProfile = DialectProfile {
    name: "SQLite",
    schemes: &["sqlite"],
    driver: "sqlite",
    varchar_width_supported: false,
    generated_id_sql_at_end: false,
    generated_id: GeneratedIdStyle::InlinePrimaryKey,
    create_if_not_exists_supported: true,
    file_backed: true,
    ..BASE_PROFILE
};

pub(super) fn type_name(field: &FieldType) -> Option<String> {
    if field.is_generated_id() && field.sql_type.is_integer() {
        return Some("INTEGER".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use crate::dialect::DatabaseType;
    use crate::field::{FieldType, SqlType};

    #[test]
    fn test_sqlite_dialect() {
        let db = DatabaseType::Sqlite;
        assert_eq!(db.name(), "SQLite");
        assert_eq!(db.entity_quote(), ('`', '`'));
        assert!(!db.is_varchar_field_width_supported());
        assert!(db.is_file_backed());
    }

    #[test]
    fn test_generated_long_id_is_integer() {
        let db = DatabaseType::Sqlite;
        let field = FieldType::new("id", SqlType::Long).generated_id();
        assert_eq!(db.column_type(&field), "INTEGER");
        let field = FieldType::new("count", SqlType::Long);
        assert_eq!(db.column_type(&field), "BIGINT");
    }
}
