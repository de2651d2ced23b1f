//! PostgreSQL dialect.

use super::{DatabaseType, DialectProfile, GeneratedIdStyle, BASE_PROFILE};
use crate::field::{FieldType, SqlType};

/// PostgreSQL has no AUTO_INCREMENT keyword; generated ids are backed by a
/// sequence named `<table>_<column>_seq` unless the field names one.
pub(super) static PROFILE: DialectProfile = DialectProfile {
    name: "PostgreSQL",
    schemes: &["postgresql", "postgres"],
    entity_quote: ('"', '"'),
    driver: "postgres",
    sequences_supported: true,
    generated_id: GeneratedIdStyle::Sequence,
    create_if_not_exists_supported: true,
    numbered_placeholders: true,
    ..BASE_PROFILE
};

pub(super) fn type_name(field: &FieldType) -> Option<String> {
    match field.sql_type {
        SqlType::Byte => Some("SMALLINT".to_string()),
        SqlType::ByteArray | SqlType::Serializable => Some("BYTEA".to_string()),
        SqlType::Uuid => Some("UUID".to_string()),
        _ => None,
    }
}

/// The sequence name is quoted as an identifier inside the NEXTVAL literal so
/// mixed-case names survive.
pub(super) fn configure_sequence(
    db: DatabaseType,
    parts: &mut Vec<String>,
    sequence: &str,
    if_not_exists: bool,
    statements_before: &mut Vec<String>,
) {
    let seq = db.escaped_entity_name(sequence);
    let guard = if if_not_exists { "IF NOT EXISTS " } else { "" };
    statements_before.push(format!("CREATE SEQUENCE {guard}{seq}"));
    parts.push(format!("DEFAULT NEXTVAL({})", db.escaped_word(&seq)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgres_data_types() {
        let db = DatabaseType::Postgres;
        assert_eq!(
            db.column_type(&FieldType::new("n", SqlType::Integer)),
            "INTEGER"
        );
        assert_eq!(db.column_type(&FieldType::new("n", SqlType::Long)), "BIGINT");
        assert_eq!(
            db.column_type(&FieldType::new("s", SqlType::LongString)),
            "TEXT"
        );
        assert_eq!(
            db.column_type(&FieldType::new("s", SqlType::String).width(255)),
            "VARCHAR(255)"
        );
        assert_eq!(
            db.column_type(&FieldType::new("b", SqlType::ByteArray)),
            "BYTEA"
        );
        assert_eq!(
            db.column_type(&FieldType::new("b", SqlType::Boolean)),
            "BOOLEAN"
        );
        assert_eq!(
            db.column_type(&FieldType::new("d", SqlType::Date)),
            "TIMESTAMP"
        );
        assert_eq!(db.column_type(&FieldType::new("u", SqlType::Uuid)), "UUID");
    }

    #[test]
    fn test_configure_sequence() {
        let mut parts = Vec::new();
        let mut before = Vec::new();
        configure_sequence(
            DatabaseType::Postgres,
            &mut parts,
            "genId_seq",
            false,
            &mut before,
        );
        assert_eq!(before, vec!["CREATE SEQUENCE \"genId_seq\""]);
        assert_eq!(parts, vec!["DEFAULT NEXTVAL('\"genId_seq\"')"]);
    }
}
