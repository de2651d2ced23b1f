//! HyperSQL dialect.
//!
//! HSQLDB writes its row limit right after `SELECT` as `LIMIT <offset> <count>`,
//! so the offset is always an argument of the limit.

use super::{DatabaseType, DialectProfile, GeneratedIdStyle, BASE_PROFILE};
use crate::field::{FieldType, SqlType};

pub(super) static PROFILE: DialectProfile = DialectProfile {
    name: "HSQLDB",
    schemes: &["hsqldb"],
    entity_quote: ('"', '"'),
    driver: "hsqldb",
    ping_statement: "VALUES (1)",
    limit_after_select: true,
    offset_in_limit: true,
    sequences_supported: true,
    generated_id: GeneratedIdStyle::Keyword("GENERATED BY DEFAULT AS IDENTITY"),
    create_if_not_exists_supported: true,
    ..BASE_PROFILE
};

pub(super) fn type_name(field: &FieldType) -> Option<String> {
    let name = match field.sql_type {
        SqlType::Boolean => "BIT",
        SqlType::ByteArray | SqlType::Serializable => "VARBINARY(255)",
        SqlType::LongString => "LONGVARCHAR",
        _ => return None,
    };
    Some(name.to_string())
}

/// Creates the sequence before the table and binds the column to it.
pub(super) fn configure_sequence(
    db: DatabaseType,
    parts: &mut Vec<String>,
    field: &FieldType,
    sequence: &str,
    if_not_exists: bool,
    statements_before: &mut Vec<String>,
) {
    let seq = db.escaped_entity_name(sequence);
    let seq_type = if field.sql_type == SqlType::Long {
        "BIGINT"
    } else {
        "INTEGER"
    };
    let guard = if if_not_exists { "IF NOT EXISTS " } else { "" };
    statements_before.push(format!(
        "CREATE SEQUENCE {guard}{seq} AS {seq_type} START WITH 1"
    ));
    parts.push(format!("GENERATED BY DEFAULT AS SEQUENCE {seq}"));
}

pub(super) fn append_limit_value(sb: &mut String, limit: u64, offset: Option<u64>) {
    sb.push_str(&format!("LIMIT {} {limit} ", offset.unwrap_or(0)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_value_with_offset() {
        let mut sb = String::new();
        append_limit_value(&mut sb, 10, Some(5));
        assert_eq!(sb, "LIMIT 5 10 ");

        let mut sb = String::new();
        append_limit_value(&mut sb, 10, None);
        assert_eq!(sb, "LIMIT 0 10 ");
    }

    #[test]
    fn test_sequence_type_follows_field() {
        let field = FieldType::new("id", SqlType::Long).generated_id_sequence("seq");
        let mut parts = Vec::new();
        let mut before = Vec::new();
        configure_sequence(DatabaseType::Hsqldb, &mut parts, &field, "seq", false, &mut before);
        assert_eq!(before, vec!["CREATE SEQUENCE \"seq\" AS BIGINT START WITH 1"]);
        assert_eq!(parts, vec!["GENERATED BY DEFAULT AS SEQUENCE \"seq\""]);

        let mut before = Vec::new();
        configure_sequence(DatabaseType::Hsqldb, &mut Vec::new(), &field, "seq", true, &mut before);
        assert_eq!(
            before,
            vec!["CREATE SEQUENCE IF NOT EXISTS \"seq\" AS BIGINT START WITH 1"]
        );
    }
}
