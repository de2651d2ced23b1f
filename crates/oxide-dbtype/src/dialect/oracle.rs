//! Oracle dialect.

use super::{DatabaseType, DialectProfile, GeneratedIdStyle, BASE_PROFILE};
use crate::field::{FieldType, SqlType};

pub(super) static PROFILE: DialectProfile = DialectProfile {
    name: "Oracle",
    schemes: &["oracle"],
    entity_quote: ('"', '"'),
    driver: "oracle",
    ping_statement: "SELECT 1 FROM DUAL",
    limit_supported: false,
    offset_supported: false,
    sequences_supported: true,
    generated_id: GeneratedIdStyle::Sequence,
    ..BASE_PROFILE
};

pub(super) fn type_name(field: &FieldType) -> Option<String> {
    let name = match field.sql_type {
        SqlType::String | SqlType::Uuid => {
            return Some(DatabaseType::Oracle.varchar(field, "VARCHAR2"));
        }
        SqlType::LongString => "LONG",
        SqlType::Boolean => "CHAR(1)",
        SqlType::Byte | SqlType::Short => "SMALLINT",
        SqlType::Long => "NUMERIC",
        SqlType::ByteArray | SqlType::Serializable => "LONG RAW",
        _ => return None,
    };
    Some(name.to_string())
}

/// Oracle ids are fetched from the sequence before each insert, so the column
/// itself carries nothing extra.
pub(super) fn configure_sequence(
    db: DatabaseType,
    sequence: &str,
    statements_before: &mut Vec<String>,
) {
    statements_before.push(format!(
        "CREATE SEQUENCE {}",
        db.escaped_entity_name(sequence)
    ));
}

pub(super) fn upper_case_entity_name(name: &str) -> String {
    name.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oracle_types() {
        let db = DatabaseType::Oracle;
        assert_eq!(
            db.column_type(&FieldType::new("s", SqlType::String)),
            "VARCHAR2(255)"
        );
        assert_eq!(
            db.column_type(&FieldType::new("b", SqlType::Boolean)),
            "CHAR(1)"
        );
        assert_eq!(db.column_type(&FieldType::new("l", SqlType::Long)), "NUMERIC");
    }

    #[test]
    fn test_oracle_has_no_limit() {
        let db = DatabaseType::Oracle;
        assert!(!db.is_limit_sql_supported());
        assert!(!db.is_offset_sql_supported());
        assert_eq!(db.ping_statement(), "SELECT 1 FROM DUAL");
    }
}
