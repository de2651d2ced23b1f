//! Apache Derby dialect.
//!
//! Derby has no LIMIT/OFFSET syntax in the subset rendered here and answers
//! pings with a `VALUES` row constructor.

use super::{DialectProfile, GeneratedIdStyle, BASE_PROFILE};
use crate::field::{FieldType, SqlType};

pub(super) static PROFILE: DialectProfile = DialectProfile {
    name: "Derby",
    schemes: &["derby"],
    entity_quote: ('"', '"'),
    driver: "derby",
    ping_statement: "VALUES (1)",
    limit_supported: false,
    offset_supported: false,
    generated_id: GeneratedIdStyle::Keyword("GENERATED BY DEFAULT AS IDENTITY"),
    ..BASE_PROFILE
};

pub(super) fn type_name(field: &FieldType) -> Option<String> {
    let name = match field.sql_type {
        SqlType::Boolean | SqlType::Byte => "SMALLINT",
        SqlType::ByteArray | SqlType::Serializable => "LONG VARCHAR FOR BIT DATA",
        SqlType::LongString => "LONG VARCHAR",
        _ => return None,
    };
    Some(name.to_string())
}

#[cfg(test)]
mod tests {
    use crate::dialect::DatabaseType;
    use crate::field::{FieldType, SqlType};

    #[test]
    fn test_derby_dialect() {
        let db = DatabaseType::Derby;
        assert_eq!(db.ping_statement(), "VALUES (1)");
        assert!(!db.is_limit_sql_supported());
        assert_eq!(
            db.column_type(&FieldType::new("b", SqlType::Boolean)),
            "SMALLINT"
        );
    }
}
