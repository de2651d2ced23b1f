//! H2 dialect.

use super::{DialectProfile, BASE_PROFILE};
use crate::field::{FieldType, SqlType};

pub(super) static PROFILE: DialectProfile = DialectProfile {
    name: "H2",
    schemes: &["h2"],
    driver: "h2",
    create_if_not_exists_supported: true,
    ..BASE_PROFILE
};

pub(super) fn type_name(field: &FieldType) -> Option<String> {
    match field.sql_type {
        SqlType::Uuid => Some("UUID".to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::dialect::DatabaseType;
    use crate::field::{FieldType, SqlType};

    #[test]
    fn test_h2_profile() {
        let db = DatabaseType::H2;
        assert_eq!(db.entity_quote(), ('`', '`'));
        assert!(db.is_limit_sql_supported());
        assert!(!db.is_limit_after_select());
        assert!(db.is_offset_sql_supported());
        assert!(!db.is_sequences_supported());
        assert_eq!(
            db.column_type(&FieldType::new("u", SqlType::Uuid)),
            "UUID"
        );
    }
}
