//! IBM DB2 dialect.

use super::{DialectProfile, GeneratedIdStyle, BASE_PROFILE};
use crate::field::{FieldType, SqlType};

pub(super) static PROFILE: DialectProfile = DialectProfile {
    name: "DB2",
    schemes: &["db2"],
    entity_quote: ('"', '"'),
    driver: "db2",
    ping_statement: "SELECT 1 FROM SYSIBM.SYSDUMMY1",
    limit_supported: false,
    offset_supported: false,
    generated_id: GeneratedIdStyle::Keyword("GENERATED ALWAYS AS IDENTITY"),
    ..BASE_PROFILE
};

pub(super) fn type_name(field: &FieldType) -> Option<String> {
    let name = match field.sql_type {
        SqlType::Boolean | SqlType::Byte => "SMALLINT",
        SqlType::ByteArray | SqlType::Serializable => "VARCHAR(1024) FOR BIT DATA",
        SqlType::LongString => "LONG VARCHAR",
        SqlType::Double => "DOUBLE",
        _ => return None,
    };
    Some(name.to_string())
}
