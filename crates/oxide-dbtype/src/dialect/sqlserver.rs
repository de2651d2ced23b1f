//! Microsoft SQL Server dialect.
//!
//! Identifiers are bracketed and the row limit is a `TOP n` right after
//! `SELECT`. There is no OFFSET in the rendered subset.

use super::{DialectProfile, GeneratedIdStyle, BASE_PROFILE};
use crate::field::{FieldType, SqlType};

pub(super) static PROFILE: DialectProfile = DialectProfile {
    name: "SQL Server",
    schemes: &["sqlserver", "mssql"],
    entity_quote: ('[', ']'),
    driver: "mssql",
    limit_after_select: true,
    offset_supported: false,
    generated_id: GeneratedIdStyle::Keyword("IDENTITY(1,1)"),
    ..BASE_PROFILE
};

pub(super) fn type_name(field: &FieldType) -> Option<String> {
    let name = match field.sql_type {
        SqlType::Boolean => "BIT",
        SqlType::Date => "DATETIME",
        SqlType::ByteArray | SqlType::Serializable => "IMAGE",
        SqlType::LongString => "VARCHAR(MAX)",
        SqlType::Uuid => "UNIQUEIDENTIFIER",
        SqlType::Double => "FLOAT",
        _ => return None,
    };
    Some(name.to_string())
}

pub(super) fn append_limit_value(sb: &mut String, limit: u64) {
    sb.push_str(&format!("TOP {limit} "));
}
