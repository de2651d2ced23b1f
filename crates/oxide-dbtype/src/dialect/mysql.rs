//! MySQL and MariaDB dialects.
//!
//! Both share the `mysql` driver. The offset is folded into the limit as
//! `LIMIT <offset>,<count>` and tables are created with InnoDB.

use super::{DialectProfile, BASE_PROFILE};
use crate::field::{FieldType, SqlType};

const MYSQL: DialectProfile = DialectProfile {
    name: "MySQL",
    schemes: &["mysql"],
    driver: "mysql",
    offset_in_limit: true,
    create_if_not_exists_supported: true,
    create_table_suffix: Some("ENGINE=InnoDB"),
    ..BASE_PROFILE
};

pub(super) static PROFILE: DialectProfile = MYSQL;

pub(super) static MARIADB_PROFILE: DialectProfile = DialectProfile {
    name: "MariaDB",
    schemes: &["mariadb"],
    ..MYSQL
};

pub(super) fn type_name(field: &FieldType) -> Option<String> {
    let name = match field.sql_type {
        SqlType::Boolean => "TINYINT(1)",
        SqlType::Date => "DATETIME",
        SqlType::Double => "DOUBLE",
        SqlType::BigDecimal => "DECIMAL(65,30)",
        _ => return None,
    };
    Some(name.to_string())
}

pub(super) fn append_limit_value(sb: &mut String, limit: u64, offset: Option<u64>) {
    sb.push_str("LIMIT ");
    if let Some(offset) = offset {
        sb.push_str(&format!("{offset},"));
    }
    sb.push_str(&format!("{limit} "));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::DatabaseType;

    #[test]
    fn test_mysql_types() {
        let db = DatabaseType::MySql;
        assert_eq!(
            db.column_type(&FieldType::new("b", SqlType::Boolean)),
            "TINYINT(1)"
        );
        assert_eq!(
            db.column_type(&FieldType::new("d", SqlType::Date)),
            "DATETIME"
        );
        assert_eq!(
            db.column_type(&FieldType::new("s", SqlType::String)),
            "VARCHAR(255)"
        );
    }

    #[test]
    fn test_offset_folded_into_limit() {
        let mut sb = String::new();
        append_limit_value(&mut sb, 10, Some(20));
        assert_eq!(sb, "LIMIT 20,10 ");
    }

    #[test]
    fn test_mariadb_shares_mysql_rules() {
        let mysql = DatabaseType::MySql.profile();
        let maria = DatabaseType::MariaDb.profile();
        assert_eq!(maria.driver, mysql.driver);
        assert_eq!(maria.create_table_suffix, Some("ENGINE=InnoDB"));
        assert_ne!(maria.name, mysql.name);
    }
}
