//! WHERE clause expressions.
//!
//! Conditions keep column names unquoted until they are rendered for a
//! specific [`DatabaseType`], which quotes them and numbers placeholders.

use super::value::{SqlValue, ToSqlValue};
use crate::dialect::DatabaseType;

/// Creates a column reference.
#[must_use]
pub fn col(name: &str) -> Column {
    Column {
        name: String::from(name),
    }
}

/// A column reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name.
    pub name: String,
}

impl Column {
    fn compare<T: ToSqlValue>(self, op: &'static str, value: T) -> Condition {
        Condition::Compare {
            column: self.name,
            op,
            value: value.to_sql_value(),
        }
    }

    /// Creates an equality condition.
    #[must_use]
    pub fn eq<T: ToSqlValue>(self, value: T) -> Condition {
        self.compare("=", value)
    }

    /// Creates an inequality condition.
    #[must_use]
    pub fn not_eq<T: ToSqlValue>(self, value: T) -> Condition {
        self.compare("<>", value)
    }

    /// Creates a less-than condition.
    #[must_use]
    pub fn lt<T: ToSqlValue>(self, value: T) -> Condition {
        self.compare("<", value)
    }

    /// Creates a less-than-or-equal condition.
    #[must_use]
    pub fn lt_eq<T: ToSqlValue>(self, value: T) -> Condition {
        self.compare("<=", value)
    }

    /// Creates a greater-than condition.
    #[must_use]
    pub fn gt<T: ToSqlValue>(self, value: T) -> Condition {
        self.compare(">", value)
    }

    /// Creates a greater-than-or-equal condition.
    #[must_use]
    pub fn gt_eq<T: ToSqlValue>(self, value: T) -> Condition {
        self.compare(">=", value)
    }

    /// Creates a LIKE condition.
    #[must_use]
    pub fn like<T: ToSqlValue>(self, pattern: T) -> Condition {
        self.compare("LIKE", pattern)
    }

    /// Creates an IS NULL condition.
    #[must_use]
    pub fn is_null(self) -> Condition {
        Condition::IsNull {
            column: self.name,
            negated: false,
        }
    }

    /// Creates an IS NOT NULL condition.
    #[must_use]
    pub fn is_not_null(self) -> Condition {
        Condition::IsNull {
            column: self.name,
            negated: true,
        }
    }

    /// Creates an IN condition.
    #[must_use]
    pub fn in_list<T: ToSqlValue>(self, values: Vec<T>) -> Condition {
        Condition::In {
            column: self.name,
            values: values.into_iter().map(ToSqlValue::to_sql_value).collect(),
        }
    }
}

/// A WHERE clause condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// `<column> <op> ?`
    Compare {
        /// Column name.
        column: String,
        /// Comparison operator.
        op: &'static str,
        /// Bound value.
        value: SqlValue,
    },
    /// `<column> IS [NOT] NULL`
    IsNull {
        /// Column name.
        column: String,
        /// Whether this is IS NOT NULL.
        negated: bool,
    },
    /// `<column> IN (?, ...)`
    In {
        /// Column name.
        column: String,
        /// Bound values.
        values: Vec<SqlValue>,
    },
    /// All conditions hold.
    And(Vec<Condition>),
    /// Any condition holds.
    Or(Vec<Condition>),
}

impl Condition {
    /// Combines with AND.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match self {
            Self::And(mut all) => {
                all.push(other);
                Self::And(all)
            }
            first => Self::And(vec![first, other]),
        }
    }

    /// Combines with OR.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Or(mut any) => {
                any.push(other);
                Self::Or(any)
            }
            first => Self::Or(vec![first, other]),
        }
    }

    /// Writes this condition for `db`, pushing bound values onto `params`.
    pub fn render(&self, db: DatabaseType, sql: &mut String, params: &mut Vec<SqlValue>) {
        match self {
            Self::Compare { column, op, value } => {
                db.append_escaped_entity_name(sql, column);
                params.push(value.clone());
                sql.push_str(&format!(" {op} {}", db.placeholder(params.len())));
            }
            Self::IsNull { column, negated } => {
                db.append_escaped_entity_name(sql, column);
                sql.push_str(if *negated { " IS NOT NULL" } else { " IS NULL" });
            }
            // Nothing is a member of an empty list.
            Self::In { values, .. } if values.is_empty() => sql.push_str("1 = 0"),
            Self::In { column, values } => {
                db.append_escaped_entity_name(sql, column);
                sql.push_str(" IN (");
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        sql.push(',');
                    }
                    params.push(value.clone());
                    sql.push_str(&db.placeholder(params.len()));
                }
                sql.push(')');
            }
            Self::And(parts) => render_group(parts, " AND ", db, sql, params),
            Self::Or(parts) => render_group(parts, " OR ", db, sql, params),
        }
    }
}

fn render_group(
    parts: &[Condition],
    joiner: &str,
    db: DatabaseType,
    sql: &mut String,
    params: &mut Vec<SqlValue>,
) {
    sql.push('(');
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            sql.push_str(joiner);
        }
        part.render(db, sql, params);
    }
    sql.push(')');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(db: DatabaseType, cond: &Condition) -> (String, Vec<SqlValue>) {
        let mut sql = String::new();
        let mut params = Vec::new();
        cond.render(db, &mut sql, &mut params);
        (sql, params)
    }

    #[test]
    fn test_compare_quotes_column() {
        let (sql, params) = render(DatabaseType::H2, &col("name").eq("alice"));
        assert_eq!(sql, "`name` = ?");
        assert_eq!(params, vec![SqlValue::Text("alice".to_string())]);
    }

    #[test]
    fn test_numbered_placeholders() {
        let cond = col("a").eq(1).and(col("b").in_list(vec![2, 3]));
        let (sql, params) = render(DatabaseType::Postgres, &cond);
        assert_eq!(sql, "(\"a\" = $1 AND \"b\" IN ($2,$3))");
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_or_and_null() {
        let cond = col("a").is_null().or(col("b").is_not_null());
        let (sql, params) = render(DatabaseType::SqlServer, &cond);
        assert_eq!(sql, "([a] IS NULL OR [b] IS NOT NULL)");
        assert!(params.is_empty());
    }

    #[test]
    fn test_empty_in_list_matches_nothing() {
        let cond = col("a").eq(1).and(col("b").in_list(Vec::<i64>::new()));
        let (sql, params) = render(DatabaseType::Postgres, &cond);
        assert_eq!(sql, "(\"a\" = $1 AND 1 = 0)");
        assert_eq!(params, vec![SqlValue::Int(1)]);
    }
}
