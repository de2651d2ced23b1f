//! Dialect-aware SELECT building.
//!
//! ```
//! use oxide_dbtype::builder::{QueryBuilder, col};
//! use oxide_dbtype::DatabaseType;
//!
//! let (sql, params) = QueryBuilder::new(DatabaseType::Postgres, "users")
//!     .where_clause(col("active").eq(true))
//!     .limit(10)?
//!     .build()?;
//! assert_eq!(sql, "SELECT * FROM \"users\" WHERE \"active\" = $1 LIMIT 10 ");
//! assert_eq!(params.len(), 1);
//! # Ok::<(), oxide_dbtype::DialectError>(())
//! ```

mod expr;
mod select;
mod value;

pub use expr::{Column, Condition, col};
pub use select::QueryBuilder;
pub use value::{SqlValue, ToSqlValue};
