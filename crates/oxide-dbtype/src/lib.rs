//! # oxide-dbtype
//!
//! Per-database SQL dialect rules behind one closed set of database types.
//!
//! This crate provides:
//! - A [`DatabaseType`] per backend with quoting rules, ping statement and
//!   capability flags
//! - Resolution of connection URLs (`jdbc:` prefixed or not) to a
//!   [`DatabaseType`] without connecting
//! - Column definition and CREATE TABLE rendering from [`FieldType`] metadata
//! - A SELECT builder that places LIMIT and OFFSET where each dialect wants them
//!
//! ## Column definitions
//!
//! ```rust
//! use oxide_dbtype::{DatabaseType, FieldType, SqlType, TableInfo};
//!
//! let table = TableInfo::new(
//!     "accounts",
//!     vec![
//!         FieldType::new("id", SqlType::Integer).generated_id(),
//!         FieldType::new("name", SqlType::String).width(100).not_null(),
//!     ],
//! );
//!
//! let ddl = DatabaseType::Sqlite.create_table_statements(&table, false)?;
//! assert_eq!(
//!     ddl.main,
//!     "CREATE TABLE `accounts` (`id` INTEGER PRIMARY KEY AUTOINCREMENT, `name` VARCHAR NOT NULL)"
//! );
//!
//! let ddl = DatabaseType::Postgres.create_table_statements(&table, false)?;
//! assert_eq!(ddl.statements_before, vec!["CREATE SEQUENCE \"accounts_id_seq\""]);
//! # Ok::<(), oxide_dbtype::DialectError>(())
//! ```
//!
//! ## Resolution
//!
//! ```rust
//! use oxide_dbtype::{DatabaseType, resolve};
//!
//! assert_eq!(resolve("jdbc:h2:mem:test")?, DatabaseType::H2);
//! assert_eq!("postgres://localhost/app".parse::<DatabaseType>()?, DatabaseType::Postgres);
//! assert!(resolve("jdbc:unknown:db").is_err());
//! # Ok::<(), oxide_dbtype::DialectError>(())
//! ```

pub mod builder;
pub mod column;
pub mod dialect;
pub mod error;
pub mod field;
pub mod resolve;
pub mod table;

pub use builder::{QueryBuilder, SqlValue, col};
pub use column::TableStatements;
pub use dialect::{COMMENT_LINE_PREFIX, DatabaseType, DialectProfile, GeneratedIdStyle};
pub use error::{DialectError, Result};
pub use field::{DefaultValue, FieldType, SqlType, TableInfo};
pub use resolve::{ConnectionTarget, resolve};
pub use table::TableDdl;
