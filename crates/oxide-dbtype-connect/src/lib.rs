//! Live database access for `oxide-dbtype`.
//!
//! `oxide-dbtype-connect` takes the dialect rules of `oxide-dbtype` to a
//! real database through `sqlx`:
//!
//! - **Driver loading** - Checks that the backend's driver was compiled in
//! - **Connection source** - Resolves a URL and hands out pooled connections
//! - **Probe** - Runs the dialect's ping statement
//! - **Executor** - Creates and drops tables from field metadata
//!
//! # Example
//!
//! ```rust,no_run
//! use oxide_dbtype_connect::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let source = ConnectionSource::open("jdbc:sqlite:target/app.db").await?;
//! let value = source.ping().await?;
//! check_ping(source.database_type(), value)?;
//!
//! let table = TableInfo::new(
//!     "accounts",
//!     vec![
//!         FieldType::new("id", SqlType::Long).generated_id(),
//!         FieldType::new("name", SqlType::String).not_null(),
//!     ],
//! );
//! TableExecutor::new(source).create_table_if_not_exists(&table).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Show the dialect rules for a target
//! oxide-dbtype -d jdbc:postgresql://localhost/app describe
//!
//! # Check connectivity
//! oxide-dbtype -d sqlite:app.db ping
//!
//! # Print the DDL for a schema file
//! oxide-dbtype -d postgres://localhost/app ddl --schema accounts.json
//! ```

pub mod driver;
pub mod error;
pub mod executor;
pub mod probe;
pub mod source;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::driver::LoadDriver;
    pub use crate::error::{ConnectError, Result};
    pub use crate::executor::TableExecutor;
    pub use crate::probe::{check_ping, ping};
    pub use crate::source::{ConnectionOptions, ConnectionSource};
    pub use oxide_dbtype::{
        ConnectionTarget, DatabaseType, DefaultValue, FieldType, QueryBuilder, SqlType,
        TableInfo,
    };
}

pub use error::{ConnectError, Result};
