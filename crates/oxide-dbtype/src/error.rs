//! Error types for dialect resolution and SQL generation.

use thiserror::Error;

/// Errors raised when a request does not fit the capabilities of a dialect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialectError {
    /// No dialect matches the connection target.
    #[error("no database type matches connection target '{target}'")]
    UnknownDialect {
        /// The connection target that failed to resolve.
        target: String,
    },

    /// A sequence-based generated id was requested on a dialect without sequences.
    #[error("generated id sequences are not supported by database type {dialect} (field '{field}')")]
    UnsupportedGeneratedId {
        /// Dialect name.
        dialect: &'static str,
        /// Field that asked for the sequence.
        field: String,
    },

    /// LIMIT was requested on a dialect without LIMIT support.
    #[error("LIMIT is not supported by database type {dialect}")]
    UnsupportedLimit {
        /// Dialect name.
        dialect: &'static str,
    },

    /// OFFSET was requested on a dialect without OFFSET support.
    #[error("OFFSET is not supported by database type {dialect}")]
    UnsupportedOffset {
        /// Dialect name.
        dialect: &'static str,
    },

    /// The dialect folds OFFSET into LIMIT, so an offset needs a limit.
    #[error("OFFSET is part of the LIMIT clause in database type {dialect} and needs a limit")]
    OffsetWithoutLimit {
        /// Dialect name.
        dialect: &'static str,
    },

    /// An inlined generated id cannot share the primary key with other columns.
    #[error("generated id '{field}' of table '{table}' cannot be combined with other id fields in database type {dialect}")]
    CompositeGeneratedId {
        /// Dialect name.
        dialect: &'static str,
        /// Table name.
        table: String,
        /// The generated id field.
        field: String,
    },

    /// The dialect only generates ids for integer columns.
    #[error("generated id '{field}' must be an integer type in database type {dialect}")]
    NonIntegerGeneratedId {
        /// Dialect name.
        dialect: &'static str,
        /// Field that asked for the generated id.
        field: String,
    },

    /// The table has no fields at all.
    #[error("table '{table}' has no fields")]
    EmptyTable {
        /// Table name.
        table: String,
    },
}

/// Result type for dialect operations.
pub type Result<T> = std::result::Result<T, DialectError>;
