//! The error vocabulary for the whole store.
//!
//! Every fallible operation in the crate reports one of these variants to
//! its immediate caller. Nothing is retried or swallowed further down, and
//! no operation here is fatal to the process.

use thiserror::Error;

/// Errors raised by tables, the catalog, queries and persistence.
#[derive(Debug, Error)]
pub enum DbError {
    /// A table, column, row or stored blob was looked up and is not there.
    #[error("err: does not exist: {0}")]
    NotFound(String),

    /// A table (or catalog column) with that name is already registered.
    #[error("err: already exists: {0}")]
    AlreadyExists(String),

    /// A row was offered with the wrong number of values for its table.
    #[error("err: expected {expected} values, got {got}")]
    ArityMismatch { expected: usize, got: usize },

    /// The value at position 0 collides with an existing row's key.
    #[error("err: primary key must be unique: {0}")]
    DuplicateKey(String),

    /// A positional field access landed past the end of a record.
    #[error("err: no field at index {0}")]
    OutOfRange(usize),

    /// Column 0 of a base table cannot be deleted.
    #[error("err: cannot delete primary key column: {0}")]
    PrimaryKeyProtected(String),

    /// The underlying storage reported a failure.
    #[error("err: io failure: {0}")]
    Io(#[from] std::io::Error),

    /// A stored blob exists but could not be decoded back into a table.
    #[error("err: corrupt table data: {0}")]
    CorruptData(String),
}

pub type Result<T> = std::result::Result<T, DbError>;
