//! Error types for the SQLite populator.

use thiserror::Error;

/// Errors that can occur while creating or populating the store.
///
/// All of these are fatal for the current run; there is no retry or
/// partial-state recovery.
#[derive(Error, Debug)]
pub enum PopulateError {
    /// SQLite connection, statement, or constraint error.
    #[error("SQLite error: {0}")]
    Sqlite(#[from] sqlx::Error),

    /// Filesystem error while removing or creating the store file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Table name outside the fixed five-table schema.
    #[error("Unknown table '{0}'")]
    UnknownTable(String),
}
