//! Error types for the report layer.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while opening the store or running queries.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The store file does not exist. The one explicit precondition check
    /// in the system; the message tells the user how to fix it.
    #[error("store file '{}' not found; run 'medsynth generate' first", .0.display())]
    MissingStore(PathBuf),

    /// SQLite connection or query error.
    #[error("SQLite error: {0}")]
    Sqlite(#[from] sqlx::Error),
}
