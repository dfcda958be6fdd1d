//! SQLite store populator for medsynth.
//!
//! Takes a generated [`medsynth_schema::Dataset`] and writes it to a fresh
//! SQLite file: drop the old store, create the five tables, batch-insert all
//! rows in dependency order inside per-batch transactions, then build the
//! secondary indexes.
//!
//! Failures are terminal. A run either fully completes or the caller must
//! discard the store file and rerun from scratch.

pub mod args;
pub mod error;
pub mod insert;
pub mod populator;

pub use args::GenerateArgs;
pub use error::PopulateError;
pub use insert::DEFAULT_BATCH_SIZE;
pub use populator::{PopulateMetrics, SqlitePopulator};
