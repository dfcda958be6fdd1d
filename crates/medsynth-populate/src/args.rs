//! CLI argument definitions for the generate stage.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `generate` subcommand.
///
/// The defaults reproduce the reference dataset: 100,000 patients,
/// seed 42, store at `healthcare.db`.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Number of patients to generate
    #[arg(long, default_value = "100000")]
    pub patients: u64,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Batch size for store inserts (one transaction per batch)
    #[arg(long, default_value = "5000")]
    pub batch_size: usize,

    /// Path of the SQLite store to create (an existing file is replaced)
    #[arg(long, default_value = "healthcare.db")]
    pub db_path: PathBuf,
}
