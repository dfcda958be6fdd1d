//! CLI argument definitions for the analyze stage.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Clone, Debug)]
pub struct AnalyzeArgs {
    /// Path of the SQLite store produced by `generate`
    #[arg(long, default_value = "healthcare.db")]
    pub db_path: PathBuf,
}
