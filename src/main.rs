//! Command-line interface for medsynth
//!
//! # Usage Examples
//!
//! ```bash
//! # Generate the default dataset (100,000 patients, seed 42)
//! medsynth generate
//!
//! # Generate a small deterministic dataset
//! medsynth generate --patients 100 --seed 42 --db-path healthcare.db
//!
//! # Run the seven analytical queries
//! medsynth analyze --db-path healthcare.db
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use medsynth_generator::DatasetGenerator;
use medsynth_populate::{GenerateArgs, SqlitePopulator};
use medsynth_report::{open_store, run_report, AnalyzeArgs};
use tracing::info;

#[derive(Parser)]
#[command(name = "medsynth")]
#[command(about = "Synthetic healthcare dataset generator and analyzer")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the synthetic dataset into a fresh SQLite store
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Run the analytical queries against an existing store
    Analyze {
        #[command(flatten)]
        args: AnalyzeArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => generate(args).await,
        Commands::Analyze { args } => analyze(args).await,
    }
}

async fn generate(args: GenerateArgs) -> anyhow::Result<()> {
    info!(
        "Generating {} patients with seed {}",
        args.patients, args.seed
    );
    let dataset = DatasetGenerator::new(args.patients, args.seed).generate();

    let populator = SqlitePopulator::create(&args.db_path)
        .await
        .with_context(|| format!("failed to create store at {}", args.db_path.display()))?
        .with_batch_size(args.batch_size);

    let metrics = populator
        .populate(&dataset)
        .await
        .context("failed to populate store")?;
    populator.close().await;

    println!("Store created: {}", args.db_path.display());
    println!("  hospitals:        {}", metrics.hospitals);
    println!("  patients:         {}", metrics.patients);
    println!("  diagnoses:        {}", metrics.diagnoses);
    println!("  treatments:       {}", metrics.treatments);
    println!("  billing records:  {}", metrics.billing);
    println!("  total rows:       {}", metrics.total_rows());
    Ok(())
}

async fn analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let pool = open_store(&args.db_path).await?;
    run_report(&pool).await?;
    Ok(())
}
