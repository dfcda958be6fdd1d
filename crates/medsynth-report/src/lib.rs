//! Analytical reporting over the medsynth SQLite store.
//!
//! Opens the store read-only, runs the seven analytical queries, and prints
//! each result as a console table. The store must already exist; the one
//! precondition check in the system lives in [`open_store`].

pub mod args;
pub mod error;
pub mod queries;
pub mod render;

pub use args::AnalyzeArgs;
pub use error::ReportError;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use tracing::info;

/// Open the store read-only. Fails with [`ReportError::MissingStore`] if the
/// file does not exist, instead of letting SQLite create an empty one.
pub async fn open_store(path: &Path) -> Result<SqlitePool, ReportError> {
    if !path.exists() {
        return Err(ReportError::MissingStore(path.to_path_buf()));
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .read_only(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    info!("Opened store at {}", path.display());
    Ok(pool)
}

fn section(title: &str, explanation: &str) {
    println!();
    println!("{}", "-".repeat(100));
    println!("{title}");
    println!("{}", "-".repeat(100));
    println!("{explanation}");
    println!();
}

/// Run all seven queries against the store and print the results.
pub async fn run_report(pool: &SqlitePool) -> Result<(), ReportError> {
    println!("{}", "=".repeat(100));
    println!("{:^100}", "HEALTHCARE ANALYSIS QUERIES");
    println!("{}", "=".repeat(100));

    section(
        "QUERY 1: Average Patients Per Month, Week, and Year",
        "Average admissions per distinct calendar bucket observed at each hospital.",
    );
    let rows = queries::admission_rates(pool).await?;
    println!("{}", render::admission_rate_table(&rows));

    section(
        "QUERY 2: Hospital Occupancy Analysis",
        "Admissions normalized by each hospital's observed date span, not calendar time.",
    );
    let rows = queries::occupancy(pool).await?;
    println!("{}", render::occupancy_table(&rows));

    section(
        "QUERY 3: Age-wise Patient Categorization",
        "Patients bucketed by age at query time, in natural age order.",
    );
    let rows = queries::age_cohorts(pool).await?;
    println!("{}", render::age_cohort_table(&rows));

    section(
        "QUERY 4: Top 10 Most Consumed Medicines",
        "Most prescribed medicines, for inventory and procurement planning.",
    );
    let rows = queries::top_medicines(pool, 10).await?;
    println!("{}", render::top_medicines_table(&rows));

    section(
        "QUERY 5: Top 3 Medicines Per Diagnosis Type",
        "Most prescribed medicines within each diagnosis, sequentially ranked.",
    );
    let rows = queries::top_medicines_per_diagnosis(pool).await?;
    println!("{}", render::diagnosis_medicine_table(&rows));
    if rows.len() > render::DIAGNOSIS_MEDICINE_DISPLAY_ROWS {
        println!(
            "({} rows total, showing first {})",
            rows.len(),
            render::DIAGNOSIS_MEDICINE_DISPLAY_ROWS
        );
    }

    section(
        "QUERY 6: Average Length of Hospital Stay",
        "Stay length per hospital, plus the global distribution.",
    );
    let rows = queries::stay_per_hospital(pool).await?;
    println!("{}", render::stay_per_hospital_table(&rows));
    println!();
    let rows = queries::stay_distribution(pool).await?;
    println!("{}", render::stay_distribution_table(&rows));

    section(
        "QUERY 7: Monthly and Yearly Income Analysis",
        "Cash/credit revenue breakdown by admission year and month.",
    );
    let rows = queries::yearly_revenue(pool).await?;
    println!("{}", render::yearly_revenue_table(&rows));
    println!();
    let rows = queries::monthly_revenue(pool).await?;
    println!("{}", render::monthly_revenue_table(&rows));
    if rows.len() > render::MONTHLY_REVENUE_DISPLAY_ROWS {
        println!(
            "({} months total, showing most recent {})",
            rows.len(),
            render::MONTHLY_REVENUE_DISPLAY_ROWS
        );
    }

    println!();
    println!("{}", "=".repeat(100));
    println!("ANALYSIS COMPLETE");
    println!("{}", "=".repeat(100));

    Ok(())
}
