//! SQLite populator that writes a generated dataset to a fresh store.

use crate::error::PopulateError;
use crate::insert::{
    insert_billing, insert_diagnoses, insert_hospitals, insert_patients, insert_treatments,
    DEFAULT_BATCH_SIZE,
};
use medsynth_schema::ddl::{CREATE_INDEXES, CREATE_TABLES, TABLE_NAMES};
use medsynth_schema::Dataset;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Rows written to the hospital table.
    pub hospitals: u64,
    /// Rows written to the patient table.
    pub patients: u64,
    /// Rows written to the diagnosis table.
    pub diagnoses: u64,
    /// Rows written to the treatment table.
    pub treatments: u64,
    /// Rows written to the billing table.
    pub billing: u64,
    /// Total time for the whole populate (tables, rows, indexes).
    pub total_duration: Duration,
    /// Time spent inserting rows.
    pub insert_duration: Duration,
    /// Time spent building the secondary indexes.
    pub index_duration: Duration,
}

impl PopulateMetrics {
    /// Total row count across all five tables.
    pub fn total_rows(&self) -> u64 {
        self.hospitals + self.patients + self.diagnoses + self.treatments + self.billing
    }

    /// Calculate rows per second over the whole operation.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.total_rows() as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// SQLite populator that owns the store connection.
pub struct SqlitePopulator {
    pool: SqlitePool,
    batch_size: usize,
}

impl SqlitePopulator {
    /// Create a fresh store at the given path, replacing any existing file.
    ///
    /// The prior store is deleted before the new one is opened, so a failed
    /// run never leaves a stale store masquerading as a complete one.
    pub async fn create(path: &Path) -> Result<Self, PopulateError> {
        if path.exists() {
            std::fs::remove_file(path)?;
            info!("Removed old store at {}", path.display());
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        // Single-writer batch load; one connection is all we want.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        info!("Created store at {}", path.display());

        Ok(Self {
            pool,
            batch_size: DEFAULT_BATCH_SIZE,
        })
    }

    /// Set the batch size for INSERT operations.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Get a reference to the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the five tables.
    pub async fn create_tables(&self) -> Result<(), PopulateError> {
        for ddl in CREATE_TABLES {
            debug!("DDL: {}", ddl);
            sqlx::query(ddl).execute(&self.pool).await?;
        }
        info!("Created {} tables", CREATE_TABLES.len());
        Ok(())
    }

    /// Build the secondary indexes on the foreign-key columns.
    pub async fn create_indexes(&self) -> Result<(), PopulateError> {
        for ddl in CREATE_INDEXES {
            debug!("DDL: {}", ddl);
            sqlx::query(ddl).execute(&self.pool).await?;
        }
        info!("Created {} indexes", CREATE_INDEXES.len());
        Ok(())
    }

    /// Write the full dataset: tables, rows in dependency order, indexes.
    pub async fn populate(&self, dataset: &Dataset) -> Result<PopulateMetrics, PopulateError> {
        let start = Instant::now();
        let mut metrics = PopulateMetrics::default();

        self.create_tables().await?;

        let insert_start = Instant::now();
        metrics.hospitals = insert_hospitals(&self.pool, &dataset.hospitals).await?;
        info!("Inserted {} hospitals", metrics.hospitals);

        metrics.patients = insert_patients(&self.pool, &dataset.patients, self.batch_size).await?;
        info!("Inserted {} patients", metrics.patients);

        metrics.diagnoses =
            insert_diagnoses(&self.pool, &dataset.diagnoses, self.batch_size).await?;
        info!("Inserted {} diagnoses", metrics.diagnoses);

        metrics.treatments =
            insert_treatments(&self.pool, &dataset.treatments, self.batch_size).await?;
        info!("Inserted {} treatment records", metrics.treatments);

        metrics.billing = insert_billing(&self.pool, &dataset.billing, self.batch_size).await?;
        info!("Inserted {} billing records", metrics.billing);
        metrics.insert_duration = insert_start.elapsed();

        let index_start = Instant::now();
        self.create_indexes().await?;
        metrics.index_duration = index_start.elapsed();

        metrics.total_duration = start.elapsed();
        info!(
            "Population complete: {} rows in {:?} ({:.2} rows/sec)",
            metrics.total_rows(),
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }

    /// Get the row count for one of the five tables.
    pub async fn row_count(&self, table: &str) -> Result<u64, PopulateError> {
        if !TABLE_NAMES.contains(&table) {
            return Err(PopulateError::UnknownTable(table.to_string()));
        }
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await?;
        Ok(count as u64)
    }

    /// Close the store connection, flushing any pending work.
    pub async fn close(self) {
        self.pool.close().await;
    }
}
