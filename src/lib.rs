//! medsynth library surface.
//!
//! Synthesizes a fictional healthcare relational dataset into a SQLite
//! store and runs a fixed battery of analytical reports over it. Two
//! stages, run sequentially and communicating only through the store file:
//!
//! - `generate`: deterministic seeded generation of the five-table dataset
//! - `analyze`: seven read-only aggregate queries rendered as console tables
//!
//! # CLI Usage
//!
//! ```bash
//! # Build the store (100,000 patients, seed 42, healthcare.db)
//! medsynth generate
//!
//! # Smaller deterministic dataset at a custom path
//! medsynth generate --patients 1000 --seed 7 --db-path /tmp/health.db
//!
//! # Run the analytical reports
//! medsynth analyze --db-path /tmp/health.db
//! ```

// Re-export the pipeline crates for convenience
pub use medsynth_generator as generator;
pub use medsynth_populate as populate;
pub use medsynth_report as report;
pub use medsynth_schema as schema;
