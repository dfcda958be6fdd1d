//! Deterministic dataset generator for medsynth.
//!
//! Produces the five-table healthcare dataset from a patient count and a
//! seed. A single seeded RNG drives the whole pass, so the same inputs
//! always yield a bit-identical dataset.
//!
//! ```rust
//! use medsynth_generator::DatasetGenerator;
//!
//! let dataset = DatasetGenerator::new(100, 42).generate();
//! assert_eq!(dataset.patients.len(), 100);
//! assert_eq!(dataset.diagnoses.len(), 200);
//! ```

pub mod generator;

pub use generator::DatasetGenerator;
