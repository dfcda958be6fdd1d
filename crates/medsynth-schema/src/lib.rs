//! Core schema types for the medsynth healthcare dataset.
//!
//! This crate defines the five-table relational schema shared by the
//! generator, the populator, and the report layer:
//!
//! ```text
//! hospital ──< patient ──< diagnosis
//!                      ├──< treatment
//!                      └──── billing (one per patient)
//! ```
//!
//! It carries the entity structs, the fixed vocabularies the generator
//! samples from, and the DDL used to build the SQLite store.

pub mod ddl;
pub mod entities;
pub mod vocab;

pub use entities::{Billing, Dataset, Diagnosis, Hospital, Patient, PaymentMode, Treatment};
