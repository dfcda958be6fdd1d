//! Entity structs for the five tables.
//!
//! Rows are immutable once inserted; every id is a sequential integer
//! surrogate key starting at 1.

use chrono::{NaiveDate, NaiveDateTime};

/// A hospital. Exactly five exist, with fixed ids 1..=5.
#[derive(Debug, Clone, PartialEq)]
pub struct Hospital {
    pub hospital_id: i64,
    pub hospital_name: String,
}

/// A patient admission record.
#[derive(Debug, Clone, PartialEq)]
pub struct Patient {
    pub patient_id: i64,
    /// Assigned round-robin over the five hospitals.
    pub hospital_id: i64,
    pub patient_name: String,
    pub dob: NaiveDate,
    pub admission_datetime: NaiveDateTime,
    /// Always 1-14 days after admission.
    pub discharge_datetime: NaiveDateTime,
}

/// A diagnosis attached to a patient. Each patient carries exactly two
/// distinct diagnoses.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnosis {
    pub diagnosis_id: i64,
    pub patient_id: i64,
    pub diagnosis_name: String,
}

/// A prescribed medicine. Each patient carries 5-8 distinct medicines.
#[derive(Debug, Clone, PartialEq)]
pub struct Treatment {
    pub treatment_id: i64,
    pub patient_id: i64,
    pub medicine_name: String,
    pub dose_time: String,
    /// Prescription duration in days, 3-30.
    pub duration: i64,
}

/// Reporting category for a bill. The five raw payment methods collapse to
/// this binary category at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMode {
    Cash,
    Credit,
}

impl PaymentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMode::Cash => "Cash",
            PaymentMode::Credit => "Credit",
        }
    }

    /// Collapse a raw payment method into the binary reporting category.
    /// Anything that is not literally "Cash" counts as credit.
    pub fn from_raw(raw: &str) -> Self {
        if raw == "Cash" {
            PaymentMode::Cash
        } else {
            PaymentMode::Credit
        }
    }
}

/// A bill. Exactly one per patient.
#[derive(Debug, Clone, PartialEq)]
pub struct Billing {
    pub bill_id: i64,
    pub patient_id: i64,
    /// Rounded to 2 decimals at generation.
    pub bill_amount: f64,
    pub payment_mode: PaymentMode,
}

/// A fully generated dataset, ready to be written to the store in
/// dependency order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub hospitals: Vec<Hospital>,
    pub patients: Vec<Patient>,
    pub diagnoses: Vec<Diagnosis>,
    pub treatments: Vec<Treatment>,
    pub billing: Vec<Billing>,
}

impl Dataset {
    /// Total row count across all five tables.
    pub fn total_rows(&self) -> u64 {
        (self.hospitals.len()
            + self.patients.len()
            + self.diagnoses.len()
            + self.treatments.len()
            + self.billing.len()) as u64
    }
}
