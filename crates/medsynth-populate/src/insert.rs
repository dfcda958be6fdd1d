//! Batched INSERT logic for the SQLite store.
//!
//! Each table gets its own insert function: rows are split into chunks,
//! each chunk written with a single multi-row INSERT inside its own
//! transaction. Batch boundaries are a performance detail only; the stored
//! data is identical regardless of batch size.

use crate::error::PopulateError;
use medsynth_schema::{Billing, Diagnosis, Hospital, Patient, Treatment};
use sqlx::sqlite::SqlitePool;
use sqlx::{QueryBuilder, Sqlite};
use tracing::debug;

/// Default batch size for INSERT operations.
pub const DEFAULT_BATCH_SIZE: usize = 5000;

/// Insert the five fixed hospital rows. Small enough for a single batch.
pub async fn insert_hospitals(
    pool: &SqlitePool,
    hospitals: &[Hospital],
) -> Result<u64, PopulateError> {
    if hospitals.is_empty() {
        return Ok(0);
    }

    let mut tx = pool.begin().await?;
    let mut qb: QueryBuilder<Sqlite> =
        QueryBuilder::new("INSERT INTO hospital (hospital_id, hospital_name) ");
    qb.push_values(hospitals, |mut b, h| {
        b.push_bind(h.hospital_id).push_bind(h.hospital_name.as_str());
    });
    qb.build().execute(&mut *tx).await?;
    tx.commit().await?;

    Ok(hospitals.len() as u64)
}

/// Insert patient rows in batches. Returns the number of rows written.
pub async fn insert_patients(
    pool: &SqlitePool,
    patients: &[Patient],
    batch_size: usize,
) -> Result<u64, PopulateError> {
    let mut inserted = 0u64;

    for chunk in patients.chunks(batch_size.max(1)) {
        let mut tx = pool.begin().await?;
        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(
            "INSERT INTO patient (patient_id, hospital_id, patient_name, dob, \
             admission_datetime, discharge_datetime) ",
        );
        qb.push_values(chunk, |mut b, p| {
            b.push_bind(p.patient_id)
                .push_bind(p.hospital_id)
                .push_bind(p.patient_name.as_str())
                .push_bind(p.dob)
                .push_bind(p.admission_datetime)
                .push_bind(p.discharge_datetime);
        });
        qb.build().execute(&mut *tx).await?;
        tx.commit().await?;

        inserted += chunk.len() as u64;
        debug!("patient: {} rows inserted", inserted);
    }

    Ok(inserted)
}

/// Insert diagnosis rows in batches.
pub async fn insert_diagnoses(
    pool: &SqlitePool,
    diagnoses: &[Diagnosis],
    batch_size: usize,
) -> Result<u64, PopulateError> {
    let mut inserted = 0u64;

    for chunk in diagnoses.chunks(batch_size.max(1)) {
        let mut tx = pool.begin().await?;
        let mut qb: QueryBuilder<Sqlite> =
            QueryBuilder::new("INSERT INTO diagnosis (diagnosis_id, patient_id, diagnosis_name) ");
        qb.push_values(chunk, |mut b, d| {
            b.push_bind(d.diagnosis_id)
                .push_bind(d.patient_id)
                .push_bind(d.diagnosis_name.as_str());
        });
        qb.build().execute(&mut *tx).await?;
        tx.commit().await?;

        inserted += chunk.len() as u64;
        debug!("diagnosis: {} rows inserted", inserted);
    }

    Ok(inserted)
}

/// Insert treatment rows in batches.
pub async fn insert_treatments(
    pool: &SqlitePool,
    treatments: &[Treatment],
    batch_size: usize,
) -> Result<u64, PopulateError> {
    let mut inserted = 0u64;

    for chunk in treatments.chunks(batch_size.max(1)) {
        let mut tx = pool.begin().await?;
        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(
            "INSERT INTO treatment (treatment_id, patient_id, medicine_name, dose_time, duration) ",
        );
        qb.push_values(chunk, |mut b, t| {
            b.push_bind(t.treatment_id)
                .push_bind(t.patient_id)
                .push_bind(t.medicine_name.as_str())
                .push_bind(t.dose_time.as_str())
                .push_bind(t.duration);
        });
        qb.build().execute(&mut *tx).await?;
        tx.commit().await?;

        inserted += chunk.len() as u64;
        debug!("treatment: {} rows inserted", inserted);
    }

    Ok(inserted)
}

/// Insert billing rows in batches.
pub async fn insert_billing(
    pool: &SqlitePool,
    billing: &[Billing],
    batch_size: usize,
) -> Result<u64, PopulateError> {
    let mut inserted = 0u64;

    for chunk in billing.chunks(batch_size.max(1)) {
        let mut tx = pool.begin().await?;
        let mut qb: QueryBuilder<Sqlite> =
            QueryBuilder::new("INSERT INTO billing (bill_id, patient_id, bill_amount, payment_mode) ");
        qb.push_values(chunk, |mut b, bill| {
            b.push_bind(bill.bill_id)
                .push_bind(bill.patient_id)
                .push_bind(bill.bill_amount)
                .push_bind(bill.payment_mode.as_str());
        });
        qb.build().execute(&mut *tx).await?;
        tx.commit().await?;

        inserted += chunk.len() as u64;
        debug!("billing: {} rows inserted", inserted);
    }

    Ok(inserted)
}
