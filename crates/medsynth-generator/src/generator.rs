//! Main dataset generator.
//!
//! Generation runs as four whole-table passes over the patient ids
//! (patients, diagnoses, treatments, billing), each consuming the single
//! seeded RNG in a fixed order. Changing the draw order changes every
//! dataset produced from a given seed, so it is part of the contract:
//!
//! - patient pass: first name, last name, dob offset, admission offset,
//!   stay length
//! - diagnosis pass: one 2-element sample per patient
//! - treatment pass: medicine count, medicine sample, then dose label and
//!   duration per medicine
//! - billing pass: bill amount, raw payment mode

use chrono::{Duration, NaiveDate, NaiveDateTime};
use medsynth_schema::vocab::{
    DIAGNOSES, DOSE_TIMES, FIRST_NAMES, HOSPITALS, LAST_NAMES, MEDICINES, PAYMENT_MODES,
};
use medsynth_schema::{Billing, Dataset, Diagnosis, Hospital, Patient, PaymentMode, Treatment};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Anchor for all generated dates: dobs are offsets into the past from
/// here, admissions offsets into the 3-year window after it.
const REFERENCE_DATE: (i32, u32, u32) = (2022, 1, 1);

/// Admission window in days (3 years).
const ADMISSION_WINDOW_DAYS: i64 = 365 * 3;

fn reference_midnight() -> NaiveDateTime {
    let (y, m, d) = REFERENCE_DATE;
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("fixed reference date is valid")
}

/// Dataset generator that produces deterministic healthcare records.
///
/// The generator uses a seeded random number generator to ensure
/// reproducible results across runs with the same seed and patient count.
pub struct DatasetGenerator {
    /// Seeded random number generator for reproducibility
    rng: StdRng,
    /// Number of patients to generate
    patient_count: u64,
}

impl DatasetGenerator {
    /// Create a new dataset generator for the given patient count and seed.
    pub fn new(patient_count: u64, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            patient_count,
        }
    }

    /// The fixed hospital table. Not seed-dependent.
    pub fn hospitals() -> Vec<Hospital> {
        HOSPITALS
            .iter()
            .map(|(hospital_id, hospital_name)| Hospital {
                hospital_id: *hospital_id,
                hospital_name: hospital_name.to_string(),
            })
            .collect()
    }

    /// Generate the full dataset, consuming the generator.
    pub fn generate(mut self) -> Dataset {
        let hospitals = Self::hospitals();
        let patients = self.generate_patients();
        let diagnoses = self.generate_diagnoses();
        let treatments = self.generate_treatments();
        let billing = self.generate_billing();

        Dataset {
            hospitals,
            patients,
            diagnoses,
            treatments,
            billing,
        }
    }

    fn generate_patients(&mut self) -> Vec<Patient> {
        let reference = reference_midnight();
        let mut patients = Vec::with_capacity(self.patient_count as usize);

        for i in 1..=self.patient_count as i64 {
            // Round-robin over the five hospitals, starting at 1.
            let hospital_id = (i - 1) % 5 + 1;

            let first = pick(&mut self.rng, &FIRST_NAMES);
            let last = pick(&mut self.rng, &LAST_NAMES);

            // Age 20-77 years at the reference date.
            let dob_offset = self.rng.gen_range(365 * 20..=365 * 77);
            let dob = (reference - Duration::days(dob_offset)).date();

            let admission_offset = self.rng.gen_range(0..=ADMISSION_WINDOW_DAYS);
            let admission_datetime = reference + Duration::days(admission_offset);

            let stay_days = self.rng.gen_range(1..=14);
            let discharge_datetime = admission_datetime + Duration::days(stay_days);

            patients.push(Patient {
                patient_id: i,
                hospital_id,
                patient_name: format!("{first} {last}"),
                dob,
                admission_datetime,
                discharge_datetime,
            });
        }

        patients
    }

    fn generate_diagnoses(&mut self) -> Vec<Diagnosis> {
        let mut diagnoses = Vec::with_capacity(self.patient_count as usize * 2);
        let mut diagnosis_id = 1;

        for patient_id in 1..=self.patient_count as i64 {
            for diagnosis_name in DIAGNOSES.choose_multiple(&mut self.rng, 2) {
                diagnoses.push(Diagnosis {
                    diagnosis_id,
                    patient_id,
                    diagnosis_name: diagnosis_name.to_string(),
                });
                diagnosis_id += 1;
            }
        }

        diagnoses
    }

    fn generate_treatments(&mut self) -> Vec<Treatment> {
        let mut treatments = Vec::new();
        let mut treatment_id = 1;

        for patient_id in 1..=self.patient_count as i64 {
            let medicine_count = self.rng.gen_range(5..=8);
            let medicines: Vec<&str> = MEDICINES
                .choose_multiple(&mut self.rng, medicine_count)
                .copied()
                .collect();

            for medicine_name in medicines {
                let dose_time = pick(&mut self.rng, &DOSE_TIMES);
                let duration = self.rng.gen_range(3..=30);
                treatments.push(Treatment {
                    treatment_id,
                    patient_id,
                    medicine_name: medicine_name.to_string(),
                    dose_time: dose_time.to_string(),
                    duration,
                });
                treatment_id += 1;
            }
        }

        treatments
    }

    fn generate_billing(&mut self) -> Vec<Billing> {
        let mut billing = Vec::with_capacity(self.patient_count as usize);

        for patient_id in 1..=self.patient_count as i64 {
            let bill_amount = round2(self.rng.gen_range(5000.0..=500000.0));
            let raw_mode = pick(&mut self.rng, &PAYMENT_MODES);

            billing.push(Billing {
                bill_id: patient_id,
                patient_id,
                bill_amount,
                payment_mode: PaymentMode::from_raw(raw_mode),
            });
        }

        billing
    }
}

/// Pick one element from a fixed, non-empty vocabulary.
fn pick<'a, R: Rng>(rng: &mut R, vocab: &[&'a str]) -> &'a str {
    vocab.choose(rng).copied().expect("vocabularies are non-empty")
}

/// Round to 2 decimal places, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
