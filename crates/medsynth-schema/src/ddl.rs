//! DDL for the SQLite store.
//!
//! Tables are created in dependency order; the secondary indexes on the
//! foreign-key columns are built only after all rows are inserted.

/// CREATE TABLE statements, in dependency order (hospital before patient,
/// patient before its children).
pub const CREATE_TABLES: [&str; 5] = [
    "CREATE TABLE hospital (
        hospital_id INTEGER PRIMARY KEY,
        hospital_name TEXT NOT NULL
    )",
    "CREATE TABLE patient (
        patient_id INTEGER PRIMARY KEY,
        hospital_id INTEGER NOT NULL,
        patient_name TEXT NOT NULL,
        dob DATE NOT NULL,
        admission_datetime DATETIME NOT NULL,
        discharge_datetime DATETIME NOT NULL,
        FOREIGN KEY (hospital_id) REFERENCES hospital(hospital_id)
    )",
    "CREATE TABLE diagnosis (
        diagnosis_id INTEGER PRIMARY KEY,
        patient_id INTEGER NOT NULL,
        diagnosis_name TEXT NOT NULL,
        FOREIGN KEY (patient_id) REFERENCES patient(patient_id)
    )",
    "CREATE TABLE treatment (
        treatment_id INTEGER PRIMARY KEY,
        patient_id INTEGER NOT NULL,
        medicine_name TEXT NOT NULL,
        dose_time TEXT NOT NULL,
        duration INTEGER NOT NULL,
        FOREIGN KEY (patient_id) REFERENCES patient(patient_id)
    )",
    "CREATE TABLE billing (
        bill_id INTEGER PRIMARY KEY,
        patient_id INTEGER NOT NULL,
        bill_amount DECIMAL(10, 2) NOT NULL,
        payment_mode TEXT NOT NULL,
        FOREIGN KEY (patient_id) REFERENCES patient(patient_id)
    )",
];

/// Secondary indexes on the four foreign-key columns, built after load to
/// support the report layer's joins.
pub const CREATE_INDEXES: [&str; 4] = [
    "CREATE INDEX idx_patient_hospital ON patient(hospital_id)",
    "CREATE INDEX idx_diagnosis_patient ON diagnosis(patient_id)",
    "CREATE INDEX idx_treatment_patient ON treatment(patient_id)",
    "CREATE INDEX idx_billing_patient ON billing(patient_id)",
];

/// The five table names, in dependency order.
pub const TABLE_NAMES: [&str; 5] = ["hospital", "patient", "diagnosis", "treatment", "billing"];
