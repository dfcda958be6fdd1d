//! The seven read-only analytical queries.
//!
//! Each query is a pure function of the store's contents, executed as SQL
//! against SQLite. All rounding happens in SQL via `ROUND(x, 2)`, so every
//! reported percentage and average uses the same 2-decimal half-up rule.
//!
//! Display truncation (top 30 diagnosis/medicine pairs, most recent 12
//! months) is a presentation concern handled by the render layer; the
//! functions here always return the full result set.

use crate::error::ReportError;
use sqlx::sqlite::SqlitePool;
use sqlx::FromRow;

/// Query 1: average admissions per distinct month, week, and year bucket,
/// per hospital.
///
/// The denominator is the count of distinct buckets actually observed, not
/// a fixed calendar range, so hospitals with sparse data report inflated
/// averages. Accepted behavior. A hospital with no patients reports no
/// buckets at all and the averages come back NULL.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct AdmissionRateRow {
    pub hospital_id: i64,
    pub hospital_name: String,
    pub avg_patients_per_month: Option<f64>,
    pub avg_patients_per_week: Option<f64>,
    pub avg_patients_per_year: Option<f64>,
}

const ADMISSION_RATE_SQL: &str = "
SELECT
    h.hospital_id,
    h.hospital_name,
    ROUND(COUNT(*) * 1.0 / COUNT(DISTINCT strftime('%Y-%m', p.admission_datetime)), 2)
        AS avg_patients_per_month,
    ROUND(COUNT(*) * 1.0 / COUNT(DISTINCT strftime('%Y-W%W', p.admission_datetime)), 2)
        AS avg_patients_per_week,
    ROUND(COUNT(*) * 1.0 / COUNT(DISTINCT strftime('%Y', p.admission_datetime)), 2)
        AS avg_patients_per_year
FROM hospital h
LEFT JOIN patient p ON h.hospital_id = p.hospital_id
GROUP BY h.hospital_id, h.hospital_name
ORDER BY h.hospital_id";

pub async fn admission_rates(pool: &SqlitePool) -> Result<Vec<AdmissionRateRow>, ReportError> {
    Ok(sqlx::query_as(ADMISSION_RATE_SQL).fetch_all(pool).await?)
}

/// Query 2: admissions normalized by each hospital's observed date span
/// (max discharge minus min admission), not wall-clock calendar time.
///
/// The `+ 1` bucket floors the denominator so a hospital whose span is zero
/// (a single admission) still divides by a full bucket.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct OccupancyRow {
    pub hospital_id: i64,
    pub hospital_name: String,
    pub weekly_occupancy: Option<f64>,
    pub monthly_occupancy: Option<f64>,
    pub yearly_occupancy: Option<f64>,
}

const OCCUPANCY_SQL: &str = "
SELECT
    h.hospital_id,
    h.hospital_name,
    ROUND(COUNT(*) * 1.0 /
          ((julianday(MAX(p.discharge_datetime)) - julianday(MIN(p.admission_datetime))) / 7 + 1), 2)
        AS weekly_occupancy,
    ROUND(COUNT(*) * 1.0 /
          ((julianday(MAX(p.discharge_datetime)) - julianday(MIN(p.admission_datetime))) / 30 + 1), 2)
        AS monthly_occupancy,
    ROUND(COUNT(*) * 1.0 /
          ((julianday(MAX(p.discharge_datetime)) - julianday(MIN(p.admission_datetime))) / 365 + 1), 2)
        AS yearly_occupancy
FROM hospital h
LEFT JOIN patient p ON h.hospital_id = p.hospital_id
GROUP BY h.hospital_id, h.hospital_name
ORDER BY h.hospital_id";

pub async fn occupancy(pool: &SqlitePool) -> Result<Vec<OccupancyRow>, ReportError> {
    Ok(sqlx::query_as(OCCUPANCY_SQL).fetch_all(pool).await?)
}

/// Query 3: patients bucketed by age at query time.
///
/// Age is (now - dob) / 365.25 days with integer truncation. Rows come back
/// in natural age order (Child, Adolescent, Adult, Senior), only for buckets
/// that are populated.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct AgeCohortRow {
    pub age_category: String,
    pub patient_count: i64,
    pub percentage: f64,
}

const AGE_COHORT_SQL: &str = "
SELECT
    CASE
        WHEN CAST((julianday('now') - julianday(p.dob)) / 365.25 AS INTEGER) < 13 THEN 'Child (0-12)'
        WHEN CAST((julianday('now') - julianday(p.dob)) / 365.25 AS INTEGER) BETWEEN 13 AND 19 THEN 'Adolescent (13-19)'
        WHEN CAST((julianday('now') - julianday(p.dob)) / 365.25 AS INTEGER) BETWEEN 20 AND 60 THEN 'Adult (20-60)'
        ELSE 'Senior (60+)'
    END AS age_category,
    COUNT(*) AS patient_count,
    ROUND(COUNT(*) * 100.0 / (SELECT COUNT(*) FROM patient), 2) AS percentage
FROM patient p
GROUP BY age_category
ORDER BY
    CASE
        WHEN age_category = 'Child (0-12)' THEN 1
        WHEN age_category = 'Adolescent (13-19)' THEN 2
        WHEN age_category = 'Adult (20-60)' THEN 3
        ELSE 4
    END";

pub async fn age_cohorts(pool: &SqlitePool) -> Result<Vec<AgeCohortRow>, ReportError> {
    Ok(sqlx::query_as(AGE_COHORT_SQL).fetch_all(pool).await?)
}

/// Query 4: medicines ranked by prescription count.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct MedicineRow {
    pub medicine_name: String,
    pub times_prescribed: i64,
    pub percentage_of_all: f64,
    pub unique_patients: i64,
}

const TOP_MEDICINES_SQL: &str = "
SELECT
    t.medicine_name,
    COUNT(*) AS times_prescribed,
    ROUND(COUNT(*) * 100.0 / (SELECT COUNT(*) FROM treatment), 2) AS percentage_of_all,
    COUNT(DISTINCT t.patient_id) AS unique_patients
FROM treatment t
GROUP BY t.medicine_name
ORDER BY times_prescribed DESC
LIMIT ?";

/// Fetch the top `limit` medicines; pass -1 for no limit (SQLite convention).
pub async fn top_medicines(
    pool: &SqlitePool,
    limit: i64,
) -> Result<Vec<MedicineRow>, ReportError> {
    Ok(sqlx::query_as(TOP_MEDICINES_SQL)
        .bind(limit)
        .fetch_all(pool)
        .await?)
}

/// Query 5: top 3 medicines per diagnosis over the
/// treatment -> patient -> diagnosis join.
///
/// Ranking is strict sequential (`ROW_NUMBER`): ties never share a rank, so
/// at most three rows appear per diagnosis and a diagnosis with fewer than
/// three distinct medicines reports all of them.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DiagnosisMedicineRow {
    pub diagnosis_name: String,
    pub medicine_name: String,
    pub prescription_count: i64,
    pub rank: i64,
}

const TOP_MEDICINES_PER_DIAGNOSIS_SQL: &str = "
WITH ranked_medicines AS (
    SELECT
        d.diagnosis_name,
        t.medicine_name,
        COUNT(*) AS prescription_count,
        ROW_NUMBER() OVER (PARTITION BY d.diagnosis_name ORDER BY COUNT(*) DESC) AS rank
    FROM treatment t
    INNER JOIN patient p ON t.patient_id = p.patient_id
    INNER JOIN diagnosis d ON p.patient_id = d.patient_id
    GROUP BY d.diagnosis_name, t.medicine_name
)
SELECT diagnosis_name, medicine_name, prescription_count, rank
FROM ranked_medicines
WHERE rank <= 3
ORDER BY diagnosis_name, rank";

pub async fn top_medicines_per_diagnosis(
    pool: &SqlitePool,
) -> Result<Vec<DiagnosisMedicineRow>, ReportError> {
    Ok(sqlx::query_as(TOP_MEDICINES_PER_DIAGNOSIS_SQL)
        .fetch_all(pool)
        .await?)
}

/// Query 6a: length of stay per hospital, in whole days.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct HospitalStayRow {
    pub hospital_id: i64,
    pub hospital_name: String,
    pub average_days: Option<f64>,
    pub min_days: Option<i64>,
    pub max_days: Option<i64>,
    pub total_patients: i64,
}

const STAY_PER_HOSPITAL_SQL: &str = "
SELECT
    h.hospital_id,
    h.hospital_name,
    ROUND(AVG(CAST(julianday(p.discharge_datetime) - julianday(p.admission_datetime) AS REAL)), 2)
        AS average_days,
    CAST(MIN(julianday(p.discharge_datetime) - julianday(p.admission_datetime)) AS INTEGER)
        AS min_days,
    CAST(MAX(julianday(p.discharge_datetime) - julianday(p.admission_datetime)) AS INTEGER)
        AS max_days,
    COUNT(*) AS total_patients
FROM hospital h
LEFT JOIN patient p ON h.hospital_id = p.hospital_id
GROUP BY h.hospital_id, h.hospital_name";

pub async fn stay_per_hospital(pool: &SqlitePool) -> Result<Vec<HospitalStayRow>, ReportError> {
    Ok(sqlx::query_as(STAY_PER_HOSPITAL_SQL).fetch_all(pool).await?)
}

/// Query 6b: global length-of-stay distribution, natural bucket order.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct StayBucketRow {
    pub los_category: String,
    pub patient_count: i64,
    pub percentage: f64,
}

const STAY_DISTRIBUTION_SQL: &str = "
SELECT
    CASE
        WHEN CAST(julianday(p.discharge_datetime) - julianday(p.admission_datetime) AS INTEGER) <= 3 THEN '1-3 Days'
        WHEN CAST(julianday(p.discharge_datetime) - julianday(p.admission_datetime) AS INTEGER) BETWEEN 4 AND 7 THEN '4-7 Days'
        WHEN CAST(julianday(p.discharge_datetime) - julianday(p.admission_datetime) AS INTEGER) BETWEEN 8 AND 14 THEN '8-14 Days'
        ELSE '15+ Days'
    END AS los_category,
    COUNT(*) AS patient_count,
    ROUND(COUNT(*) * 100.0 / (SELECT COUNT(*) FROM patient), 2) AS percentage
FROM patient p
GROUP BY los_category
ORDER BY
    CASE
        WHEN los_category = '1-3 Days' THEN 1
        WHEN los_category = '4-7 Days' THEN 2
        WHEN los_category = '8-14 Days' THEN 3
        ELSE 4
    END";

pub async fn stay_distribution(pool: &SqlitePool) -> Result<Vec<StayBucketRow>, ReportError> {
    Ok(sqlx::query_as(STAY_DISTRIBUTION_SQL).fetch_all(pool).await?)
}

/// Query 7a: revenue per admission year, most recent first.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct YearlyRevenueRow {
    pub year: String,
    pub cash_income: f64,
    pub credit_income: f64,
    pub total_income: f64,
    pub cash_percentage: f64,
    pub transaction_count: i64,
}

const YEARLY_REVENUE_SQL: &str = "
SELECT
    strftime('%Y', p.admission_datetime) AS year,
    ROUND(SUM(CASE WHEN b.payment_mode = 'Cash' THEN b.bill_amount ELSE 0 END), 2)
        AS cash_income,
    ROUND(SUM(CASE WHEN b.payment_mode = 'Credit' THEN b.bill_amount ELSE 0 END), 2)
        AS credit_income,
    ROUND(SUM(b.bill_amount), 2) AS total_income,
    ROUND(SUM(CASE WHEN b.payment_mode = 'Cash' THEN b.bill_amount ELSE 0 END) * 100.0 / SUM(b.bill_amount), 2)
        AS cash_percentage,
    COUNT(*) AS transaction_count
FROM billing b
JOIN patient p ON b.patient_id = p.patient_id
GROUP BY strftime('%Y', p.admission_datetime)
ORDER BY year DESC";

pub async fn yearly_revenue(pool: &SqlitePool) -> Result<Vec<YearlyRevenueRow>, ReportError> {
    Ok(sqlx::query_as(YEARLY_REVENUE_SQL).fetch_all(pool).await?)
}

/// Query 7b: revenue per admission month, most recent first. All months are
/// computed; the render layer shows the most recent 12.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct MonthlyRevenueRow {
    pub month: String,
    pub cash_income: f64,
    pub credit_income: f64,
    pub total_income: f64,
    pub cash_percentage: f64,
}

const MONTHLY_REVENUE_SQL: &str = "
SELECT
    strftime('%Y-%m', p.admission_datetime) AS month,
    ROUND(SUM(CASE WHEN b.payment_mode = 'Cash' THEN b.bill_amount ELSE 0 END), 2)
        AS cash_income,
    ROUND(SUM(CASE WHEN b.payment_mode = 'Credit' THEN b.bill_amount ELSE 0 END), 2)
        AS credit_income,
    ROUND(SUM(b.bill_amount), 2) AS total_income,
    ROUND(SUM(CASE WHEN b.payment_mode = 'Cash' THEN b.bill_amount ELSE 0 END) * 100.0 / SUM(b.bill_amount), 2)
        AS cash_percentage
FROM billing b
JOIN patient p ON b.patient_id = p.patient_id
GROUP BY strftime('%Y-%m', p.admission_datetime)
ORDER BY month DESC";

pub async fn monthly_revenue(pool: &SqlitePool) -> Result<Vec<MonthlyRevenueRow>, ReportError> {
    Ok(sqlx::query_as(MONTHLY_REVENUE_SQL).fetch_all(pool).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, Utc};
    use medsynth_generator::DatasetGenerator;
    use medsynth_populate::SqlitePopulator;
    use medsynth_schema::{Billing, Dataset, Diagnosis, Patient, PaymentMode, Treatment};
    use tempfile::TempDir;

    async fn store_with(dataset: &Dataset) -> (TempDir, SqlitePool) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.db");
        let populator = SqlitePopulator::create(&path).await.unwrap();
        populator.populate(dataset).await.unwrap();
        let pool = populator.pool().clone();
        (dir, pool)
    }

    fn patient(id: i64, hospital_id: i64, dob: NaiveDate, admitted: &str, stay_days: i64) -> Patient {
        let admission = NaiveDate::parse_from_str(admitted, "%Y-%m-%d")
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        Patient {
            patient_id: id,
            hospital_id,
            patient_name: format!("Patient {id}"),
            dob,
            admission_datetime: admission,
            discharge_datetime: admission + Duration::days(stay_days),
        }
    }

    fn treatment(id: i64, patient_id: i64, medicine: &str) -> Treatment {
        Treatment {
            treatment_id: id,
            patient_id,
            medicine_name: medicine.to_string(),
            dose_time: "Morning".to_string(),
            duration: 5,
        }
    }

    fn dob_years_ago(years: i64) -> NaiveDate {
        Utc::now().date_naive() - Duration::days(years * 365)
    }

    #[tokio::test]
    async fn test_occupancy_single_admission_floors_denominator() {
        let dataset = Dataset {
            hospitals: DatasetGenerator::hospitals(),
            patients: vec![patient(1, 1, dob_years_ago(40), "2023-06-01", 7)],
            ..Default::default()
        };
        let (_dir, pool) = store_with(&dataset).await;

        let rows = occupancy(&pool).await.unwrap();
        assert_eq!(rows.len(), 5);

        // Span is exactly 7 days, so the weekly denominator floors at 2.
        assert_eq!(rows[0].weekly_occupancy, Some(0.5));
        assert_eq!(rows[0].monthly_occupancy, Some(0.81));
        assert_eq!(rows[0].yearly_occupancy, Some(0.98));

        // Hospitals with no admissions report no occupancy at all.
        assert_eq!(rows[1].weekly_occupancy, None);
    }

    #[tokio::test]
    async fn test_top_medicines_counts_and_percentages() {
        let dataset = Dataset {
            hospitals: DatasetGenerator::hospitals(),
            patients: vec![
                patient(1, 1, dob_years_ago(40), "2023-06-01", 3),
                patient(2, 2, dob_years_ago(50), "2023-07-01", 4),
            ],
            treatments: vec![
                treatment(1, 1, "Paracetamol"),
                treatment(2, 1, "Ibuprofen"),
                treatment(3, 2, "Paracetamol"),
            ],
            ..Default::default()
        };
        let (_dir, pool) = store_with(&dataset).await;

        let rows = top_medicines(&pool, -1).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].medicine_name, "Paracetamol");
        assert_eq!(rows[0].times_prescribed, 2);
        assert_eq!(rows[0].unique_patients, 2);
        assert_eq!(rows[0].percentage_of_all, 66.67);
        assert_eq!(rows[1].times_prescribed, 1);
        assert_eq!(rows[1].percentage_of_all, 33.33);

        let total: i64 = rows.iter().map(|r| r.times_prescribed).sum();
        assert_eq!(total, dataset.treatments.len() as i64);
    }

    #[tokio::test]
    async fn test_diagnosis_with_fewer_than_three_medicines_reports_all() {
        let dataset = Dataset {
            hospitals: DatasetGenerator::hospitals(),
            patients: vec![patient(1, 1, dob_years_ago(40), "2023-06-01", 3)],
            diagnoses: vec![Diagnosis {
                diagnosis_id: 1,
                patient_id: 1,
                diagnosis_name: "Dengue".to_string(),
            }],
            treatments: vec![
                treatment(1, 1, "Paracetamol"),
                treatment(2, 1, "Cetirizine"),
            ],
            ..Default::default()
        };
        let (_dir, pool) = store_with(&dataset).await;

        let rows = top_medicines_per_diagnosis(&pool).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[1].rank, 2);
    }

    #[tokio::test]
    async fn test_tied_medicines_get_sequential_ranks() {
        let dataset = Dataset {
            hospitals: DatasetGenerator::hospitals(),
            patients: vec![patient(1, 1, dob_years_ago(40), "2023-06-01", 3)],
            diagnoses: vec![Diagnosis {
                diagnosis_id: 1,
                patient_id: 1,
                diagnosis_name: "Migraine".to_string(),
            }],
            treatments: vec![
                treatment(1, 1, "Paracetamol"),
                treatment(2, 1, "Ibuprofen"),
                treatment(3, 1, "Aspirin"),
                treatment(4, 1, "Cetirizine"),
            ],
            ..Default::default()
        };
        let (_dir, pool) = store_with(&dataset).await;

        // Four medicines all tied at one prescription: ROW_NUMBER keeps the
        // ranking strict, so exactly three rows survive with ranks 1..3.
        let rows = top_medicines_per_diagnosis(&pool).await.unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows.iter().map(|r| r.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[tokio::test]
    async fn test_age_cohorts_natural_order_and_percentages() {
        let dataset = Dataset {
            hospitals: DatasetGenerator::hospitals(),
            patients: vec![
                patient(1, 1, dob_years_ago(70), "2023-06-01", 3),
                patient(2, 2, dob_years_ago(30), "2023-06-02", 3),
                patient(3, 3, dob_years_ago(15), "2023-06-03", 3),
                patient(4, 4, dob_years_ago(5), "2023-06-04", 3),
            ],
            ..Default::default()
        };
        let (_dir, pool) = store_with(&dataset).await;

        let rows = age_cohorts(&pool).await.unwrap();
        let categories: Vec<&str> = rows.iter().map(|r| r.age_category.as_str()).collect();
        assert_eq!(
            categories,
            vec![
                "Child (0-12)",
                "Adolescent (13-19)",
                "Adult (20-60)",
                "Senior (60+)",
            ]
        );
        for row in &rows {
            assert_eq!(row.patient_count, 1);
            assert_eq!(row.percentage, 25.0);
        }
    }

    #[tokio::test]
    async fn test_stay_distribution_percentages_sum_to_100() {
        let dataset = Dataset {
            hospitals: DatasetGenerator::hospitals(),
            patients: vec![
                patient(1, 1, dob_years_ago(40), "2023-06-01", 2),
                patient(2, 2, dob_years_ago(40), "2023-06-01", 5),
                patient(3, 3, dob_years_ago(40), "2023-06-01", 10),
            ],
            ..Default::default()
        };
        let (_dir, pool) = store_with(&dataset).await;

        let rows = stay_distribution(&pool).await.unwrap();
        let categories: Vec<&str> = rows.iter().map(|r| r.los_category.as_str()).collect();
        assert_eq!(categories, vec!["1-3 Days", "4-7 Days", "8-14 Days"]);

        let total_pct: f64 = rows.iter().map(|r| r.percentage).sum();
        assert!((total_pct - 100.0).abs() < 0.02);
    }

    #[tokio::test]
    async fn test_yearly_revenue_balances() {
        let dataset = Dataset {
            hospitals: DatasetGenerator::hospitals(),
            patients: vec![
                patient(1, 1, dob_years_ago(40), "2023-03-01", 3),
                patient(2, 2, dob_years_ago(50), "2023-08-01", 4),
            ],
            billing: vec![
                Billing {
                    bill_id: 1,
                    patient_id: 1,
                    bill_amount: 100.50,
                    payment_mode: PaymentMode::Cash,
                },
                Billing {
                    bill_id: 2,
                    patient_id: 2,
                    bill_amount: 200.25,
                    payment_mode: PaymentMode::Credit,
                },
            ],
            ..Default::default()
        };
        let (_dir, pool) = store_with(&dataset).await;

        let rows = yearly_revenue(&pool).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].year, "2023");
        assert_eq!(rows[0].cash_income, 100.50);
        assert_eq!(rows[0].credit_income, 200.25);
        assert_eq!(rows[0].total_income, 300.75);
        assert_eq!(rows[0].cash_percentage, 33.42);
        assert_eq!(rows[0].transaction_count, 2);

        let months = monthly_revenue(&pool).await.unwrap();
        assert_eq!(months.len(), 2);
        // Most recent month first.
        assert_eq!(months[0].month, "2023-08");
        assert_eq!(months[1].month, "2023-03");
    }
}
