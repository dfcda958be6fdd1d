//! Console table rendering for the query results.

use crate::queries::{
    AdmissionRateRow, AgeCohortRow, DiagnosisMedicineRow, HospitalStayRow, MedicineRow,
    MonthlyRevenueRow, OccupancyRow, StayBucketRow, YearlyRevenueRow,
};
use comfy_table::{presets::UTF8_FULL, Cell, Table};

/// How many diagnosis/medicine rows query 5 shows on the console.
pub const DIAGNOSIS_MEDICINE_DISPLAY_ROWS: usize = 30;

/// How many monthly revenue rows query 7b shows on the console.
pub const MONTHLY_REVENUE_DISPLAY_ROWS: usize = 12;

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(header);
    table
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.2}")).unwrap_or_else(|| "-".to_string())
}

fn fmt_opt_int(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

pub fn admission_rate_table(rows: &[AdmissionRateRow]) -> Table {
    let mut table = new_table(vec![
        "Hospital",
        "Avg/Month",
        "Avg/Week",
        "Avg/Year",
    ]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.hospital_name),
            Cell::new(fmt_opt(row.avg_patients_per_month)),
            Cell::new(fmt_opt(row.avg_patients_per_week)),
            Cell::new(fmt_opt(row.avg_patients_per_year)),
        ]);
    }
    table
}

pub fn occupancy_table(rows: &[OccupancyRow]) -> Table {
    let mut table = new_table(vec![
        "Hospital",
        "Weekly",
        "Monthly",
        "Yearly",
    ]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.hospital_name),
            Cell::new(fmt_opt(row.weekly_occupancy)),
            Cell::new(fmt_opt(row.monthly_occupancy)),
            Cell::new(fmt_opt(row.yearly_occupancy)),
        ]);
    }
    table
}

pub fn age_cohort_table(rows: &[AgeCohortRow]) -> Table {
    let mut table = new_table(vec!["Age Category", "Patients", "Percentage"]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.age_category),
            Cell::new(row.patient_count),
            Cell::new(format!("{:.2}%", row.percentage)),
        ]);
    }
    table
}

pub fn top_medicines_table(rows: &[MedicineRow]) -> Table {
    let mut table = new_table(vec![
        "Medicine",
        "Times Prescribed",
        "% of All",
        "Unique Patients",
    ]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.medicine_name),
            Cell::new(row.times_prescribed),
            Cell::new(format!("{:.2}%", row.percentage_of_all)),
            Cell::new(row.unique_patients),
        ]);
    }
    table
}

/// Renders the first [`DIAGNOSIS_MEDICINE_DISPLAY_ROWS`] rows only; the
/// caller reports the full row count alongside.
pub fn diagnosis_medicine_table(rows: &[DiagnosisMedicineRow]) -> Table {
    let mut table = new_table(vec!["Diagnosis", "Medicine", "Prescriptions", "Rank"]);
    for row in rows.iter().take(DIAGNOSIS_MEDICINE_DISPLAY_ROWS) {
        table.add_row(vec![
            Cell::new(&row.diagnosis_name),
            Cell::new(&row.medicine_name),
            Cell::new(row.prescription_count),
            Cell::new(row.rank),
        ]);
    }
    table
}

pub fn stay_per_hospital_table(rows: &[HospitalStayRow]) -> Table {
    let mut table = new_table(vec![
        "Hospital",
        "Avg Days",
        "Min Days",
        "Max Days",
        "Patients",
    ]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.hospital_name),
            Cell::new(fmt_opt(row.average_days)),
            Cell::new(fmt_opt_int(row.min_days)),
            Cell::new(fmt_opt_int(row.max_days)),
            Cell::new(row.total_patients),
        ]);
    }
    table
}

pub fn stay_distribution_table(rows: &[StayBucketRow]) -> Table {
    let mut table = new_table(vec!["Length of Stay", "Patients", "Percentage"]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.los_category),
            Cell::new(row.patient_count),
            Cell::new(format!("{:.2}%", row.percentage)),
        ]);
    }
    table
}

pub fn yearly_revenue_table(rows: &[YearlyRevenueRow]) -> Table {
    let mut table = new_table(vec![
        "Year",
        "Cash Income",
        "Credit Income",
        "Total Income",
        "Cash %",
        "Transactions",
    ]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.year),
            Cell::new(format!("{:.2}", row.cash_income)),
            Cell::new(format!("{:.2}", row.credit_income)),
            Cell::new(format!("{:.2}", row.total_income)),
            Cell::new(format!("{:.2}%", row.cash_percentage)),
            Cell::new(row.transaction_count),
        ]);
    }
    table
}

/// Renders the most recent [`MONTHLY_REVENUE_DISPLAY_ROWS`] months only.
pub fn monthly_revenue_table(rows: &[MonthlyRevenueRow]) -> Table {
    let mut table = new_table(vec![
        "Month",
        "Cash Income",
        "Credit Income",
        "Total Income",
        "Cash %",
    ]);
    for row in rows.iter().take(MONTHLY_REVENUE_DISPLAY_ROWS) {
        table.add_row(vec![
            Cell::new(&row.month),
            Cell::new(format!("{:.2}", row.cash_income)),
            Cell::new(format!("{:.2}", row.credit_income)),
            Cell::new(format!("{:.2}", row.total_income)),
            Cell::new(format!("{:.2}%", row.cash_percentage)),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admission_rate_table_renders_missing_as_dash() {
        let rows = vec![AdmissionRateRow {
            hospital_id: 1,
            hospital_name: "Empty Hospital".to_string(),
            avg_patients_per_month: None,
            avg_patients_per_week: None,
            avg_patients_per_year: None,
        }];

        let rendered = admission_rate_table(&rows).to_string();
        assert!(rendered.contains("Empty Hospital"));
        assert!(rendered.contains('-'));
    }

    #[test]
    fn test_age_cohort_table_formats_percentage() {
        let rows = vec![AgeCohortRow {
            age_category: "Adult (20-60)".to_string(),
            patient_count: 75,
            percentage: 75.0,
        }];

        let rendered = age_cohort_table(&rows).to_string();
        assert!(rendered.contains("Adult (20-60)"));
        assert!(rendered.contains("75.00%"));
    }

    #[test]
    fn test_diagnosis_medicine_table_truncates_display() {
        let rows: Vec<DiagnosisMedicineRow> = (0..40)
            .map(|i| DiagnosisMedicineRow {
                diagnosis_name: format!("Diagnosis {i}"),
                medicine_name: "Paracetamol".to_string(),
                prescription_count: 10,
                rank: 1,
            })
            .collect();

        let rendered = diagnosis_medicine_table(&rows).to_string();
        assert!(rendered.contains("Diagnosis 29"));
        assert!(!rendered.contains("Diagnosis 30"));
    }

    #[test]
    fn test_monthly_revenue_table_shows_recent_12() {
        let rows: Vec<MonthlyRevenueRow> = (0..24)
            .map(|i| MonthlyRevenueRow {
                month: format!("2024-{:02}", 24 - i),
                cash_income: 100.0,
                credit_income: 200.0,
                total_income: 300.0,
                cash_percentage: 33.33,
            })
            .collect();

        let rendered = monthly_revenue_table(&rows).to_string();
        assert!(rendered.contains("2024-13"));
        assert!(!rendered.contains("2024-12"));
    }
}
