//! Fixed vocabularies the generator samples from.
//!
//! These are deliberately constant: together with the seed they fully
//! determine the generated dataset.

/// The five hospitals, inserted verbatim with fixed ids.
pub const HOSPITALS: [(i64, &str); 5] = [
    (1, "KLES Dr Prabhakar Kore Hospital, Belagavi"),
    (2, "Parul Sevashram Hospital, Gujarat"),
    (3, "MGM Institute of Health Sciences, Mumbai"),
    (4, "Sharda University Hospital, Delhi"),
    (5, "DY Patil University Hospital, Pune"),
];

/// Patient first names (20). Names are drawn with replacement, so
/// collisions across patients are expected.
pub const FIRST_NAMES: [&str; 20] = [
    "Rajesh", "Priya", "Amit", "Anjali", "Arjun", "Deepika", "Vikram", "Neha", "Rohan", "Isha",
    "Aditya", "Pooja", "Sanjay", "Sneha", "Varun", "Ravi", "Sunita", "Nitin", "Kavya", "Harish",
];

/// Patient last names (20).
pub const LAST_NAMES: [&str; 20] = [
    "Sharma", "Patel", "Kumar", "Singh", "Gupta", "Verma", "Desai", "Menon", "Iyer", "Bhat",
    "Nair", "Kapoor", "Malhotra", "Khanna", "Sinha", "Reddy", "Joshi", "Trivedi", "Mishra",
    "Pandey",
];

/// Diagnosis vocabulary (20). Each patient gets exactly two, without
/// replacement.
pub const DIAGNOSES: [&str; 20] = [
    "Hypertension",
    "Type 2 Diabetes",
    "Pneumonia",
    "Bronchitis",
    "Gastritis",
    "Urinary Tract Infection",
    "Migraine",
    "Asthma",
    "Arthritis",
    "Anemia",
    "Viral Fever",
    "Dengue",
    "COVID-19",
    "Whooping Cough",
    "Malaria",
    "Cholecystitis",
    "Appendicitis",
    "Pyelonephritis",
    "Dyslipidemia",
    "Obesity",
];

/// Medicine vocabulary (25). Each patient gets 5-8, without replacement.
pub const MEDICINES: [&str; 25] = [
    "Paracetamol",
    "Ibuprofen",
    "Amoxicillin",
    "Metformin",
    "Lisinopril",
    "Atorvastatin",
    "Aspirin",
    "Clopidogrel",
    "Metoprolol",
    "Amlodipine",
    "Omeprazole",
    "Ranitidine",
    "Azithromycin",
    "Doxycycline",
    "Ciprofloxacin",
    "Cetirizine",
    "Albuterol",
    "Fluticasone",
    "Levothyroxine",
    "Vitamin D",
    "Cefixime",
    "Mefenamic Acid",
    "Chloroquine",
    "Sulfamethoxazole",
    "Insulin",
];

/// Dose schedule labels (8), drawn with replacement per treatment.
pub const DOSE_TIMES: [&str; 8] = [
    "Morning",
    "Afternoon",
    "Evening",
    "Night",
    "Before Food",
    "After Food",
    "Twice Daily",
    "Thrice Daily",
];

/// Raw payment methods (5). Collapsed to {Cash, Credit} before storage.
pub const PAYMENT_MODES: [&str; 5] = [
    "Cash",
    "Credit Card",
    "Debit Card",
    "Insurance",
    "Online Transfer",
];
