//! Data the dashboard starts with: the organs of a compressed-air dryer
//! unit and their first recorded failures.

use gpta_core::{parse_failure_date, FailureLogEntry, OrganName, Result};

/// Organs present at startup, in display order.
pub const DEFAULT_ORGANS: [&str; 7] = [
    "Groupe à vis",
    "Moteur",
    "Sécheur d'air",
    "Électrovanne de régénération",
    "ADCU (unité de commande)",
    "Capteur de point de rosée",
    "Soupape by-pass",
];

// (organ, date, uptime h, repair h, description)
const DEFAULT_FAILURES: [(&str, &str, f64, f64, &str); 5] = [
    ("Groupe à vis", "2023-01-15", 2000.0, 10.0, "Défaillance roulement"),
    ("Groupe à vis", "2023-05-20", 2800.0, 12.0, "Fuite joint"),
    ("Moteur", "2023-03-10", 3500.0, 24.0, "Surchauffe"),
    ("Sécheur d'air", "2023-06-01", 4000.0, 8.0, "Colmatage filtre"),
    ("Groupe à vis", "2023-09-10", 2500.0, 15.0, "Vibration excessive"),
];

/// Failure history present at startup, in insertion order.
pub fn default_failure_logs() -> Result<Vec<FailureLogEntry>> {
    DEFAULT_FAILURES
        .iter()
        .map(|&(organ, date, uptime, repair, description)| {
            FailureLogEntry::new(
                OrganName::parse(organ)?,
                parse_failure_date(date)?,
                uptime,
                repair,
                description,
            )
        })
        .collect()
}
