//! CSV snapshot of one organ: its metrics row and its failure history.

use gpta_core::{FailureLogEntry, Organ, OrganName};

/// Marker written for a metric that cannot be computed yet.
pub const MISSING_VALUE: &str = "NA";

const DETAILS_TITLE: &str = "Organ Details";
const HISTORY_TITLE: &str = "Failure History";

const DETAILS_HEADER: [&str; 7] = [
    "name",
    "mtbf",
    "mttr",
    "lambda_val",
    "reliability_at_t",
    "availability",
    "preventive_maintenance_period",
];

const HISTORY_HEADER: [&str; 5] = [
    "organ_name",
    "failure_date",
    "uptime_since_last_failure",
    "repair_duration",
    "description",
];

/// What gets exported for the selected organ.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSnapshot {
    /// Organ with its current metrics
    pub organ: Organ,
    /// Its failure history in insertion order
    pub history: Vec<FailureLogEntry>,
}

impl ExportSnapshot {
    /// Render both sections as CSV.
    ///
    /// Column order is fixed. The history header is written even when the
    /// organ has no failures.
    pub fn to_csv(&self) -> String {
        let mut rows: Vec<Vec<String>> = Vec::with_capacity(self.history.len() + 6);

        rows.push(vec![DETAILS_TITLE.to_string()]);
        rows.push(DETAILS_HEADER.iter().map(|h| h.to_string()).collect());
        let m = &self.organ.metrics;
        rows.push(vec![
            self.organ.name.to_string(),
            optional(m.mtbf),
            optional(m.mttr),
            optional(m.lambda_val),
            optional(m.reliability_at_t),
            optional(m.availability),
            optional(m.preventive_maintenance_period),
        ]);

        rows.push(Vec::new());

        rows.push(vec![HISTORY_TITLE.to_string()]);
        rows.push(HISTORY_HEADER.iter().map(|h| h.to_string()).collect());
        for entry in &self.history {
            rows.push(vec![
                entry.organ_name.to_string(),
                entry.failure_date.format("%Y-%m-%d").to_string(),
                entry.uptime_since_last_failure.to_string(),
                entry.repair_duration.to_string(),
                entry.description.clone(),
            ]);
        }

        let mut csv = String::new();
        for row in rows {
            let line = row
                .iter()
                .map(|cell| escape_csv(cell))
                .collect::<Vec<_>>()
                .join(",");
            csv.push_str(&line);
            csv.push('\n');
        }
        csv
    }
}

/// File name for an organ's report; non-alphanumeric characters become `_`.
pub fn export_file_name(organ: Option<&OrganName>) -> String {
    let stem = match organ {
        Some(name) => name
            .as_str()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect::<String>(),
        None => "unknown_organ".to_string(),
    };
    format!("{stem}_report.csv")
}

fn optional(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING_VALUE.to_string(), |v| v.to_string())
}

fn escape_csv(value: &str) -> String {
    let needs_quotes = value.contains(',')
        || value.contains('"')
        || value.contains('\n')
        || value.contains('\r');
    if needs_quotes {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpta_core::{parse_failure_date, OrganMetrics};

    fn name(s: &str) -> OrganName {
        OrganName::parse(s).unwrap()
    }

    fn entry(description: &str) -> FailureLogEntry {
        FailureLogEntry {
            organ_name: name("Moteur"),
            failure_date: parse_failure_date("2023-03-10").unwrap(),
            uptime_since_last_failure: 3500.0,
            repair_duration: 24.5,
            description: description.to_string(),
        }
    }

    #[test]
    fn test_snapshot_layout() {
        let mut organ = Organ::new(name("Moteur"));
        organ.metrics = OrganMetrics {
            mtbf: Some(3500.0),
            mttr: Some(24.5),
            lambda_val: Some(0.0002),
            reliability_at_t: None,
            availability: Some(0.5),
            preventive_maintenance_period: None,
        };
        let snapshot = ExportSnapshot {
            organ,
            history: vec![entry("Surchauffe")],
        };

        let csv = snapshot.to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            [
                "Organ Details",
                "name,mtbf,mttr,lambda_val,reliability_at_t,availability,preventive_maintenance_period",
                "Moteur,3500,24.5,0.0002,NA,0.5,NA",
                "",
                "Failure History",
                "organ_name,failure_date,uptime_since_last_failure,repair_duration,description",
                "Moteur,2023-03-10,3500,24.5,Surchauffe",
            ]
        );
    }

    #[test]
    fn test_empty_history_keeps_header() {
        let snapshot = ExportSnapshot {
            organ: Organ::new(name("Soupape by-pass")),
            history: Vec::new(),
        };
        let csv = snapshot.to_csv();

        assert!(csv.contains("Soupape by-pass,NA,NA,NA,NA,NA,NA\n"));
        assert!(csv.ends_with(
            "organ_name,failure_date,uptime_since_last_failure,repair_duration,description\n"
        ));
    }

    #[test]
    fn test_separators_are_quoted() {
        let snapshot = ExportSnapshot {
            organ: Organ::new(name("ADCU, unité \"A\"")),
            history: vec![entry("Fuite, joint\nremplacé")],
        };
        let csv = snapshot.to_csv();

        assert!(csv.contains("\"ADCU, unité \"\"A\"\"\",NA"));
        assert!(csv.contains(",\"Fuite, joint\nremplacé\"\n"));
    }

    #[test]
    fn test_small_numbers_stay_decimal() {
        assert_eq!(optional(Some(1e-7)), "0.0000001");
        assert_eq!(optional(None), "NA");
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(
            export_file_name(Some(&name("Sécheur d'air"))),
            "Sécheur_d_air_report.csv"
        );
        assert_eq!(
            export_file_name(Some(&name("ADCU (unité de commande)"))),
            "ADCU__unité_de_commande__report.csv"
        );
        assert_eq!(export_file_name(None), "unknown_organ_report.csv");
    }
}
