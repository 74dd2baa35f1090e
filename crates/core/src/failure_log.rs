//! Failure log model - one repair event for one organ.

use crate::error::{Result, ValidationError};
use crate::organ::OrganName;
use crate::Date;
use serde::{Deserialize, Serialize};

/// A single failure followed by its repair.
///
/// Entries are immutable once appended to the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureLogEntry {
    /// Organ that failed
    pub organ_name: OrganName,

    /// Calendar date of the failure
    pub failure_date: Date,

    /// Hours operated since the previous failure
    pub uptime_since_last_failure: f64,

    /// Hours spent repairing
    pub repair_duration: f64,

    /// What happened
    pub description: String,
}

impl FailureLogEntry {
    /// Build and validate an entry.
    pub fn new(
        organ_name: OrganName,
        failure_date: Date,
        uptime_since_last_failure: f64,
        repair_duration: f64,
        description: impl Into<String>,
    ) -> Result<Self> {
        let entry = Self {
            organ_name,
            failure_date,
            uptime_since_last_failure,
            repair_duration,
            description: description.into().trim().to_string(),
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Check the field constraints.
    pub fn validate(&self) -> Result<()> {
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyField("description"));
        }
        check_positive("uptime_since_last_failure", self.uptime_since_last_failure)?;
        check_positive("repair_duration", self.repair_duration)?;
        Ok(())
    }
}

/// Parse an ISO `YYYY-MM-DD` calendar date.
pub fn parse_failure_date(raw: &str) -> Result<Date> {
    let raw = raw.trim();
    Date::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate(raw.to_string()))
}

fn check_positive(field: &'static str, value: f64) -> Result<()> {
    // NaN fails the comparison too
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NonPositive { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moteur() -> OrganName {
        OrganName::parse("Moteur").unwrap()
    }

    fn date(s: &str) -> Date {
        parse_failure_date(s).unwrap()
    }

    #[test]
    fn test_valid_entry() {
        let entry = FailureLogEntry::new(moteur(), date("2023-03-10"), 3500.0, 24.0, " Surchauffe ").unwrap();
        assert_eq!(entry.description, "Surchauffe");
        assert_eq!(entry.uptime_since_last_failure, 3500.0);
    }

    #[test]
    fn test_zero_repair_rejected() {
        let err = FailureLogEntry::new(moteur(), date("2023-03-10"), 3500.0, 0.0, "Surchauffe").unwrap_err();
        assert!(matches!(err, ValidationError::NonPositive { field: "repair_duration", .. }));
    }

    #[test]
    fn test_negative_uptime_rejected() {
        let err = FailureLogEntry::new(moteur(), date("2023-03-10"), -1.0, 2.0, "Surchauffe").unwrap_err();
        assert!(matches!(err, ValidationError::NonPositive { field: "uptime_since_last_failure", .. }));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(FailureLogEntry::new(moteur(), date("2023-03-10"), f64::NAN, 2.0, "x").is_err());
        assert!(FailureLogEntry::new(moteur(), date("2023-03-10"), 10.0, f64::INFINITY, "x").is_err());
    }

    #[test]
    fn test_blank_description_rejected() {
        let err = FailureLogEntry::new(moteur(), date("2023-03-10"), 1.0, 1.0, "   ").unwrap_err();
        assert_eq!(err, ValidationError::EmptyField("description"));
    }

    #[test]
    fn test_parse_failure_date() {
        assert_eq!(date("2024-02-29").to_string(), "2024-02-29");
        assert!(matches!(parse_failure_date("2023-02-29"), Err(ValidationError::InvalidDate(_))));
        assert!(parse_failure_date("15/01/2023").is_err());
        assert!(parse_failure_date("").is_err());
    }

    #[test]
    fn test_date_serializes_as_iso() {
        let entry = FailureLogEntry::new(moteur(), date("2023-01-15"), 2000.0, 10.0, "Défaillance roulement").unwrap();
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["failure_date"], "2023-01-15");
        assert_eq!(json["organ_name"], "Moteur");
    }
}
