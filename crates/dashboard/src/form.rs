//! Text intake for new failure records.

use gpta_core::{parse_failure_date, FailureLogEntry, OrganName, Result, ValidationError};
use serde::{Deserialize, Serialize};

/// Raw failure record as typed by a user.
///
/// Every field is text; [`FailureLogForm::parse`] turns it into a validated
/// [`FailureLogEntry`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FailureLogForm {
    /// Organ that failed
    pub organ_name: String,
    /// ISO date, `YYYY-MM-DD`
    pub failure_date: String,
    /// Hours operated since the previous failure
    pub uptime_since_last_failure: String,
    /// Hours spent repairing
    pub repair_duration: String,
    /// What happened
    pub description: String,
}

impl FailureLogForm {
    /// Blank form for an organ, dated today.
    pub fn new(organ_name: impl Into<String>) -> Self {
        Self {
            organ_name: organ_name.into(),
            failure_date: chrono::Local::now().date_naive().format("%Y-%m-%d").to_string(),
            ..Default::default()
        }
    }

    /// Validate every field and build the entry.
    ///
    /// All fields must be present before any of them is interpreted.
    pub fn parse(&self) -> Result<FailureLogEntry> {
        let organ_name = required("organ_name", &self.organ_name)?;
        let failure_date = required("failure_date", &self.failure_date)?;
        let uptime = required("uptime_since_last_failure", &self.uptime_since_last_failure)?;
        let repair = required("repair_duration", &self.repair_duration)?;
        let description = required("description", &self.description)?;

        FailureLogEntry::new(
            OrganName::parse(organ_name)?,
            parse_failure_date(failure_date)?,
            parse_number("uptime_since_last_failure", uptime)?,
            parse_number("repair_duration", repair)?,
            description,
        )
    }
}

/// Parse a finite decimal number typed by a user.
pub fn parse_number(field: &'static str, raw: &str) -> Result<f64> {
    let raw = raw.trim();
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::InvalidNumber {
            field,
            input: raw.to_string(),
        }),
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::EmptyField(field))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> FailureLogForm {
        FailureLogForm {
            organ_name: "Moteur".to_string(),
            failure_date: "2023-03-10".to_string(),
            uptime_since_last_failure: "3500".to_string(),
            repair_duration: " 24.5 ".to_string(),
            description: "Surchauffe".to_string(),
        }
    }

    #[test]
    fn test_parse_valid_form() {
        let entry = form().parse().unwrap();
        assert_eq!(entry.organ_name.as_str(), "Moteur");
        assert_eq!(entry.failure_date.to_string(), "2023-03-10");
        assert_eq!(entry.uptime_since_last_failure, 3500.0);
        assert_eq!(entry.repair_duration, 24.5);
    }

    #[test]
    fn test_missing_field() {
        let mut f = form();
        f.description = "  ".to_string();
        assert_eq!(f.parse(), Err(ValidationError::EmptyField("description")));

        let mut f = form();
        f.uptime_since_last_failure.clear();
        assert_eq!(f.parse(), Err(ValidationError::EmptyField("uptime_since_last_failure")));
    }

    #[test]
    fn test_malformed_number() {
        let mut f = form();
        f.repair_duration = "two hours".to_string();
        assert_eq!(
            f.parse(),
            Err(ValidationError::InvalidNumber {
                field: "repair_duration",
                input: "two hours".to_string(),
            })
        );
    }

    #[test]
    fn test_non_finite_number() {
        for raw in ["inf", "-infinity", "NaN"] {
            assert!(matches!(
                parse_number("target_uptime_t", raw),
                Err(ValidationError::InvalidNumber { .. })
            ));
        }
        assert_eq!(parse_number("target_uptime_t", " 1e3 "), Ok(1000.0));
    }

    #[test]
    fn test_zero_repair() {
        let mut f = form();
        f.repair_duration = "0".to_string();
        assert!(matches!(
            f.parse(),
            Err(ValidationError::NonPositive { field: "repair_duration", .. })
        ));
    }

    #[test]
    fn test_malformed_date() {
        let mut f = form();
        f.failure_date = "2023-13-01".to_string();
        assert_eq!(f.parse(), Err(ValidationError::InvalidDate("2023-13-01".to_string())));
    }

    #[test]
    fn test_new_form_is_dated_today() {
        let f = FailureLogForm::new("Moteur");
        assert!(parse_failure_date(&f.failure_date).is_ok());
        assert!(f.description.is_empty());
    }
}
