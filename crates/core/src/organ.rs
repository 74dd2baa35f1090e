//! Organ model - a tracked piece of equipment.

use crate::error::{Result, ValidationError};
use crate::metrics::OrganMetrics;
use serde::{Deserialize, Serialize};

/// Name identifying an organ.
///
/// Always trimmed and non-empty. Comparison is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrganName(String);

impl OrganName {
    /// Parse a raw name, trimming surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyOrganName);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrganName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for OrganName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for OrganName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<OrganName> for String {
    fn from(name: OrganName) -> Self {
        name.0
    }
}

impl AsRef<str> for OrganName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for OrganName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// A tracked organ with its latest derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organ {
    /// Unique name
    pub name: OrganName,

    /// Metrics from the last recomputation
    #[serde(flatten)]
    pub metrics: OrganMetrics,
}

impl Organ {
    /// Create an organ with no metrics yet.
    pub fn new(name: OrganName) -> Self {
        Self {
            name,
            metrics: OrganMetrics::default(),
        }
    }

    /// Whether reliability at the target uptime is below `threshold`.
    ///
    /// An organ without computable reliability never alerts.
    pub fn reliability_alert(&self, threshold: f64) -> bool {
        matches!(self.metrics.reliability_at_t, Some(r) if r < threshold)
    }
}
