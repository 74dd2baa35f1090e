//! Derived reliability metrics for one organ.

use serde::{Deserialize, Serialize};

/// Snapshot of the metrics derived from an organ's failure history.
///
/// Every field is `None` until at least one failure has been logged for the
/// organ. `None` means "not computable yet" and is distinct from a computed
/// zero. The record is always replaced as a whole, never field by field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganMetrics {
    /// Mean time between failures (hours)
    pub mtbf: Option<f64>,

    /// Mean time to repair (hours)
    pub mttr: Option<f64>,

    /// Failure rate, 1 / MTBF (per hour)
    pub lambda_val: Option<f64>,

    /// Reliability at the target uptime
    pub reliability_at_t: Option<f64>,

    /// MTBF / (MTBF + MTTR)
    pub availability: Option<f64>,

    /// Operating hours after which reliability falls to the threshold
    pub preventive_maintenance_period: Option<f64>,
}

impl OrganMetrics {
    /// Whether any failure data contributed to this snapshot.
    pub fn is_computed(&self) -> bool {
        self.mtbf.is_some() || self.mttr.is_some()
    }
}
