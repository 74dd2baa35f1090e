//! Global evaluation parameters.

use serde::{Deserialize, Serialize};

/// Default reliability horizon, in hours.
pub const DEFAULT_TARGET_UPTIME_T: f64 = 1000.0;

/// Default minimum acceptable reliability.
pub const DEFAULT_MIN_RELIABILITY_THRESHOLD: f64 = 0.95;

/// Lowest threshold used when deriving a maintenance interval.
pub const THRESHOLD_FLOOR: f64 = 1e-6;

/// Highest threshold used when deriving a maintenance interval.
pub const THRESHOLD_CEILING: f64 = 0.999999;

/// Parameters every organ's metrics are evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReliabilityParams {
    /// Horizon for `reliability_at_t`, in hours (>= 0)
    pub target_uptime_t: f64,

    /// Reliability floor used for the maintenance interval, in (0, 1]
    pub min_reliability_threshold: f64,
}

impl Default for ReliabilityParams {
    fn default() -> Self {
        Self {
            target_uptime_t: DEFAULT_TARGET_UPTIME_T,
            min_reliability_threshold: DEFAULT_MIN_RELIABILITY_THRESHOLD,
        }
    }
}

impl ReliabilityParams {
    /// Set the target uptime. Negative (or NaN) values become `0.0`.
    pub fn with_target_uptime_t(mut self, value: f64) -> Self {
        self.target_uptime_t = if value >= 0.0 { value } else { 0.0 };
        self
    }

    /// Set the reliability threshold.
    ///
    /// Values above 1 become `1.0`; zero, negative or NaN become
    /// [`THRESHOLD_FLOOR`].
    pub fn with_min_reliability_threshold(mut self, value: f64) -> Self {
        self.min_reliability_threshold = if value > 0.0 && value <= 1.0 {
            value
        } else if value > 1.0 {
            1.0
        } else {
            THRESHOLD_FLOOR
        };
        self
    }

    /// Apply the setter coercions to both fields.
    ///
    /// For parameters that did not come through the setters, e.g. a
    /// deserialized configuration.
    pub fn normalized(self) -> Self {
        Self::default()
            .with_target_uptime_t(self.target_uptime_t)
            .with_min_reliability_threshold(self.min_reliability_threshold)
    }

    /// Threshold clamped into `[THRESHOLD_FLOOR, THRESHOLD_CEILING]`.
    pub fn clamped_threshold(&self) -> f64 {
        self.min_reliability_threshold.clamp(THRESHOLD_FLOOR, THRESHOLD_CEILING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ReliabilityParams::default();
        assert_eq!(params.target_uptime_t, 1000.0);
        assert_eq!(params.min_reliability_threshold, 0.95);
    }

    #[test]
    fn test_target_uptime_coercion() {
        let params = ReliabilityParams::default();
        assert_eq!(params.with_target_uptime_t(250.0).target_uptime_t, 250.0);
        assert_eq!(params.with_target_uptime_t(0.0).target_uptime_t, 0.0);
        assert_eq!(params.with_target_uptime_t(-5.0).target_uptime_t, 0.0);
        assert_eq!(params.with_target_uptime_t(f64::NAN).target_uptime_t, 0.0);
    }

    #[test]
    fn test_threshold_coercion() {
        let params = ReliabilityParams::default();
        assert_eq!(params.with_min_reliability_threshold(0.9).min_reliability_threshold, 0.9);
        assert_eq!(params.with_min_reliability_threshold(1.0).min_reliability_threshold, 1.0);
        assert_eq!(params.with_min_reliability_threshold(1.5).min_reliability_threshold, 1.0);
        assert_eq!(params.with_min_reliability_threshold(0.0).min_reliability_threshold, THRESHOLD_FLOOR);
        assert_eq!(params.with_min_reliability_threshold(-0.2).min_reliability_threshold, THRESHOLD_FLOOR);
    }

    #[test]
    fn test_clamped_threshold() {
        let params = ReliabilityParams::default().with_min_reliability_threshold(1.0);
        assert_eq!(params.clamped_threshold(), THRESHOLD_CEILING);

        let params = ReliabilityParams { target_uptime_t: 1.0, min_reliability_threshold: 0.0 };
        assert_eq!(params.clamped_threshold(), THRESHOLD_FLOOR);
    }

    #[test]
    fn test_normalized() {
        let raw = ReliabilityParams { target_uptime_t: -2000.0, min_reliability_threshold: 5.0 };
        let params = raw.normalized();
        assert_eq!(params.target_uptime_t, 0.0);
        assert_eq!(params.min_reliability_threshold, 1.0);

        let raw = ReliabilityParams { target_uptime_t: 300.0, min_reliability_threshold: 0.0 };
        let params = raw.normalized();
        assert_eq!(params.target_uptime_t, 300.0);
        assert_eq!(params.min_reliability_threshold, THRESHOLD_FLOOR);

        assert_eq!(ReliabilityParams::default().normalized(), ReliabilityParams::default());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let params: ReliabilityParams = serde_json::from_str(r#"{"target_uptime_t": 500.0}"#).unwrap();
        assert_eq!(params.target_uptime_t, 500.0);
        assert_eq!(params.min_reliability_threshold, 0.95);
    }
}
