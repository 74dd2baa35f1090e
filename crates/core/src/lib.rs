//! GPTA core data models.
//!
//! This crate defines the records the maintenance dashboard works with:
//! organs, their failure history, the derived reliability metrics and the
//! global parameters the metrics are evaluated against.

#![warn(missing_docs)]

// Validation
mod error;

// Equipment
mod organ;
mod metrics;

// History
mod failure_log;

// Global parameters
mod params;

// Re-exports
pub use error::{ValidationError, Result};
pub use organ::{Organ, OrganName};
pub use metrics::OrganMetrics;
pub use failure_log::{FailureLogEntry, parse_failure_date};
pub use params::{
    ReliabilityParams, DEFAULT_MIN_RELIABILITY_THRESHOLD, DEFAULT_TARGET_UPTIME_T,
    THRESHOLD_CEILING, THRESHOLD_FLOOR,
};

/// Calendar date type used for failure records.
pub type Date = chrono::NaiveDate;
