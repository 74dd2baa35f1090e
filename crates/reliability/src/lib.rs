//! Reliability metrics engine.
//!
//! Pure functions turning an organ's failure history into MTBF, MTTR,
//! failure rate, reliability, availability and a preventive maintenance
//! interval, plus the chart series and CSV export built from them.

#![warn(missing_docs)]

pub mod engine;
pub mod series;
pub mod export;

pub use engine::compute_metrics;
pub use series::{
    mtbf_mttr_series, pareto_series, reliability_curve, CurvePoint, MetricBar, ParetoEntry,
};
pub use export::{export_file_name, ExportSnapshot};
