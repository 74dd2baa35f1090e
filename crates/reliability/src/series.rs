//! Chart-ready series derived from the organ set and failure log.
//!
//! All generators are total: missing data degrades to a placeholder series
//! instead of an error, so a chart always has something to draw.

use std::collections::HashMap;

use gpta_core::{FailureLogEntry, Organ, OrganMetrics, OrganName, ReliabilityParams};
use serde::Serialize;

/// Horizon used when neither MTBF nor the target uptime give a usable one.
pub const FALLBACK_HORIZON: f64 = 1000.0;

/// Number of intervals the reliability curve is split into.
pub const CURVE_INTERVALS: f64 = 20.0;

/// One bar of the Pareto chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParetoEntry {
    /// Organ name
    pub name: OrganName,
    /// Number of logged failures
    pub failures: usize,
    /// Running share of all failures up to this entry, in percent
    pub cumulative_pct: f64,
}

/// A sample of the reliability function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    /// Operating time (hours)
    pub time: f64,
    /// R(t), rounded to 4 decimals
    pub reliability: f64,
}

/// One bar of the MTBF/MTTR comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricBar {
    /// "MTBF" or "MTTR"
    pub metric: &'static str,
    /// Hours, 0.0 when unknown
    pub value: f64,
}

/// Failures per organ, most frequent first, with cumulative percentage.
///
/// Organs without failures are listed with a count of 0. Ties keep
/// first-seen order: names in log order, then failure-free organs in
/// organ-set order.
pub fn pareto_series(organs: &[Organ], events: &[FailureLogEntry]) -> Vec<ParetoEntry> {
    let total = events.len();
    if total == 0 {
        return organs
            .iter()
            .map(|o| ParetoEntry {
                name: o.name.clone(),
                failures: 0,
                cumulative_pct: 0.0,
            })
            .collect();
    }

    let mut counts: Vec<(&OrganName, usize)> = Vec::new();
    let mut index: HashMap<&OrganName, usize> = HashMap::new();
    let names = events.iter().map(|e| &e.organ_name);
    for name in names {
        match index.get(name) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(name, counts.len());
                counts.push((name, 1));
            }
        }
    }
    for organ in organs {
        if !index.contains_key(&organ.name) {
            index.insert(&organ.name, counts.len());
            counts.push((&organ.name, 0));
        }
    }

    // Stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let mut cumulative = 0.0;
    counts
        .into_iter()
        .map(|(name, failures)| {
            cumulative += failures as f64 / total as f64 * 100.0;
            ParetoEntry {
                name: name.clone(),
                failures,
                cumulative_pct: round_to(cumulative, 2),
            }
        })
        .collect()
}

/// Reliability over time for one organ.
///
/// Sampled from 0 to twice the MTBF (twice the target uptime when the MTBF
/// is unknown) in integer steps of about a twentieth of that horizon.
/// Without a positive failure rate the curve is a flat line at 1.0.
pub fn reliability_curve(
    metrics: Option<&OrganMetrics>,
    params: &ReliabilityParams,
) -> Vec<CurvePoint> {
    let lambda = metrics.and_then(|m| m.lambda_val).filter(|l| *l > 0.0);

    let Some(lambda) = lambda else {
        let end = if params.target_uptime_t > 0.0 {
            params.target_uptime_t
        } else {
            FALLBACK_HORIZON
        };
        return vec![
            CurvePoint { time: 0.0, reliability: 1.0 },
            CurvePoint { time: end, reliability: 1.0 },
        ];
    };

    let mut max_t = match metrics.and_then(|m| m.mtbf).filter(|m| *m > 0.0) {
        Some(mtbf) => mtbf * 2.0,
        None => params.target_uptime_t * 2.0,
    };
    if !(max_t > 0.0) {
        max_t = FALLBACK_HORIZON;
    }

    let step = ((max_t / CURVE_INTERVALS).floor() as u64).max(1);
    let last = max_t.floor() as u64;

    (0..=last)
        .step_by(step as usize)
        .map(|t| {
            let time = t as f64;
            CurvePoint {
                time,
                reliability: round_to((-lambda * time).exp(), 4),
            }
        })
        .collect()
}

/// MTBF and MTTR side by side; unknown values and no selection read as 0.0.
pub fn mtbf_mttr_series(metrics: Option<&OrganMetrics>) -> Vec<MetricBar> {
    let mtbf = metrics.and_then(|m| m.mtbf).unwrap_or(0.0);
    let mttr = metrics.and_then(|m| m.mttr).unwrap_or(0.0);
    vec![
        MetricBar { metric: "MTBF", value: mtbf },
        MetricBar { metric: "MTTR", value: mttr },
    ]
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
