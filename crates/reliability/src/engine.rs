//! Metrics computation under the constant failure rate model.

use gpta_core::{FailureLogEntry, OrganMetrics, ReliabilityParams};
use tracing::trace;

/// Compute an organ's metrics from its failure events.
///
/// With no events every field is `None`. Each field is only filled in once
/// the quantities it depends on are defined:
///
/// ```text
/// mtbf, mttr         n > 0
/// lambda_val         mtbf > 0
/// reliability_at_t   lambda_val
/// maintenance period lambda_val, threshold > 0 (threshold clamped)
/// availability       mtbf + mttr > 0
/// ```
pub fn compute_metrics<'a, I>(events: I, params: &ReliabilityParams) -> OrganMetrics
where
    I: IntoIterator<Item = &'a FailureLogEntry>,
{
    let (count, total_uptime, total_repair) = events.into_iter().fold(
        (0usize, 0.0f64, 0.0f64),
        |(n, up, rep), e| (n + 1, up + e.uptime_since_last_failure, rep + e.repair_duration),
    );

    if count == 0 {
        return OrganMetrics::default();
    }

    let n = count as f64;
    let mtbf = total_uptime / n;
    let mttr = total_repair / n;

    let lambda_val = (mtbf > 0.0).then(|| 1.0 / mtbf);
    let reliability_at_t = lambda_val.map(|lambda| (-lambda * params.target_uptime_t).exp());
    let preventive_maintenance_period = lambda_val
        .filter(|_| params.min_reliability_threshold > 0.0)
        .map(|lambda| -params.clamped_threshold().ln() / lambda);
    let availability = (mtbf + mttr > 0.0).then(|| mtbf / (mtbf + mttr));

    trace!(count, mtbf, mttr, "computed metrics");

    OrganMetrics {
        mtbf: Some(mtbf),
        mttr: Some(mttr),
        lambda_val,
        reliability_at_t,
        availability,
        preventive_maintenance_period,
    }
}
