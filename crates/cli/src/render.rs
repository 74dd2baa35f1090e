//! Plain-text tables for the terminal.

use gpta_core::{OrganMetrics, ReliabilityParams};
use gpta_dashboard::Dashboard;
use gpta_reliability::{CurvePoint, MetricBar, ParetoEntry};

const NOT_AVAILABLE: &str = "N/A";

/// Value with fixed precision and optional unit, or `N/A`.
pub fn format_value(value: Option<f64>, precision: usize, unit: &str) -> String {
    match value {
        None => NOT_AVAILABLE.to_string(),
        Some(v) if unit.is_empty() => format!("{v:.precision$}"),
        Some(v) => format!("{v:.precision$} {unit}"),
    }
}

/// Fraction shown as a percentage, or `N/A`.
pub fn format_percent(value: Option<f64>, precision: usize) -> String {
    match value {
        None => NOT_AVAILABLE.to_string(),
        Some(v) => format!("{:.precision$} %", v * 100.0),
    }
}

/// One line per organ; `!` marks reliability below the threshold.
pub fn organ_table(dashboard: &Dashboard) -> String {
    let params = dashboard.params();
    let mut lines = vec![
        params_line(params),
        format!(
            "  {:<32} {:>12} {:>10} {:>12} {:>10} {:>10} {:>12}",
            "Organ", "MTBF", "MTTR", "Lambda", "R(T)", "Avail.", "PM period"
        ),
    ];
    for organ in dashboard.organs() {
        let m = &organ.metrics;
        let marker = if organ.reliability_alert(params.min_reliability_threshold) { '!' } else { ' ' };
        lines.push(format!(
            "{} {:<32} {:>12} {:>10} {:>12} {:>10} {:>10} {:>12}",
            marker,
            organ.name,
            format_value(m.mtbf, 2, "h"),
            format_value(m.mttr, 2, "h"),
            format_value(m.lambda_val, 6, ""),
            format_percent(m.reliability_at_t, 2),
            format_percent(m.availability, 2),
            format_value(m.preventive_maintenance_period, 2, "h"),
        ));
    }
    to_block(lines)
}

/// Metrics and failure history of the selected organ.
pub fn organ_details(dashboard: &Dashboard) -> String {
    let Some(organ) = dashboard.selected_organ() else {
        return to_block(vec!["No organ selected".to_string()]);
    };

    let params = dashboard.params();
    let mut lines = vec![format!("Organ: {}", organ.name), params_line(params)];
    if organ.metrics.is_computed() {
        lines.extend(metric_lines(&organ.metrics));
    } else {
        lines.push("  No failures logged yet".to_string());
    }
    if organ.reliability_alert(params.min_reliability_threshold) {
        lines.push("  ! reliability at T is below the threshold".to_string());
    }

    let history = dashboard.selected_failure_history();
    lines.push(format!("Failure history ({})", history.len()));
    lines.extend(history.into_iter().map(|entry| {
        format!(
            "  {} | {:>8} h | {:>6} h | {}",
            entry.failure_date,
            entry.uptime_since_last_failure,
            entry.repair_duration,
            entry.description,
        )
    }));
    to_block(lines)
}

/// Pareto series as a table.
pub fn pareto_table(series: &[ParetoEntry]) -> String {
    let header = format!("  {:<32} {:>8} {:>12}", "Organ", "Failures", "Cumulative");
    let rows = series.iter().map(|entry| {
        format!(
            "  {:<32} {:>8} {:>10.2} %",
            entry.name, entry.failures, entry.cumulative_pct
        )
    });
    to_block(std::iter::once(header).chain(rows).collect())
}

/// Reliability curve as a table.
pub fn curve_table(curve: &[CurvePoint]) -> String {
    let header = format!("  {:>10} {:>8}", "t (h)", "R(t)");
    let rows = curve
        .iter()
        .map(|point| format!("  {:>10} {:>8.4}", point.time, point.reliability));
    to_block(std::iter::once(header).chain(rows).collect())
}

/// MTBF/MTTR comparison as a table.
pub fn bars_table(bars: &[MetricBar]) -> String {
    to_block(
        bars.iter()
            .map(|bar| format!("  {:<5} {:>12.2} h", bar.metric, bar.value))
            .collect(),
    )
}

fn params_line(params: &ReliabilityParams) -> String {
    format!(
        "T = {} h, threshold = {:.2} %",
        params.target_uptime_t,
        params.min_reliability_threshold * 100.0
    )
}

fn metric_lines(m: &OrganMetrics) -> Vec<String> {
    [
        ("MTBF", format_value(m.mtbf, 2, "h")),
        ("MTTR", format_value(m.mttr, 2, "h")),
        ("Failure rate", format_value(m.lambda_val, 6, "/h")),
        ("Reliability R(T)", format_percent(m.reliability_at_t, 2)),
        ("Availability", format_percent(m.availability, 2)),
        ("PM period", format_value(m.preventive_maintenance_period, 2, "h")),
    ]
    .into_iter()
    .map(|(label, value)| format!("  {label:<18} {value}"))
    .collect()
}

// Every line newline-terminated
fn to_block(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(None, 2, "h"), "N/A");
        assert_eq!(format_value(Some(2433.3333), 2, "h"), "2433.33 h");
        assert_eq!(format_value(Some(0.000410958), 6, ""), "0.000411");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(None, 2), "N/A");
        assert_eq!(format_percent(Some(0.99496), 2), "99.50 %");
    }

    #[test]
    fn test_organ_table_marks_alerts() {
        let dashboard = Dashboard::seeded(ReliabilityParams::default()).unwrap();
        let table = organ_table(&dashboard);
        assert!(table.lines().any(|l| l.starts_with("! Moteur")));
        assert!(table.lines().any(|l| l.starts_with("  Soupape by-pass") && l.contains("N/A")));
    }

    #[test]
    fn test_details_of_organ_without_failures() {
        let mut dashboard = Dashboard::seeded(ReliabilityParams::default()).unwrap();
        dashboard.select_organ("Soupape by-pass").unwrap();
        let details = organ_details(&dashboard);
        assert!(details.contains("No failures logged yet"));
        assert!(!details.contains("MTBF"));
        assert!(details.ends_with("Failure history (0)\n"));
    }

    #[test]
    fn test_details_of_selected_organ() {
        let mut dashboard = Dashboard::seeded(ReliabilityParams::default()).unwrap();
        dashboard.select_organ("Moteur").unwrap();
        let details = organ_details(&dashboard);
        assert!(details.starts_with("Organ: Moteur\n"));
        assert!(details.contains("3500.00 h"));
        assert!(details.contains("! reliability at T is below the threshold"));
        assert!(details.contains("2023-03-10 |"));
    }

    #[test]
    fn test_details_without_selection() {
        let dashboard = Dashboard::seeded(ReliabilityParams::default()).unwrap();
        assert_eq!(organ_details(&dashboard), "No organ selected\n");
    }
}
