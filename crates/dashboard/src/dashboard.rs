//! The dashboard state and its operations.

use gpta_core::{FailureLogEntry, Organ, OrganMetrics, OrganName, ReliabilityParams, ValidationError};
use gpta_reliability::{
    compute_metrics, export_file_name, mtbf_mttr_series, pareto_series, reliability_curve,
    CurvePoint, ExportSnapshot, MetricBar, ParetoEntry,
};
use gpta_storage::{MemoryStorage, Storage, StorageError};
use tracing::{debug, info, warn};

use crate::form::{parse_number, FailureLogForm};

/// Result type for dashboard operations.
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Errors surfaced to the user. State is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DashboardError {
    /// Store rejected the operation
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Input rejected before reaching the store
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No organ with that name
    #[error("Unknown organ: {0}")]
    UnknownOrgan(String),

    /// Operation needs a selected organ
    #[error("No organ selected")]
    NoSelection,
}

/// Maintenance dashboard.
///
/// Metrics stored on each organ are always those computed from the current
/// failure log and parameters:
/// ```text
/// mutate → validate → apply → recompute affected organs
/// ```
#[derive(Debug)]
pub struct Dashboard<S: Storage = MemoryStorage> {
    storage: S,
    params: ReliabilityParams,
    selected: Option<OrganName>,
}

impl Dashboard<MemoryStorage> {
    /// Dashboard over the default organs and failure history.
    pub fn seeded(params: ReliabilityParams) -> Result<Self> {
        Self::new(MemoryStorage::seeded()?, params)
    }
}

impl<S: Storage> Dashboard<S> {
    /// Create a dashboard and compute metrics for what the storage holds.
    ///
    /// `params` go through the same coercion as the setters.
    pub fn new(storage: S, params: ReliabilityParams) -> Result<Self> {
        let mut dashboard = Self {
            storage,
            params: params.normalized(),
            selected: None,
        };
        dashboard.recompute_all()?;
        Ok(dashboard)
    }

    // === Mutations ===

    /// Create an organ. Blank and duplicate names are rejected.
    pub fn create_organ(&mut self, raw_name: &str) -> Result<&Organ> {
        let name = match self.storage.create_organ(raw_name) {
            Ok(organ) => organ.name.clone(),
            Err(e) => {
                warn!("Rejected organ '{}': {}", raw_name.trim(), e);
                return Err(e.into());
            }
        };
        // Events may have been logged under this name before it existed
        self.recompute(&name)?;
        info!("Created organ: {}", name);
        self.require_organ(&name)
    }

    /// Append a failure event and refresh that organ's metrics.
    pub fn append_event(&mut self, entry: FailureLogEntry) -> Result<()> {
        let name = entry.organ_name.clone();
        if let Err(e) = self.storage.append_event(entry) {
            warn!("Rejected failure for {}: {}", name, e);
            return Err(e.into());
        }
        info!("Logged failure for {}", name);

        if self.storage.organ(name.as_str()).is_some() {
            self.recompute(&name)?;
        }
        Ok(())
    }

    /// Parse a text form and append the resulting event.
    pub fn submit_failure_form(&mut self, form: &FailureLogForm) -> Result<()> {
        let entry = form.parse().map_err(|e| {
            warn!("Rejected failure form: {}", e);
            e
        })?;
        self.append_event(entry)
    }

    /// Set the reliability horizon and refresh every organ.
    ///
    /// Infinite values are rejected.
    pub fn set_target_uptime_t(&mut self, value: f64) -> Result<()> {
        reject_infinite("target_uptime_t", value)?;
        self.params = self.params.with_target_uptime_t(value);
        info!("Target uptime set to {} h", self.params.target_uptime_t);
        self.recompute_all()
    }

    /// Like [`Self::set_target_uptime_t`], from text.
    pub fn set_target_uptime_input(&mut self, raw: &str) -> Result<()> {
        let value = parse_number("target_uptime_t", raw)?;
        self.set_target_uptime_t(value)
    }

    /// Set the reliability threshold and refresh every organ.
    ///
    /// Infinite values are rejected.
    pub fn set_min_reliability_threshold(&mut self, value: f64) -> Result<()> {
        reject_infinite("min_reliability_threshold", value)?;
        self.params = self.params.with_min_reliability_threshold(value);
        info!("Reliability threshold set to {}", self.params.min_reliability_threshold);
        self.recompute_all()
    }

    /// Like [`Self::set_min_reliability_threshold`], from text.
    pub fn set_min_reliability_threshold_input(&mut self, raw: &str) -> Result<()> {
        let value = parse_number("min_reliability_threshold", raw)?;
        self.set_min_reliability_threshold(value)
    }

    /// Make an existing organ the active selection.
    pub fn select_organ(&mut self, raw_name: &str) -> Result<&Organ> {
        let name = OrganName::parse(raw_name)?;
        if self.storage.organ(name.as_str()).is_none() {
            warn!("Cannot select unknown organ: {}", name);
            return Err(DashboardError::UnknownOrgan(name.to_string()));
        }
        self.recompute(&name)?;
        self.selected = Some(name.clone());
        debug!("Selected organ: {}", name);
        self.require_organ(&name)
    }

    // === Reads ===

    /// Current parameters.
    pub fn params(&self) -> &ReliabilityParams {
        &self.params
    }

    /// Underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// All organs with their metrics.
    pub fn organs(&self) -> &[Organ] {
        self.storage.organs()
    }

    /// One organ by exact name.
    pub fn organ(&self, name: &str) -> Option<&Organ> {
        self.storage.organ(name)
    }

    /// Name of the selected organ.
    pub fn selected_name(&self) -> Option<&OrganName> {
        self.selected.as_ref()
    }

    /// The selected organ.
    pub fn selected_organ(&self) -> Option<&Organ> {
        self.selected
            .as_ref()
            .and_then(|name| self.storage.organ(name.as_str()))
    }

    /// Metrics of the selected organ.
    pub fn selected_metrics(&self) -> Option<&OrganMetrics> {
        self.selected_organ().map(|o| &o.metrics)
    }

    /// Failure history of one organ, in insertion order.
    pub fn failure_history(&self, name: &str) -> Vec<&FailureLogEntry> {
        match OrganName::parse(name) {
            Ok(name) => self.storage.events_for(&name),
            Err(_) => Vec::new(),
        }
    }

    /// Failure history of the selected organ; empty without a selection.
    pub fn selected_failure_history(&self) -> Vec<&FailureLogEntry> {
        match &self.selected {
            Some(name) => self.storage.events_for(name),
            None => Vec::new(),
        }
    }

    /// Organs whose reliability at the target uptime is below the threshold.
    pub fn alerting_organs(&self) -> Vec<&Organ> {
        let threshold = self.params.min_reliability_threshold;
        self.organs()
            .iter()
            .filter(|o| o.reliability_alert(threshold))
            .collect()
    }

    /// Pareto series over every organ.
    pub fn pareto_series(&self) -> Vec<ParetoEntry> {
        pareto_series(self.storage.organs(), self.storage.events())
    }

    /// Reliability curve of the selected organ.
    pub fn reliability_curve(&self) -> Vec<CurvePoint> {
        reliability_curve(self.selected_metrics(), &self.params)
    }

    /// MTBF/MTTR bars of the selected organ.
    pub fn mtbf_mttr_series(&self) -> Vec<MetricBar> {
        mtbf_mttr_series(self.selected_metrics())
    }

    /// Export snapshot of the selected organ.
    pub fn export_snapshot(&self) -> Result<ExportSnapshot> {
        let organ = self.selected_organ().ok_or(DashboardError::NoSelection)?;
        Ok(ExportSnapshot {
            organ: organ.clone(),
            history: self
                .selected_failure_history()
                .into_iter()
                .cloned()
                .collect(),
        })
    }

    /// Report file name for the selected organ.
    pub fn export_file_name(&self) -> String {
        export_file_name(self.selected.as_ref())
    }

    /// Blank failure form, pointed at `organ`, else the selection, else the
    /// first organ.
    pub fn new_failure_form(&self, organ: Option<&str>) -> FailureLogForm {
        let organ_name = organ
            .map(str::to_string)
            .or_else(|| self.selected.as_ref().map(|n| n.to_string()))
            .or_else(|| self.organs().first().map(|o| o.name.to_string()))
            .unwrap_or_default();
        FailureLogForm::new(organ_name)
    }

    // === Recomputation ===

    fn recompute(&mut self, name: &OrganName) -> Result<()> {
        let metrics = compute_metrics(self.storage.events_for(name), &self.params);
        debug!("Recomputed metrics for {}: {:?}", name, metrics);
        self.storage.replace_metrics(name, metrics)?;
        Ok(())
    }

    fn recompute_all(&mut self) -> Result<()> {
        let names: Vec<OrganName> = self.organs().iter().map(|o| o.name.clone()).collect();
        for name in &names {
            self.recompute(name)?;
        }
        Ok(())
    }

    fn require_organ(&self, name: &OrganName) -> Result<&Organ> {
        self.storage
            .organ(name.as_str())
            .ok_or_else(|| DashboardError::UnknownOrgan(name.to_string()))
    }
}

fn reject_infinite(field: &'static str, value: f64) -> Result<()> {
    if value.is_infinite() {
        warn!("Rejected {} = {}", field, value);
        return Err(ValidationError::InvalidNumber {
            field,
            input: value.to_string(),
        }
        .into());
    }
    Ok(())
}
