//! Dashboard configuration.
//!
//! Read from a JSON file; every field is optional:
//!
//! ```json
//! {
//!   "params": { "target_uptime_t": 1500.0, "min_reliability_threshold": 0.9 },
//!   "seed_defaults": false,
//!   "organs": ["Compresseur"],
//!   "failure_logs": [
//!     { "organ_name": "Compresseur", "failure_date": "2024-02-01",
//!       "uptime_since_last_failure": 900.0, "repair_duration": 3.0,
//!       "description": "Clapet" }
//!   ]
//! }
//! ```

use std::path::Path;

use gpta_core::{FailureLogEntry, ReliabilityParams};
use gpta_storage::MemoryStorage;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dashboard::{Dashboard, DashboardError};

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Startup data rejected by the dashboard
    #[error("Invalid startup data: {0}")]
    Dashboard(#[from] DashboardError),
}

/// Startup configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Initial evaluation parameters
    pub params: ReliabilityParams,
    /// Start from the built-in organs and failure history
    pub seed_defaults: bool,
    /// Extra organs to create at startup
    pub organs: Vec<String>,
    /// Extra failure records to log at startup
    pub failure_logs: Vec<FailureLogEntry>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            params: ReliabilityParams::default(),
            seed_defaults: true,
            organs: Vec::new(),
            failure_logs: Vec::new(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a JSON file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = tokio::fs::read_to_string(path.as_ref()).await?;
        let config = serde_json::from_str(&json)?;
        info!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Build the dashboard, replaying startup data through the same
    /// validation as user input.
    pub fn build_dashboard(&self) -> Result<Dashboard, ConfigError> {
        let storage = if self.seed_defaults {
            MemoryStorage::seeded().map_err(DashboardError::from)?
        } else {
            MemoryStorage::new()
        };

        let mut dashboard = Dashboard::new(storage, self.params)?;
        for name in &self.organs {
            dashboard.create_organ(name)?;
        }
        for entry in &self.failure_logs {
            dashboard.append_event(entry.clone())?;
        }
        Ok(dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpta_core::ValidationError;
    use gpta_storage::StorageError;

    #[test]
    fn test_default_config() {
        let dashboard = DashboardConfig::default().build_dashboard().unwrap();
        assert_eq!(dashboard.organs().len(), 7);
        assert_eq!(dashboard.params(), &ReliabilityParams::default());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gpta.json");
        tokio::fs::write(
            &path,
            r#"{
                "params": { "target_uptime_t": 1500.0 },
                "seed_defaults": false,
                "organs": ["Compresseur"],
                "failure_logs": [
                    { "organ_name": "Compresseur", "failure_date": "2024-02-01",
                      "uptime_since_last_failure": 900.0, "repair_duration": 3.0,
                      "description": "Clapet" }
                ]
            }"#,
        )
        .await
        .unwrap();

        let config = DashboardConfig::load(&path).await.unwrap();
        assert_eq!(config.params.target_uptime_t, 1500.0);
        assert_eq!(config.params.min_reliability_threshold, 0.95);

        let dashboard = config.build_dashboard().unwrap();
        assert_eq!(dashboard.organs().len(), 1);
        assert_eq!(dashboard.organ("Compresseur").unwrap().metrics.mtbf, Some(900.0));
    }

    #[tokio::test]
    async fn test_out_of_range_params_are_coerced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gpta.json");
        tokio::fs::write(
            &path,
            r#"{ "params": { "target_uptime_t": -2000.0, "min_reliability_threshold": 5.0 } }"#,
        )
        .await
        .unwrap();

        let dashboard = DashboardConfig::load(&path).await.unwrap().build_dashboard().unwrap();
        assert_eq!(dashboard.params().target_uptime_t, 0.0);
        assert_eq!(dashboard.params().min_reliability_threshold, 1.0);

        let screw = dashboard.organ("Groupe à vis").unwrap();
        assert_eq!(screw.metrics.reliability_at_t, Some(1.0));
        assert!(!screw.reliability_alert(dashboard.params().min_reliability_threshold));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = DashboardConfig::load(dir.path().join("absent.json")).await.unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_invalid_startup_log_rejected() {
        let config: DashboardConfig = serde_json::from_str(
            r#"{ "failure_logs": [
                { "organ_name": "Moteur", "failure_date": "2024-02-01",
                  "uptime_since_last_failure": 900.0, "repair_duration": -1.0,
                  "description": "Clapet" } ] }"#,
        )
        .unwrap();
        let err = config.build_dashboard().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Dashboard(DashboardError::Storage(StorageError::Validation(
                ValidationError::NonPositive { .. }
            )))
        ));
    }

    #[test]
    fn test_bad_date_in_json() {
        let result: Result<DashboardConfig, _> = serde_json::from_str(
            r#"{ "failure_logs": [
                { "organ_name": "Moteur", "failure_date": "2024-02-30",
                  "uptime_since_last_failure": 900.0, "repair_duration": 1.0,
                  "description": "Clapet" } ] }"#,
        );
        assert!(result.is_err());
    }
}
