//! Dashboard controller.
//!
//! Owns the organ set, the failure log and the global parameters, and keeps
//! every organ's metrics in step with them: each accepted mutation is
//! followed by recomputation before anything else can read the state.

#![warn(missing_docs)]

pub mod dashboard;
pub mod form;
pub mod shared;
pub mod config;

pub use dashboard::{Dashboard, DashboardError, Result};
pub use form::{FailureLogForm, parse_number};
pub use shared::SharedDashboard;
pub use config::{DashboardConfig, ConfigError};
