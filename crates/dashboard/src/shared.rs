//! Dashboard handle shareable across tasks.

use std::sync::Arc;

use gpta_core::{FailureLogEntry, Organ};
use gpta_storage::{MemoryStorage, Storage};
use tokio::sync::{Mutex, MutexGuard};

use crate::dashboard::{Dashboard, Result};
use crate::form::FailureLogForm;

/// A [`Dashboard`] behind one mutex.
///
/// Recomputation reads both the organ set and the failure log, so every
/// mutation runs together with its recomputation under a single lock.
pub struct SharedDashboard<S: Storage = MemoryStorage> {
    inner: Arc<Mutex<Dashboard<S>>>,
}

impl<S: Storage> Clone for SharedDashboard<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Storage> SharedDashboard<S> {
    /// Wrap a dashboard.
    pub fn new(dashboard: Dashboard<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(dashboard)),
        }
    }

    /// Lock for a batch of reads.
    pub async fn lock(&self) -> MutexGuard<'_, Dashboard<S>> {
        self.inner.lock().await
    }

    /// See [`Dashboard::create_organ`].
    pub async fn create_organ(&self, raw_name: &str) -> Result<Organ> {
        self.inner.lock().await.create_organ(raw_name).cloned()
    }

    /// See [`Dashboard::append_event`].
    pub async fn append_event(&self, entry: FailureLogEntry) -> Result<()> {
        self.inner.lock().await.append_event(entry)
    }

    /// See [`Dashboard::submit_failure_form`].
    pub async fn submit_failure_form(&self, form: &FailureLogForm) -> Result<()> {
        self.inner.lock().await.submit_failure_form(form)
    }

    /// See [`Dashboard::set_target_uptime_t`].
    pub async fn set_target_uptime_t(&self, value: f64) -> Result<()> {
        self.inner.lock().await.set_target_uptime_t(value)
    }

    /// See [`Dashboard::set_min_reliability_threshold`].
    pub async fn set_min_reliability_threshold(&self, value: f64) -> Result<()> {
        self.inner.lock().await.set_min_reliability_threshold(value)
    }

    /// See [`Dashboard::select_organ`].
    pub async fn select_organ(&self, raw_name: &str) -> Result<Organ> {
        self.inner.lock().await.select_organ(raw_name).cloned()
    }

    /// Snapshot of every organ.
    pub async fn organs(&self) -> Vec<Organ> {
        self.inner.lock().await.organs().to_vec()
    }
}
