//! In-memory storage implementation.
//!
//! Holds the organ set and the failure log for the lifetime of a session.
//! Nothing is written to disk.

use gpta_core::{FailureLogEntry, Organ, OrganMetrics, OrganName, ValidationError};
use tracing::debug;

use super::{Result, Storage, StorageError};
use crate::seed;

/// Session-scoped storage backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    organs: Vec<Organ>,
    events: Vec<FailureLogEntry>,
}

impl MemoryStorage {
    /// Create empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage holding the default organs and failure history.
    pub fn seeded() -> Result<Self> {
        let mut storage = Self::new();
        for name in seed::DEFAULT_ORGANS {
            storage.create_organ(name)?;
        }
        for entry in seed::default_failure_logs()? {
            storage.append_event(entry)?;
        }
        Ok(storage)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.organs.iter().position(|o| o.name == *name)
    }
}

impl Storage for MemoryStorage {
    fn create_organ(&mut self, raw_name: &str) -> Result<&Organ> {
        let name = OrganName::parse(raw_name)?;
        if self.position(name.as_str()).is_some() {
            return Err(ValidationError::DuplicateOrgan(name.to_string()).into());
        }

        debug!("Creating organ: {}", name);
        self.organs.push(Organ::new(name));
        let idx = self.organs.len() - 1;
        Ok(&self.organs[idx])
    }

    fn organ(&self, name: &str) -> Option<&Organ> {
        self.organs.iter().find(|o| o.name == *name)
    }

    fn organs(&self) -> &[Organ] {
        &self.organs
    }

    fn replace_metrics(&mut self, name: &OrganName, metrics: OrganMetrics) -> Result<()> {
        let idx = self
            .position(name.as_str())
            .ok_or_else(|| StorageError::NotFound(name.to_string()))?;
        self.organs[idx].metrics = metrics;
        Ok(())
    }

    fn append_event(&mut self, entry: FailureLogEntry) -> Result<()> {
        entry.validate()?;
        debug!(
            "Appending failure for {} on {}",
            entry.organ_name, entry.failure_date
        );
        self.events.push(entry);
        Ok(())
    }

    fn events(&self) -> &[FailureLogEntry] {
        &self.events
    }
}
