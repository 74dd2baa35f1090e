//! Storage trait abstraction.

use gpta_core::{FailureLogEntry, Organ, OrganMetrics, OrganName, ValidationError};

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    /// Input rejected, nothing was stored
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Item not found
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Storage abstraction for organs and failure logs.
///
/// Organs and events keep insertion order. Organs are never deleted and
/// events are append-only.
pub trait Storage: Send {
    // === Organ operations ===

    /// Create an organ from a raw name.
    ///
    /// The name is trimmed; blanks and exact duplicates are rejected.
    fn create_organ(&mut self, raw_name: &str) -> Result<&Organ>;

    /// Look up an organ by exact name.
    fn organ(&self, name: &str) -> Option<&Organ>;

    /// All organs in creation order.
    fn organs(&self) -> &[Organ];

    /// Replace an organ's metrics record as a whole.
    fn replace_metrics(&mut self, name: &OrganName, metrics: OrganMetrics) -> Result<()>;

    // === Failure log operations ===

    /// Validate and append a failure event.
    fn append_event(&mut self, entry: FailureLogEntry) -> Result<()>;

    /// All events in insertion order.
    fn events(&self) -> &[FailureLogEntry];

    /// Events for one organ, in insertion order.
    fn events_for(&self, name: &OrganName) -> Vec<&FailureLogEntry> {
        self.events()
            .iter()
            .filter(|e| &e.organ_name == name)
            .collect()
    }
}
