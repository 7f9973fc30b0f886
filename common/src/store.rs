//! Report persistence over a key-value storage backend
//!
//! The store keeps a single JSON array under [`REPORTS_KEY`], newest
//! first. All storage failures are swallowed: the UI cannot react
//! meaningfully to a corrupt or unavailable browser store, so errors
//! are logged and the store degrades to an empty collection.

use thiserror::Error;

use crate::report::Report;

/// Storage key for the persisted report collection.
pub const REPORTS_KEY: &str = "communityfix_reports";

/// Backend-reported failure (storage disabled, quota exceeded, ...).
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct StorageError(pub String);

/// Minimal key-value surface the store needs. The web crate implements
/// this over `window.localStorage`; tests use an in-memory map.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Browser-scoped list of submitted reports, newest first.
pub struct ReportStore<B> {
    backend: B,
}

impl<B: StorageBackend> ReportStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Reads the persisted collection.
    ///
    /// A missing key, an unreadable backend, and corrupt JSON all
    /// collapse to an empty list. Logged, never raised.
    pub fn list_reports(&self) -> Vec<Report> {
        let raw = match self.backend.get(REPORTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                log::error!("failed to read reports from storage: {err}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(reports) => reports,
            Err(err) => {
                log::error!("stored reports are not valid JSON: {err}");
                Vec::new()
            }
        }
    }

    /// Prepends `report` and writes the whole collection back.
    ///
    /// There is no partial-update path. Write failures are logged and
    /// swallowed, so callers must not assume persistence succeeded.
    pub fn save_report(&self, report: Report) {
        let mut reports = self.list_reports();
        reports.insert(0, report);

        let encoded = match serde_json::to_string(&reports) {
            Ok(encoded) => encoded,
            Err(err) => {
                log::error!("failed to encode reports: {err}");
                return;
            }
        };

        if let Err(err) = self.backend.set(REPORTS_KEY, &encoded) {
            log::error!("failed to save report to storage: {err}");
        }
    }
}
