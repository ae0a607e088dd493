//! Summary record persistence.
//!
//! The rolling summary lives in a single JSON file. A save always rewrites
//! the whole file — the record is single-writer, so callers serialize
//! regeneration attempts and last-write-wins is acceptable. The
//! `schemaVersion` field gates loading: an unknown version is surfaced as
//! an error so a future migration is a deliberate step, never a silent
//! regeneration over newer data.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use bloom_memory::{SummaryRecord, SUMMARY_SCHEMA_VERSION};

use crate::errors::{Result, SettingsError};
use crate::types::StorageSettings;

/// Resolve the default path to the summary file (`~/.bloom/summary.json`).
pub fn summary_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".bloom").join("summary.json")
}

/// File-backed store for the persisted summary record.
#[derive(Debug, Clone)]
pub struct SummaryStore {
    path: PathBuf,
}

impl SummaryStore {
    /// Create a store over a specific file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store over the default path.
    #[must_use]
    pub fn at_default_path() -> Self {
        Self::new(summary_path())
    }

    /// Create a store at the location the storage settings point to.
    #[must_use]
    pub fn from_settings(storage: &StorageSettings) -> Self {
        Self::new(storage.summary_path())
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted record, if one exists.
    ///
    /// A missing file is `Ok(None)`. A record with an unknown
    /// `schemaVersion` is an [`SettingsError::InvalidValue`].
    pub fn load(&self) -> Result<Option<SummaryRecord>> {
        if !self.path.exists() {
            debug!(path = ?self.path, "no summary record on disk");
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        let value: Value = serde_json::from_str(&content)?;

        let version = value.get("schemaVersion").and_then(Value::as_u64);
        if version != Some(u64::from(SUMMARY_SCHEMA_VERSION)) {
            return Err(SettingsError::InvalidValue(format!(
                "unknown summary schema version {version:?}"
            )));
        }

        let record: SummaryRecord = serde_json::from_value(value)?;
        Ok(Some(record))
    }

    /// Persist a record, replacing any previous one.
    pub fn save(&self, record: &SummaryRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(record)?;
        std::fs::write(&self.path, content)?;
        debug!(
            path = ?self.path,
            generation = record.generation_number,
            "saved summary record"
        );
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
