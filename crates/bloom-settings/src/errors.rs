//! Settings and persistence error types.

use thiserror::Error;

/// Errors that can occur when loading or saving settings and records.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Failed to read or write a file on disk.
    #[error("failed to access settings file: {0}")]
    Io(#[from] std::io::Error),
    /// Failed to parse or serialize JSON.
    #[error("failed to parse settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A value was invalid (e.g., unknown schema version).
    #[error("invalid settings value: {0}")]
    InvalidValue(String),
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
