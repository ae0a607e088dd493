//! # bloom-settings
//!
//! Configuration and persistence collaborator for the Bloom coach.
//!
//! Settings are loaded from three layers (in priority order):
//! 1. **Compiled defaults** — [`BloomSettings::default()`]
//! 2. **User file** — `~/.bloom/settings.json` (deep-merged over defaults)
//! 3. **Environment variables** — `BLOOM_*` overrides (highest priority)
//!
//! The crate also owns [`SummaryStore`], the file-backed home of the
//! persisted rolling-summary record. Callers construct and inject these
//! explicitly — there is no global settings instance.

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod store;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{
    deep_merge, load_settings, load_settings_from_path, save_settings, save_settings_to_path,
    settings_path,
};
pub use store::{summary_path, SummaryStore};
pub use types::{BloomSettings, ModelSettings, StorageSettings, SummarySettings};
