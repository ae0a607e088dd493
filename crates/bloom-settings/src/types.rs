//! Settings tree.
//!
//! All keys are `camelCase` on disk. Defaults here are the source of truth;
//! the loader deep-merges user values over them.

use std::path::PathBuf;

use bloom_memory::{GeneratorConfig, PolicyConfig};
use serde::{Deserialize, Serialize};

/// Root settings for the Bloom coach.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloomSettings {
    /// Settings schema version.
    pub version: String,
    /// Model collaborator settings.
    pub model: ModelSettings,
    /// Summary maintenance settings.
    pub summary: SummarySettings,
    /// Data file locations.
    pub storage: StorageSettings,
}

impl Default for BloomSettings {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            model: ModelSettings::default(),
            summary: SummarySettings::default(),
            storage: StorageSettings::default(),
        }
    }
}

/// Model collaborator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSettings {
    /// Provider name. Default: `"anthropic"`.
    pub provider: String,
    /// Model ID. Default: `"claude-sonnet-4-5"`.
    pub model: String,
    /// API key. Usually supplied via `ANTHROPIC_API_KEY` rather than the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Maximum output tokens per generation. Default: 2048.
    pub max_output_tokens: u32,
    /// Bound on a model call in milliseconds. Default: 90 000.
    pub timeout_ms: u64,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            provider: "anthropic".to_string(),
            model: "claude-sonnet-4-5".to_string(),
            api_key: None,
            max_output_tokens: 2_048,
            timeout_ms: 90_000,
        }
    }
}

/// Summary maintenance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarySettings {
    /// Journal entries required before the first summary. Default: 3.
    pub min_entries_for_summary: usize,
    /// Recent-data token threshold (exclusive). Default: 6000.
    pub recent_data_threshold: u32,
    /// Every Nth regeneration is full. Default: 4.
    pub full_regen_interval: u32,
    /// Journal entries included in the generation prompt. Default: 50.
    pub journal_window: usize,
    /// Wellness check-ins included in the generation prompt. Default: 30.
    pub pulse_window: usize,
}

impl Default for SummarySettings {
    fn default() -> Self {
        Self {
            min_entries_for_summary: 3,
            recent_data_threshold: 6_000,
            full_regen_interval: 4,
            journal_window: 50,
            pulse_window: 30,
        }
    }
}

/// Data file locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageSettings {
    /// Base directory for Bloom data files. A leading `~` expands to `$HOME`.
    pub data_dir: String,
    /// Summary record file name, relative to `dataDir`.
    pub summary_file: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: "~/.bloom".to_string(),
            summary_file: "summary.json".to_string(),
        }
    }
}

impl StorageSettings {
    /// Resolve the base data directory, expanding a leading `~`.
    #[must_use]
    pub fn resolved_data_dir(&self) -> PathBuf {
        PathBuf::from(expand_home(&self.data_dir))
    }

    /// Resolve the summary record path inside the data directory.
    #[must_use]
    pub fn summary_path(&self) -> PathBuf {
        self.resolved_data_dir().join(&self.summary_file)
    }
}

/// Expand a leading `~` to the home directory.
fn expand_home(path: &str) -> String {
    if path.starts_with('~') {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
        path.replacen('~', &home, 1)
    } else {
        path.to_string()
    }
}

impl SummarySettings {
    /// Policy configuration derived from these settings.
    #[must_use]
    pub fn policy_config(&self) -> PolicyConfig {
        PolicyConfig {
            min_entries_for_summary: self.min_entries_for_summary,
            recent_data_threshold: self.recent_data_threshold,
            full_regen_interval: self.full_regen_interval,
        }
    }
}

impl BloomSettings {
    /// Generator configuration derived from these settings.
    #[must_use]
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            max_output_tokens: self.model.max_output_tokens,
            timeout_ms: self.model.timeout_ms,
            journal_window: self.summary.journal_window,
            pulse_window: self.summary.pulse_window,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_valid() {
        let settings = BloomSettings::default();
        assert_eq!(settings.version, "0.1.0");
        assert_eq!(settings.model.provider, "anthropic");
        assert_eq!(settings.model.model, "claude-sonnet-4-5");
        assert!(settings.model.api_key.is_none());
        assert_eq!(settings.model.max_output_tokens, 2_048);
        assert_eq!(settings.model.timeout_ms, 90_000);
        assert_eq!(settings.summary.min_entries_for_summary, 3);
        assert_eq!(settings.summary.recent_data_threshold, 6_000);
        assert_eq!(settings.summary.full_regen_interval, 4);
        assert_eq!(settings.storage.data_dir, "~/.bloom");
        assert_eq!(settings.storage.summary_file, "summary.json");
    }

    #[test]
    fn serde_camel_case_keys() {
        let json = serde_json::to_string(&BloomSettings::default()).unwrap();
        assert!(json.contains("maxOutputTokens"));
        assert!(json.contains("recentDataThreshold"));
        assert!(json.contains("fullRegenInterval"));
        assert!(json.contains("dataDir"));
        assert!(!json.contains("apiKey"));
    }

    #[test]
    fn absolute_data_dir_untouched() {
        let storage = StorageSettings {
            data_dir: "/var/lib/bloom".to_string(),
            ..StorageSettings::default()
        };
        assert_eq!(
            storage.summary_path(),
            PathBuf::from("/var/lib/bloom/summary.json")
        );
    }

    #[test]
    fn tilde_data_dir_expands_to_home() {
        let storage = StorageSettings::default();
        let path = storage.resolved_data_dir();
        assert!(!path.to_string_lossy().contains('~'));
        assert!(path.ends_with(".bloom"));
    }

    #[test]
    fn policy_config_mirrors_settings() {
        let settings = SummarySettings {
            recent_data_threshold: 9_000,
            ..SummarySettings::default()
        };
        let config = settings.policy_config();
        assert_eq!(config.recent_data_threshold, 9_000);
        assert_eq!(config.min_entries_for_summary, 3);
        assert_eq!(config.full_regen_interval, 4);
    }

    #[test]
    fn generator_config_mirrors_settings() {
        let settings = BloomSettings::default();
        let config = settings.generator_config();
        assert_eq!(config.max_output_tokens, 2_048);
        assert_eq!(config.timeout_ms, 90_000);
        assert_eq!(config.journal_window, 50);
        assert_eq!(config.pulse_window, 30);
    }
}
