//! Core types for summary maintenance.
//!
//! Includes the persisted summary record, regeneration decisions with
//! structured reason codes, and configuration for the policy and the
//! generator. All serializable types use `camelCase` for wire
//! compatibility.

use bloom_core::ids::{JournalEntryId, SummaryId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current schema version written into new summary records.
///
/// Bump when fields are added so older records can be migrated on load.
pub const SUMMARY_SCHEMA_VERSION: u32 = 1;

/// The persisted rolling summary.
///
/// Only [`SummaryGenerator`](crate::SummaryGenerator) creates these, and a
/// regeneration always replaces the whole record — no partial updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRecord {
    /// Record identifier.
    pub id: SummaryId,
    /// The summary prose itself.
    pub text: String,
    /// When this record was generated.
    pub generated_at: DateTime<Utc>,
    /// Schema version for forward migration. Currently 1.
    pub schema_version: u32,
    /// Journal entry count at generation time.
    pub journal_count: usize,
    /// Goal count at generation time.
    pub goal_count: usize,
    /// Habit count at generation time.
    pub habit_count: usize,
    /// Newest journal entry absorbed into this summary, if any existed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_journal_entry_id: Option<JournalEntryId>,
    /// Monotonic regeneration counter. Starts at 1, +1 per regeneration.
    pub generation_number: u32,
    /// Generation number of the most recent full regeneration.
    pub last_full_generation: u32,
    /// Model identifier that produced the text.
    pub model: String,
    /// Token estimate of `text`.
    pub estimated_tokens: u32,
}

// ─────────────────────────────────────────────────────────────────────────────
// Regeneration decisions
// ─────────────────────────────────────────────────────────────────────────────

/// Why the policy decided what it decided.
///
/// A closed code set with numeric parameters, so tests and diagnostics
/// assert on structured values instead of matching message strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum RegenerationReason {
    /// No summary exists and enough journal data has accumulated.
    FirstSummary {
        /// Journal entries available.
        journal_count: usize,
    },
    /// No summary exists and there is not yet enough journal data.
    InsufficientData {
        /// Journal entries available.
        journal_count: usize,
        /// Minimum required before a first summary.
        required: usize,
    },
    /// Unabsorbed recent data is within the threshold.
    BelowThreshold {
        /// Estimated tokens of unabsorbed data.
        recent_tokens: u32,
        /// The configured threshold.
        threshold: u32,
    },
    /// Unabsorbed recent data exceeded the threshold.
    ThresholdExceeded {
        /// Estimated tokens of unabsorbed data.
        recent_tokens: u32,
        /// The configured threshold.
        threshold: u32,
        /// Regenerations since the last full one, counting the upcoming one.
        generations_since_full: u32,
    },
}

/// Outcome of a regeneration check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegenerationDecision {
    /// Whether the summary should be regenerated now.
    pub needed: bool,
    /// Whether the regeneration should be full (discard prior text).
    pub full: bool,
    /// Estimated tokens of unabsorbed recent data (0 when no record exists).
    pub recent_tokens: u32,
    /// Structured reason for the decision.
    pub reason: RegenerationReason,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration for the regeneration policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyConfig {
    /// Journal entries required before the first summary. Default: 3.
    pub min_entries_for_summary: usize,
    /// Recent-data token count above which a refresh is needed
    /// (exclusive boundary). Default: 6000.
    pub recent_data_threshold: u32,
    /// Every Nth regeneration is full. Default: 4.
    pub full_regen_interval: u32,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_entries_for_summary: 3,
            recent_data_threshold: 6_000,
            full_regen_interval: 4,
        }
    }
}

/// Configuration for the summary generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Maximum output tokens requested from the model. Default: 2048.
    pub max_output_tokens: u32,
    /// Bound on the model call. Default: 90 000 ms.
    pub timeout_ms: u64,
    /// Most recent journal entries included in the prompt. Default: 50.
    pub journal_window: usize,
    /// Most recent wellness check-ins included in the prompt. Default: 30.
    pub pulse_window: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_output_tokens: 2_048,
            timeout_ms: 90_000,
            journal_window: 50,
            pulse_window: 30,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
