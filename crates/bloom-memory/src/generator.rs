//! Summary generator.
//!
//! Executes a regeneration decided by the policy: builds the generation
//! prompt, calls the model collaborator under its bounded timeout, and
//! assembles the replacement record. Errors from the model call propagate
//! uncaught — retry policy belongs to the caller, and this component never
//! persists anything itself.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::info;

use bloom_core::ids::SummaryId;
use bloom_core::records::{Goal, Habit, JournalEntry, PulseEntry};
use bloom_llm::{ModelClient, ModelResult};

use crate::prompt::build_generation_prompt;
use crate::types::{GeneratorConfig, SummaryRecord, SUMMARY_SCHEMA_VERSION};

/// Builds replacement summary records via the model collaborator.
#[derive(Debug)]
pub struct SummaryGenerator<M: ModelClient> {
    model: M,
    config: GeneratorConfig,
}

impl<M: ModelClient> SummaryGenerator<M> {
    /// Create a generator over a model client.
    pub fn new(model: M, config: GeneratorConfig) -> Self {
        Self { model, config }
    }

    /// Regenerate the summary and return the replacement record.
    ///
    /// `is_full` discards the prior summary text (it never enters the
    /// prompt); an incremental refresh includes it verbatim. Journal and
    /// pulse collections are newest-first. `generated_at` is stamped from
    /// the explicit `now` — no clock is read here.
    ///
    /// The caller persists the returned record; a successful regeneration
    /// always replaces the whole record.
    pub async fn generate(
        &self,
        existing: Option<&SummaryRecord>,
        is_full: bool,
        journal: &[JournalEntry],
        goals: &[Goal],
        habits: &[Habit],
        pulse: &[PulseEntry],
        now: DateTime<Utc>,
    ) -> ModelResult<SummaryRecord> {
        let prior = if is_full {
            None
        } else {
            existing.map(|record| record.text.as_str())
        };
        let prompt = build_generation_prompt(prior, journal, goals, habits, pulse, &self.config);

        let generation_number = existing.map_or(1, |r| r.generation_number + 1);
        info!(
            generation = generation_number,
            full = is_full,
            model = %self.model.model_id(),
            prompt_tokens = bloom_tokens::estimate(&prompt),
            "Regenerating summary"
        );

        let text = self
            .model
            .generate(
                &prompt,
                self.config.max_output_tokens,
                Duration::from_millis(self.config.timeout_ms),
            )
            .await?;

        let last_full_generation = if is_full {
            generation_number
        } else {
            existing.map_or(1, |r| r.last_full_generation)
        };

        Ok(SummaryRecord {
            id: SummaryId::new(),
            estimated_tokens: bloom_tokens::estimate(&text),
            text,
            generated_at: now,
            schema_version: SUMMARY_SCHEMA_VERSION,
            journal_count: journal.len(),
            goal_count: goals.len(),
            habit_count: habits.len(),
            last_journal_entry_id: journal.first().map(|entry| entry.id.clone()),
            generation_number,
            last_full_generation,
            model: self.model.model_id().to_string(),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
