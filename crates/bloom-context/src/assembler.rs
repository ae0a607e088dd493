//! Context assembly fold.
//!
//! Sections are considered in fixed priority order: goals, habits, journal,
//! wellness, conversation. Each candidate renders to an optional block plus
//! an item count; a block is appended only when the running token total plus
//! its cost stays strictly below the regime's budget, otherwise the whole
//! section is dropped. No partial truncation happens after rendering.
//!
//! Assembly never fails and never reads a clock: `now` is an explicit input
//! so date labels are reproducible.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Utc};
use tracing::debug;

use bloom_core::records::{ChatMessage, Goal, Habit, JournalEntry, PulseEntry};
use bloom_core::text::truncate_with_suffix;

use crate::regime::{ContextRegime, RegimeLimits};
use crate::types::ContextBuildResult;

/// Marker appended to entry previews cut at the regime's cap.
const PREVIEW_SUFFIX: &str = "...";

/// Assembles a token-budgeted context payload from loaded records.
#[derive(Debug, Clone)]
pub struct ContextAssembler {
    limits: RegimeLimits,
}

impl ContextAssembler {
    /// Create an assembler for the given regime.
    #[must_use]
    pub fn new(regime: ContextRegime) -> Self {
        Self {
            limits: regime.limits(),
        }
    }

    /// Create an assembler with explicit limits (tests and tuning).
    #[must_use]
    pub fn with_limits(limits: RegimeLimits) -> Self {
        Self { limits }
    }

    /// Assemble a context payload.
    ///
    /// Journal and pulse collections are expected newest-first (they are
    /// consumed from the front). Conversation history is also newest-first;
    /// the selected trailing window is rendered oldest-first.
    #[must_use]
    pub fn assemble(
        &self,
        goals: &[Goal],
        habits: &[Habit],
        journal: &[JournalEntry],
        pulse: &[PulseEntry],
        conversation: &[ChatMessage],
        now: DateTime<Utc>,
    ) -> ContextBuildResult {
        let candidates = [
            ("goals", self.render_goals(goals)),
            ("habits", self.render_habits(habits)),
            ("journal", self.render_journal(journal, now)),
            ("wellness", self.render_pulse(pulse, now)),
            ("conversation", self.render_conversation(conversation)),
        ];

        let mut blocks: Vec<String> = Vec::new();
        let mut item_counts: BTreeMap<String, usize> = BTreeMap::new();
        let mut total: u32 = 0;

        for (name, candidate) in candidates {
            let Some((block, count)) = candidate else {
                continue;
            };
            let cost = bloom_tokens::estimate(&block);
            if total.saturating_add(cost) < self.limits.max_tokens {
                total += cost;
                blocks.push(block);
                let _ = item_counts.insert(name.to_string(), count);
            } else {
                debug!(
                    section = name,
                    cost,
                    running = total,
                    budget = self.limits.max_tokens,
                    "Section omitted: would reach token budget"
                );
            }
        }

        ContextBuildResult {
            text: blocks.join("\n\n"),
            estimated_tokens: total,
            item_counts,
        }
    }

    // ── Section renderers ───────────────────────────────────────────

    fn render_goals(&self, goals: &[Goal]) -> Option<(String, usize)> {
        let selected: Vec<&Goal> = goals
            .iter()
            .filter(|g| g.is_active)
            .take(self.limits.goals_cap)
            .collect();
        if selected.is_empty() {
            return None;
        }

        let mut lines = vec!["## Goals".to_string()];
        for goal in &selected {
            let mut line = format!(
                "- {} ({}%) [{}, {}]",
                goal.title, goal.progress, goal.category, goal.status
            );
            if !goal.description.is_empty() {
                line.push_str(": ");
                line.push_str(&goal.description);
            }
            lines.push(line);
        }
        Some((lines.join("\n"), selected.len()))
    }

    fn render_habits(&self, habits: &[Habit]) -> Option<(String, usize)> {
        let mut selected: Vec<&Habit> = habits.iter().filter(|h| h.is_active).collect();
        selected.sort_by(|a, b| b.current_streak.cmp(&a.current_streak));
        selected.truncate(self.limits.habits_cap);
        if selected.is_empty() {
            return None;
        }

        let mut lines = vec!["## Habits".to_string()];
        for habit in &selected {
            lines.push(format!(
                "- {}: {}-day streak (best {})",
                habit.title, habit.current_streak, habit.longest_streak
            ));
        }
        Some((lines.join("\n"), selected.len()))
    }

    fn render_journal(
        &self,
        journal: &[JournalEntry],
        now: DateTime<Utc>,
    ) -> Option<(String, usize)> {
        let selected = &journal[..journal.len().min(self.limits.journal_cap)];
        if selected.is_empty() {
            return None;
        }

        let mut lines = vec!["## Recent Journal Entries".to_string()];
        for entry in selected {
            let flat = entry.extract_text().replace('\n', " ");
            let preview =
                truncate_with_suffix(&flat, self.limits.journal_preview_chars, PREVIEW_SUFFIX);
            lines.push(format!(
                "- {} ({}): {}",
                date_label(entry.created_at, now),
                entry.kind.label(),
                preview
            ));
        }
        Some((lines.join("\n"), selected.len()))
    }

    fn render_pulse(&self, pulse: &[PulseEntry], now: DateTime<Utc>) -> Option<(String, usize)> {
        let selected = &pulse[..pulse.len().min(self.limits.pulse_cap)];
        if selected.is_empty() {
            return None;
        }

        let mut lines = vec!["## Wellness Check-ins".to_string()];
        for entry in selected {
            lines.push(format!(
                "- {}: {}",
                date_label(entry.recorded_at, now),
                entry.metrics_line(self.limits.pulse_metrics_cap)
            ));
        }
        Some((lines.join("\n"), selected.len()))
    }

    fn render_conversation(&self, conversation: &[ChatMessage]) -> Option<(String, usize)> {
        let window = &conversation[..conversation.len().min(self.limits.conversation_cap)];
        if window.is_empty() {
            return None;
        }

        let mut lines = vec!["## Recent Conversation".to_string()];
        // Input is newest-first; the window reads oldest-first.
        for message in window.iter().rev() {
            let preview = truncate_with_suffix(
                &message.content.replace('\n', " "),
                self.limits.conversation_preview_chars,
                PREVIEW_SUFFIX,
            );
            lines.push(format!("{}: {}", message.speaker_label(), preview));
        }
        Some((lines.join("\n"), window.len()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Date labels
// ─────────────────────────────────────────────────────────────────────────────

/// Relative date label for an entry timestamp.
///
/// Same calendar day → "Today"; one day back → "Yesterday"; two to six days
/// → "N days ago"; older → "M/D". Future timestamps label as "Today".
#[must_use]
pub fn date_label(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now.date_naive() - timestamp.date_naive()).num_days();
    match days {
        i64::MIN..=0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{days} days ago"),
        _ => format!("{}/{}", timestamp.month(), timestamp.day()),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
