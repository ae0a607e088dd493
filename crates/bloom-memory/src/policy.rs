//! Regeneration policy.
//!
//! Decides whether the persisted summary must be refreshed, based on how
//! much data has accumulated since it was generated:
//!
//! 1. No record yet — regenerate (fully) once enough journal entries exist.
//! 2. Estimate the unabsorbed recent data: journal and wellness entries
//!    newer than the record, plus ALL current goals and habits (state, not
//!    a delta — resynthesized in full each time).
//! 3. At or below the threshold, nothing to do (boundary is exclusive).
//! 4. Above it, refresh — fully when enough incremental generations have
//!    stacked up since the last full one, otherwise incrementally.
//!
//! Total over its inputs: missing or empty data resolves to "not needed".

use tracing::debug;

use bloom_core::records::{Goal, Habit, JournalEntry, PulseEntry};

use crate::types::{PolicyConfig, RegenerationDecision, RegenerationReason, SummaryRecord};

/// Stateless regeneration decision engine.
#[derive(Debug, Clone, Default)]
pub struct RegenerationPolicy {
    config: PolicyConfig,
}

impl RegenerationPolicy {
    /// Create a policy with the given configuration.
    #[must_use]
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    /// Decide whether the summary needs regeneration.
    ///
    /// Journal and pulse collections may be in any order; entries are
    /// compared individually against the record's generation time.
    #[must_use]
    pub fn check(
        &self,
        existing: Option<&SummaryRecord>,
        journal: &[JournalEntry],
        goals: &[Goal],
        habits: &[Habit],
        pulse: &[PulseEntry],
    ) -> RegenerationDecision {
        let Some(existing) = existing else {
            if journal.len() >= self.config.min_entries_for_summary {
                return RegenerationDecision {
                    needed: true,
                    full: true,
                    recent_tokens: 0,
                    reason: RegenerationReason::FirstSummary {
                        journal_count: journal.len(),
                    },
                };
            }
            return RegenerationDecision {
                needed: false,
                full: false,
                recent_tokens: 0,
                reason: RegenerationReason::InsufficientData {
                    journal_count: journal.len(),
                    required: self.config.min_entries_for_summary,
                },
            };
        };

        let recent_tokens = self.recent_data_tokens(existing, journal, goals, habits, pulse);

        if recent_tokens <= self.config.recent_data_threshold {
            return RegenerationDecision {
                needed: false,
                full: false,
                recent_tokens,
                reason: RegenerationReason::BelowThreshold {
                    recent_tokens,
                    threshold: self.config.recent_data_threshold,
                },
            };
        }

        // Counting the upcoming regeneration itself.
        let generations_since_full = existing
            .generation_number
            .saturating_sub(existing.last_full_generation)
            .saturating_add(1);
        let full = generations_since_full >= self.config.full_regen_interval;

        debug!(
            recent_tokens,
            generations_since_full,
            full,
            generation = existing.generation_number,
            "Summary regeneration needed"
        );

        RegenerationDecision {
            needed: true,
            full,
            recent_tokens,
            reason: RegenerationReason::ThresholdExceeded {
                recent_tokens,
                threshold: self.config.recent_data_threshold,
                generations_since_full,
            },
        }
    }

    /// Token estimate of the data the existing summary has not absorbed.
    ///
    /// Goal and habit state contributes in full every time: it describes
    /// the present, not a delta since the record.
    fn recent_data_tokens(
        &self,
        existing: &SummaryRecord,
        journal: &[JournalEntry],
        goals: &[Goal],
        habits: &[Habit],
        pulse: &[PulseEntry],
    ) -> u32 {
        let mut total: u32 = 0;

        for entry in journal.iter().filter(|e| e.created_at > existing.generated_at) {
            total = total.saturating_add(bloom_tokens::estimate(&entry.extract_text()));
        }
        for entry in pulse.iter().filter(|p| p.recorded_at > existing.generated_at) {
            total = total.saturating_add(bloom_tokens::estimate(&entry.metrics_line(None)));
        }
        for goal in goals {
            let text = format!("{} {}", goal.title, goal.description);
            total = total.saturating_add(bloom_tokens::estimate(&text));
        }
        for habit in habits {
            total = total.saturating_add(bloom_tokens::estimate(&habit.title));
        }

        total
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use bloom_core::ids::{JournalEntryId, SummaryId};
    use bloom_core::records::{JournalContent, JournalKind};
    use chrono::{DateTime, TimeZone, Utc};
    use std::collections::BTreeMap;

    fn generated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap()
    }

    fn record(generation_number: u32, last_full_generation: u32) -> SummaryRecord {
        SummaryRecord {
            id: SummaryId::from("s1"),
            text: "existing profile".to_string(),
            generated_at: generated_at(),
            schema_version: crate::types::SUMMARY_SCHEMA_VERSION,
            journal_count: 10,
            goal_count: 2,
            habit_count: 2,
            last_journal_entry_id: None,
            generation_number,
            last_full_generation,
            model: "claude-sonnet-4-5".to_string(),
            estimated_tokens: 4,
        }
    }

    fn note(chars: usize, at: DateTime<Utc>) -> JournalEntry {
        JournalEntry {
            id: JournalEntryId::from("e"),
            created_at: at,
            kind: JournalKind::QuickNote,
            content: JournalContent::Text("a".repeat(chars)),
        }
    }

    fn after() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 10, 8, 0, 0).unwrap()
    }

    fn before() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 20, 8, 0, 0).unwrap()
    }

    /// One goal whose title+description estimate to exactly `tokens`.
    fn goal_of_tokens(tokens: u32) -> Goal {
        // "abc" + " " + description = 4 * tokens chars total.
        let desc_chars = (tokens as usize) * 4 - 4;
        Goal {
            title: "abc".to_string(),
            category: "c".to_string(),
            progress: 10,
            is_active: true,
            status: "s".to_string(),
            description: "d".repeat(desc_chars),
        }
    }

    // ── No existing record ──────────────────────────────────────────

    #[test]
    fn two_entries_insufficient() {
        let policy = RegenerationPolicy::default();
        let journal = vec![note(10, after()), note(10, after())];
        let decision = policy.check(None, &journal, &[], &[], &[]);
        assert!(!decision.needed);
        assert_eq!(
            decision.reason,
            RegenerationReason::InsufficientData {
                journal_count: 2,
                required: 3
            }
        );
    }

    #[test]
    fn three_entries_first_summary_full() {
        let policy = RegenerationPolicy::default();
        let journal = vec![note(10, after()), note(10, after()), note(10, after())];
        let decision = policy.check(None, &journal, &[], &[], &[]);
        assert!(decision.needed);
        assert!(decision.full);
        assert_eq!(decision.recent_tokens, 0);
        assert_eq!(
            decision.reason,
            RegenerationReason::FirstSummary { journal_count: 3 }
        );
    }

    #[test]
    fn no_record_no_data_not_needed() {
        let policy = RegenerationPolicy::default();
        let decision = policy.check(None, &[], &[], &[], &[]);
        assert!(!decision.needed);
        assert!(!decision.full);
    }

    // ── Threshold boundary ──────────────────────────────────────────

    #[test]
    fn exactly_at_threshold_not_needed() {
        let policy = RegenerationPolicy::default();
        let existing = record(2, 1);
        let decision = policy.check(Some(&existing), &[], &[goal_of_tokens(6_000)], &[], &[]);
        assert_eq!(decision.recent_tokens, 6_000);
        assert!(!decision.needed);
        assert_eq!(
            decision.reason,
            RegenerationReason::BelowThreshold {
                recent_tokens: 6_000,
                threshold: 6_000
            }
        );
    }

    #[test]
    fn one_past_threshold_needed() {
        let policy = RegenerationPolicy::default();
        let existing = record(2, 1);
        let decision = policy.check(Some(&existing), &[], &[goal_of_tokens(6_001)], &[], &[]);
        assert_eq!(decision.recent_tokens, 6_001);
        assert!(decision.needed);
        assert!(!decision.full);
        assert_eq!(
            decision.reason,
            RegenerationReason::ThresholdExceeded {
                recent_tokens: 6_001,
                threshold: 6_000,
                generations_since_full: 2
            }
        );
    }

    // ── Recent-data accounting ──────────────────────────────────────

    #[test]
    fn journal_before_record_excluded() {
        let policy = RegenerationPolicy::default();
        let existing = record(1, 1);
        // 40k chars → 10k tokens, but all older than the record.
        let journal = vec![note(40_000, before())];
        let decision = policy.check(Some(&existing), &journal, &[], &[], &[]);
        assert_eq!(decision.recent_tokens, 0);
        assert!(!decision.needed);
    }

    #[test]
    fn journal_after_record_counted() {
        let policy = RegenerationPolicy::default();
        let existing = record(1, 1);
        let journal = vec![note(40_000, after())];
        let decision = policy.check(Some(&existing), &journal, &[], &[], &[]);
        assert_eq!(decision.recent_tokens, 10_000);
        assert!(decision.needed);
    }

    #[test]
    fn pulse_after_record_counted_as_metrics_text() {
        let policy = RegenerationPolicy::default();
        let existing = record(1, 1);
        let mut metrics = BTreeMap::new();
        let _ = metrics.insert("mood".to_string(), 4);
        let pulse = vec![
            PulseEntry {
                recorded_at: after(),
                metrics: metrics.clone(),
                note: None,
            },
            PulseEntry {
                recorded_at: before(),
                metrics,
                note: None,
            },
        ];
        let decision = policy.check(Some(&existing), &[], &[], &[], &pulse);
        // "mood: 4" is 7 chars → 2 tokens; the older entry contributes 0.
        assert_eq!(decision.recent_tokens, 2);
    }

    #[test]
    fn goals_and_habits_always_counted() {
        let policy = RegenerationPolicy::default();
        let existing = record(1, 1);
        let goals = vec![goal_of_tokens(100)];
        let habits = vec![Habit {
            title: "abcdefgh".to_string(),
            is_active: false,
            current_streak: 0,
            longest_streak: 0,
        }];
        let decision = policy.check(Some(&existing), &[], &goals, &habits, &[]);
        // Goal 100 + habit ceil(8/4) = 2.
        assert_eq!(decision.recent_tokens, 102);
    }

    // ── Full vs incremental (drift cycle) ───────────────────────────

    #[test]
    fn drift_cycle_with_interval_four() {
        let policy = RegenerationPolicy::default();
        let big_goal = [goal_of_tokens(7_000)];

        // Generations 1-3 since a full at 1: incremental.
        for generation in 1..=3 {
            let decision = policy.check(Some(&record(generation, 1)), &[], &big_goal, &[], &[]);
            assert!(decision.needed);
            assert!(!decision.full, "generation {generation} should be incremental");
        }

        // Generation 4: 4 - 1 + 1 = 4 >= interval → full.
        let decision = policy.check(Some(&record(4, 1)), &[], &big_goal, &[], &[]);
        assert!(decision.needed);
        assert!(decision.full);
        assert_eq!(
            decision.reason,
            RegenerationReason::ThresholdExceeded {
                recent_tokens: 7_000,
                threshold: 6_000,
                generations_since_full: 4
            }
        );
    }

    #[test]
    fn fresh_full_resets_cycle() {
        let policy = RegenerationPolicy::default();
        // Last full was generation 5, current generation 5: next is incremental.
        let decision = policy.check(Some(&record(5, 5)), &[], &[goal_of_tokens(7_000)], &[], &[]);
        assert!(decision.needed);
        assert!(!decision.full);
    }

    #[test]
    fn custom_interval_respected() {
        let policy = RegenerationPolicy::new(PolicyConfig {
            full_regen_interval: 2,
            ..PolicyConfig::default()
        });
        let decision = policy.check(Some(&record(2, 1)), &[], &[goal_of_tokens(7_000)], &[], &[]);
        // 2 - 1 + 1 = 2 >= 2 → full.
        assert!(decision.full);
    }
}
