//! Generation prompt construction.
//!
//! The prompt is structured as: instructional preamble, optional prior
//! summary (incremental refreshes only — a full regeneration never sees
//! it), then bounded full-text excerpts of the current data. Excerpts are
//! rendered with dates and untruncated text: this prompt is not subject to
//! the small-regime context budget.

use bloom_core::records::{Goal, Habit, JournalEntry, PulseEntry};
use chrono::{DateTime, Utc};

use crate::types::GeneratorConfig;

/// Instructional preamble describing the profile the model should write.
pub const SUMMARY_PREAMBLE: &str = "\
You are maintaining the long-term memory profile of a personal wellness \
coaching user. Write an updated profile from the data below.

Cover:
- Identity: who this person is and what matters to them
- Goal patterns: what they pursue and how their progress tends to go
- Habit insights: which routines stick and which slip
- Emotional trends: recurring moods and what shifts them
- Reflection themes: topics that keep returning in their journaling
- Coaching guidance: what kind of support lands well with them

Write in natural prose with short paragraphs. Be specific: name actual \
goals, habits, and moments from the entries.

Target length: 500-800 tokens.";

/// Section delimiter style used between prompt parts.
fn section(title: &str) -> String {
    format!("===== {title} =====")
}

fn date(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

/// Build the full generation prompt.
///
/// `prior_summary` must be `None` for a full regeneration; when present it
/// is included verbatim. Journal and pulse collections are newest-first
/// and bounded by the configured windows; goals and habits are included in
/// full since they describe current state.
#[must_use]
pub fn build_generation_prompt(
    prior_summary: Option<&str>,
    journal: &[JournalEntry],
    goals: &[Goal],
    habits: &[Habit],
    pulse: &[PulseEntry],
    config: &GeneratorConfig,
) -> String {
    let mut parts: Vec<String> = vec![SUMMARY_PREAMBLE.to_string()];

    if let Some(prior) = prior_summary {
        parts.push(format!(
            "{}\n{prior}\n\nExtend and revise this profile with the data below; keep what still holds.",
            section("CURRENT PROFILE")
        ));
    }

    if !goals.is_empty() {
        let mut lines = vec![section("GOALS")];
        for goal in goals {
            let mut line = format!(
                "- {} ({}%, {}, {})",
                goal.title, goal.progress, goal.category, goal.status
            );
            if !goal.is_active {
                line.push_str(" (inactive)");
            }
            if !goal.description.is_empty() {
                line.push_str(": ");
                line.push_str(&goal.description);
            }
            lines.push(line);
        }
        parts.push(lines.join("\n"));
    }

    if !habits.is_empty() {
        let mut lines = vec![section("HABITS")];
        for habit in habits {
            let mut line = format!(
                "- {}: {}-day streak (best {})",
                habit.title, habit.current_streak, habit.longest_streak
            );
            if !habit.is_active {
                line.push_str(" (inactive)");
            }
            lines.push(line);
        }
        parts.push(lines.join("\n"));
    }

    let journal_window = &journal[..journal.len().min(config.journal_window)];
    if !journal_window.is_empty() {
        let mut lines = vec![section("JOURNAL ENTRIES")];
        for entry in journal_window {
            lines.push(format!(
                "- {} ({}): {}",
                date(entry.created_at),
                entry.kind.label(),
                entry.extract_text()
            ));
        }
        parts.push(lines.join("\n"));
    }

    let pulse_window = &pulse[..pulse.len().min(config.pulse_window)];
    if !pulse_window.is_empty() {
        let mut lines = vec![section("WELLNESS CHECK-INS")];
        for entry in pulse_window {
            let mut line = format!(
                "- {}: {}",
                date(entry.recorded_at),
                entry.metrics_line(None)
            );
            if let Some(note) = &entry.note {
                line.push_str(" (");
                line.push_str(note);
                line.push(')');
            }
            lines.push(line);
        }
        parts.push(lines.join("\n"));
    }

    parts.join("\n\n")
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
