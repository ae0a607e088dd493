//! Personal-data record types.
//!
//! These are the in-memory shapes the context assembler and summary
//! generator consume. The surrounding stores own loading and persistence;
//! the core never touches a database. All serializable types use
//! `camelCase` for wire compatibility.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::JournalEntryId;

// ─────────────────────────────────────────────────────────────────────────────
// Goals and habits
// ─────────────────────────────────────────────────────────────────────────────

/// A user goal with progress tracking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Short goal title.
    pub title: String,
    /// Category label (e.g., "fitness", "career").
    pub category: String,
    /// Progress percentage (0–100).
    pub progress: u8,
    /// Whether the goal is currently being pursued.
    pub is_active: bool,
    /// Status label (e.g., "on track", "stalled").
    pub status: String,
    /// Free-text description.
    pub description: String,
}

/// A tracked habit with streak counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Short habit title.
    pub title: String,
    /// Whether the habit is currently tracked.
    pub is_active: bool,
    /// Consecutive qualifying days, as of the latest check-in.
    pub current_streak: u32,
    /// Longest streak ever achieved.
    pub longest_streak: u32,
}

// ─────────────────────────────────────────────────────────────────────────────
// Journal
// ─────────────────────────────────────────────────────────────────────────────

/// Discriminator for how a journal entry was captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JournalKind {
    /// Short unstructured note.
    QuickNote,
    /// Guided question/answer flow.
    Guided,
    /// Full structured journaling session.
    Session,
}

impl JournalKind {
    /// Lowercase label used when rendering entries into context text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::QuickNote => "note",
            Self::Guided => "guided",
            Self::Session => "session",
        }
    }
}

/// One question/answer pair from a guided journal flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidedResponse {
    /// The prompt shown to the user.
    pub question: String,
    /// The user's answer.
    pub answer: String,
}

/// Body of a journal entry: free text or ordered question/answer pairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JournalContent {
    /// Free-form prose.
    Text(String),
    /// Ordered guided responses.
    Responses(Vec<GuidedResponse>),
}

/// A journal entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// Entry identifier.
    pub id: JournalEntryId,
    /// When the entry was created.
    pub created_at: DateTime<Utc>,
    /// How the entry was captured.
    pub kind: JournalKind,
    /// Entry body.
    pub content: JournalContent,
}

impl JournalEntry {
    /// Flatten the entry body to prose.
    ///
    /// Guided responses are joined as `question answer` lines so the
    /// estimator and renderers see one consistent text form.
    #[must_use]
    pub fn extract_text(&self) -> String {
        match &self.content {
            JournalContent::Text(text) => text.clone(),
            JournalContent::Responses(pairs) => pairs
                .iter()
                .map(|p| format!("{} {}", p.question, p.answer))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wellness check-ins
// ─────────────────────────────────────────────────────────────────────────────

/// A wellness check-in: named metrics on a 0–5 scale plus an optional note.
///
/// Metrics are kept in a [`BTreeMap`] so rendering order is deterministic
/// (sorted by metric name) regardless of capture order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PulseEntry {
    /// When the check-in was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Metric name → value (0–5).
    pub metrics: BTreeMap<String, u8>,
    /// Optional free-text note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl PulseEntry {
    /// Render the metrics as `name: value` pairs joined by `", "`.
    ///
    /// `limit` caps how many metrics are shown; `None` shows all.
    #[must_use]
    pub fn metrics_line(&self, limit: Option<usize>) -> String {
        let cap = limit.unwrap_or(usize::MAX);
        self.metrics
            .iter()
            .take(cap)
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversation
// ─────────────────────────────────────────────────────────────────────────────

/// One turn of coach conversation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Message text.
    pub content: String,
    /// `true` when the user sent it, `false` for the assistant.
    pub from_user: bool,
}

impl ChatMessage {
    /// Speaker prefix used when rendering conversation lines.
    #[must_use]
    pub fn speaker_label(&self) -> &'static str {
        if self.from_user { "User" } else { "Assistant" }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    // ── JournalEntry::extract_text ──────────────────────────────────

    #[test]
    fn extract_text_from_quick_note() {
        let entry = JournalEntry {
            id: JournalEntryId::from("e1"),
            created_at: ts(),
            kind: JournalKind::QuickNote,
            content: JournalContent::Text("felt good today".to_string()),
        };
        assert_eq!(entry.extract_text(), "felt good today");
    }

    #[test]
    fn extract_text_joins_guided_pairs_in_order() {
        let entry = JournalEntry {
            id: JournalEntryId::from("e2"),
            created_at: ts(),
            kind: JournalKind::Guided,
            content: JournalContent::Responses(vec![
                GuidedResponse {
                    question: "What went well?".to_string(),
                    answer: "Morning run".to_string(),
                },
                GuidedResponse {
                    question: "What was hard?".to_string(),
                    answer: "Staying focused".to_string(),
                },
            ]),
        };
        assert_eq!(
            entry.extract_text(),
            "What went well? Morning run\nWhat was hard? Staying focused"
        );
    }

    #[test]
    fn extract_text_empty_responses() {
        let entry = JournalEntry {
            id: JournalEntryId::from("e3"),
            created_at: ts(),
            kind: JournalKind::Session,
            content: JournalContent::Responses(Vec::new()),
        };
        assert_eq!(entry.extract_text(), "");
    }

    // ── PulseEntry::metrics_line ────────────────────────────────────

    #[test]
    fn metrics_line_sorted_by_name() {
        let mut metrics = BTreeMap::new();
        let _ = metrics.insert("stress".to_string(), 2);
        let _ = metrics.insert("energy".to_string(), 4);
        let _ = metrics.insert("mood".to_string(), 3);
        let pulse = PulseEntry {
            recorded_at: ts(),
            metrics,
            note: None,
        };
        assert_eq!(pulse.metrics_line(None), "energy: 4, mood: 3, stress: 2");
    }

    #[test]
    fn metrics_line_respects_limit() {
        let mut metrics = BTreeMap::new();
        let _ = metrics.insert("a".to_string(), 1);
        let _ = metrics.insert("b".to_string(), 2);
        let _ = metrics.insert("c".to_string(), 3);
        let pulse = PulseEntry {
            recorded_at: ts(),
            metrics,
            note: None,
        };
        assert_eq!(pulse.metrics_line(Some(2)), "a: 1, b: 2");
    }

    #[test]
    fn metrics_line_empty() {
        let pulse = PulseEntry {
            recorded_at: ts(),
            metrics: BTreeMap::new(),
            note: None,
        };
        assert_eq!(pulse.metrics_line(None), "");
    }

    // ── ChatMessage ─────────────────────────────────────────────────

    #[test]
    fn speaker_labels() {
        let user = ChatMessage {
            content: "hi".to_string(),
            from_user: true,
        };
        let coach = ChatMessage {
            content: "hello".to_string(),
            from_user: false,
        };
        assert_eq!(user.speaker_label(), "User");
        assert_eq!(coach.speaker_label(), "Assistant");
    }

    // ── Serde ───────────────────────────────────────────────────────

    #[test]
    fn goal_serde_camel_case() {
        let goal = Goal {
            title: "Run 5k".to_string(),
            category: "fitness".to_string(),
            progress: 40,
            is_active: true,
            status: "on track".to_string(),
            description: String::new(),
        };
        let json = serde_json::to_string(&goal).unwrap();
        assert!(json.contains("\"isActive\":true"));
    }

    #[test]
    fn journal_content_untagged_roundtrip() {
        let text: JournalContent = serde_json::from_str("\"plain note\"").unwrap();
        assert!(matches!(text, JournalContent::Text(_)));

        let guided: JournalContent =
            serde_json::from_str(r#"[{"question":"q","answer":"a"}]"#).unwrap();
        assert!(matches!(guided, JournalContent::Responses(ref r) if r.len() == 1));
    }

    #[test]
    fn habit_serde_roundtrip() {
        let habit = Habit {
            title: "Meditate".to_string(),
            is_active: true,
            current_streak: 12,
            longest_streak: 30,
        };
        let json = serde_json::to_string(&habit).unwrap();
        assert!(json.contains("currentStreak"));
        let back: Habit = serde_json::from_str(&json).unwrap();
        assert_eq!(back.current_streak, 12);
    }

    #[test]
    fn pulse_note_skipped_when_none() {
        let pulse = PulseEntry {
            recorded_at: ts(),
            metrics: BTreeMap::new(),
            note: None,
        };
        let json = serde_json::to_string(&pulse).unwrap();
        assert!(!json.contains("note"));
    }
}
