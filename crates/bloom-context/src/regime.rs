//! Size regimes for context assembly.
//!
//! A regime bundles a token budget with per-section item caps and
//! per-entry preview caps. Two regimes exist: `Comprehensive` for the main
//! coaching prompt and `Constrained` for small auxiliary calls.

use serde::{Deserialize, Serialize};

/// Named context size regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContextRegime {
    /// Full coaching context (150k token budget).
    Comprehensive,
    /// Tightly bounded context (1k token budget).
    Constrained,
}

impl ContextRegime {
    /// The limit bundle for this regime.
    #[must_use]
    pub fn limits(self) -> RegimeLimits {
        match self {
            Self::Comprehensive => RegimeLimits {
                max_tokens: 150_000,
                goals_cap: 10,
                habits_cap: 10,
                journal_cap: 5,
                journal_preview_chars: 300,
                pulse_cap: 7,
                pulse_metrics_cap: None,
                conversation_cap: 10,
                conversation_preview_chars: 200,
            },
            Self::Constrained => RegimeLimits {
                max_tokens: 1_000,
                goals_cap: 2,
                habits_cap: 2,
                journal_cap: 1,
                journal_preview_chars: 100,
                pulse_cap: 1,
                pulse_metrics_cap: Some(3),
                conversation_cap: 2,
                conversation_preview_chars: 60,
            },
        }
    }
}

/// Limit bundle controlling assembly for one regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegimeLimits {
    /// Token budget the assembled payload must stay strictly below.
    pub max_tokens: u32,
    /// Maximum goals included.
    pub goals_cap: usize,
    /// Maximum habits included.
    pub habits_cap: usize,
    /// Maximum journal entries included.
    pub journal_cap: usize,
    /// Preview cap (chars) for a single journal entry's text.
    pub journal_preview_chars: usize,
    /// Maximum wellness check-ins included.
    pub pulse_cap: usize,
    /// Metrics shown per check-in (`None` = all).
    pub pulse_metrics_cap: Option<usize>,
    /// Maximum conversation messages included.
    pub conversation_cap: usize,
    /// Preview cap (chars) for a single conversation message.
    pub conversation_preview_chars: usize,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comprehensive_limits() {
        let limits = ContextRegime::Comprehensive.limits();
        assert_eq!(limits.max_tokens, 150_000);
        assert_eq!(limits.goals_cap, 10);
        assert_eq!(limits.habits_cap, 10);
        assert_eq!(limits.journal_cap, 5);
        assert_eq!(limits.journal_preview_chars, 300);
        assert_eq!(limits.pulse_cap, 7);
        assert_eq!(limits.pulse_metrics_cap, None);
        assert_eq!(limits.conversation_cap, 10);
        assert_eq!(limits.conversation_preview_chars, 200);
    }

    #[test]
    fn constrained_limits() {
        let limits = ContextRegime::Constrained.limits();
        assert_eq!(limits.max_tokens, 1_000);
        assert_eq!(limits.goals_cap, 2);
        assert_eq!(limits.habits_cap, 2);
        assert_eq!(limits.journal_cap, 1);
        assert_eq!(limits.journal_preview_chars, 100);
        assert_eq!(limits.pulse_cap, 1);
        assert_eq!(limits.pulse_metrics_cap, Some(3));
        assert_eq!(limits.conversation_cap, 2);
        assert_eq!(limits.conversation_preview_chars, 60);
    }

    #[test]
    fn regime_serde_camel_case() {
        let json = serde_json::to_string(&ContextRegime::Comprehensive).unwrap();
        assert_eq!(json, "\"comprehensive\"");
    }
}
