//! Assembly result type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Result of one context assembly call.
///
/// Created fresh per call; never mutated afterwards. `estimated_tokens` is
/// the accumulated cost of the included section blocks and is always
/// strictly below the regime's budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextBuildResult {
    /// The assembled context payload.
    pub text: String,
    /// Estimated token cost of `text`.
    pub estimated_tokens: u32,
    /// Section name → number of items included. Omitted sections have no key.
    pub item_counts: BTreeMap<String, usize>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
