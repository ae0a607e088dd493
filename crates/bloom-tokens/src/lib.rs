//! # bloom-tokens
//!
//! Character-based token estimation.
//!
//! Bloom never runs a real tokenizer: every budget decision uses the same
//! `ceil(chars / 4)` approximation so context assembly and regeneration
//! checks are cheap, deterministic, and reproducible in tests. The
//! characters-per-token ratio is a named constant, not embedded magic.

#![deny(unsafe_code)]

/// Approximate characters per token (consistent with Anthropic's tokenizer).
pub const CHARS_PER_TOKEN: u32 = 4;

/// Estimate the token count of `text` as `ceil(chars / 4)`.
///
/// Counts Unicode scalar values. Pure and total: empty text estimates to 0.
#[must_use]
pub fn estimate(text: &str) -> u32 {
    let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
    chars.div_ceil(CHARS_PER_TOKEN)
}

/// Sum the token estimates of several texts.
#[must_use]
pub fn estimate_all<'a>(texts: impl IntoIterator<Item = &'a str>) -> u32 {
    texts.into_iter().map(estimate).sum()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
