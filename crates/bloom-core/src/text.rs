//! Text utilities shared by the context assembler and summary generator.

/// Truncate `text` to at most `max_chars` characters, appending `suffix`
/// when anything was cut.
///
/// Counts Unicode scalar values, not bytes, so the cut never lands inside
/// a multi-byte code point. The suffix is appended after the cap: a
/// 500-char input with a 300-char cap yields the first 300 chars plus the
/// suffix.
#[must_use]
pub fn truncate_with_suffix(text: &str, max_chars: usize, suffix: &str) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str(suffix);
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
