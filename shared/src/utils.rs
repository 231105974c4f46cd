//! # Shared Utility Functions
//!
//! Text helpers used when handling chat input.
//!
//! ```rust
//! use shared::utils::{normalize_question, preview};
//!
//! assert_eq!(normalize_question("  hi  ").as_deref(), Some("hi"));
//! assert_eq!(normalize_question(" \t\n"), None);
//! assert_eq!(preview("abcdef", 3), "abc...");
//! ```

/// Trim a raw question. Returns `None` when nothing is left.
pub fn normalize_question(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Shorten `text` to at most `max_chars` characters for log output.
///
/// Counts chars, not bytes, so Cyrillic input is never split mid-codepoint.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}
