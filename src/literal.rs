//! Literal-protected phrase extraction
//!
//! Callers can mark spans of the source text that must survive translation
//! verbatim with `<literal>…</literal>` tags. This module strips the tags
//! (keeping the inner text in place, so the cleaned sentence is what gets
//! translated) and returns the inner texts as regex-escaped pattern
//! fragments, ready to ride along on a record as
//! `literal_protected_phrases`.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

static LITERAL_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<literal>(.*?)</literal>").expect("literal tag regex"));

/// Strip `<literal>` markers from a source sentence
///
/// Returns the cleaned text plus the set of protected phrases, each escaped
/// so it matches itself literally when used as a no-translate pattern.
/// Tags are matched case-insensitively; empty or whitespace-only spans are
/// dropped.
///
/// # Example
///
/// ```ignore
/// let (clean, phrases) = extract_literal_phrases("send it to <literal>Acme Corp</literal> today");
/// assert_eq!(clean, "send it to Acme Corp today");
/// assert!(phrases.contains("Acme\\ Corp"));
/// ```
pub fn extract_literal_phrases(text: &str) -> (String, BTreeSet<String>) {
    let mut phrases = BTreeSet::new();
    let mut clean = String::with_capacity(text.len());
    let mut pos = 0usize;

    for caps in LITERAL_TAG_RE.captures_iter(text) {
        let whole = caps.get(0).expect("group 0 always present");
        let inner = caps.get(1).map(|m| m.as_str()).unwrap_or("");

        clean.push_str(&text[pos..whole.start()]);
        clean.push_str(inner);
        pos = whole.end();

        if !inner.trim().is_empty() {
            phrases.insert(regex::escape(inner));
        }
    }
    clean.push_str(&text[pos..]);

    (clean, phrases)
}
