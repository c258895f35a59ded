//! Character-offset to token-span resolution
//!
//! Pattern matches are reported as byte offsets into the raw source
//! sentence, while substitution works on the source token sequence. This
//! module bridges the two spaces: given a match offset and the match length
//! with spaces stripped, it walks the token sequence with a running byte
//! cursor and determines which contiguous run of tokens the match covers.
//!
//! The walk cannot assume that tokens are separated by spaces everywhere:
//! tokenizers split contractions like `"l'etat"` into `"l'"` + `"etat"`
//! with no separator between them, so the cursor advances by the token
//! length plus one only when the byte after the token really is a space.
//!
//! All offsets and lengths here are byte-denominated. The regex layer
//! reports byte offsets, tokens are substrings of the source text, and the
//! space-stripped match length is counted in bytes. Keeping the three
//! quantities in a single unit is what makes the cursor comparison sound
//! for non-ASCII text.

use crate::alignment::SourceTokenIndex;

/// A contiguous run of source tokens covering one pattern match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSpan {
    /// Index of the first covered source token
    pub start: SourceTokenIndex,
    /// Number of covered tokens, including the start token
    pub token_count: usize,
}

impl ResolvedSpan {
    /// Span covering a single token
    pub fn single(start: SourceTokenIndex) -> Self {
        Self {
            start,
            token_count: 1,
        }
    }
}

/// Resolve a byte-offset match to the contiguous source tokens it covers
///
/// Walks `source_tokens` in order while tracking a byte cursor over
/// `source_text`. The span starts at the token whose cursor position equals
/// `match_start`; from there token byte lengths accumulate until they meet
/// or exceed `match_len_no_spaces` (the matched text's length with all
/// spaces removed). The token that crosses the threshold is included, then
/// the walk stops.
///
/// Returns `None` when no token start coincides with `match_start`: a
/// match that begins inside a token cannot be mapped to whole tokens and is
/// treated as nothing-to-do, never as an error.
///
/// # Example
///
/// ```ignore
/// // "mon nom est l'etat" tokenizes as ["mon", "nom", "est", "l'", "etat"]
/// // with no separator between "l'" and "etat". A match for "l'etat"
/// // starts at byte 12 and has 6 non-space bytes:
/// let span = resolve_span(text, &tokens, 12, 6).unwrap();
/// assert_eq!(span.start, SourceTokenIndex(3));
/// assert_eq!(span.token_count, 2);
/// ```
pub fn resolve_span(
    source_text: &str,
    source_tokens: &[String],
    match_start: usize,
    match_len_no_spaces: usize,
) -> Option<ResolvedSpan> {
    let text = source_text.as_bytes();
    let mut cursor = 0usize;
    let mut span_start: Option<usize> = None;
    let mut covered = 0usize;
    let mut token_count = 0usize;

    for (index, token) in source_tokens.iter().enumerate() {
        if span_start.is_none() && cursor == match_start {
            span_start = Some(index);
        }

        if let Some(start) = span_start {
            covered += token.len();
            token_count += 1;
            if covered >= match_len_no_spaces {
                return Some(ResolvedSpan {
                    start: SourceTokenIndex(start),
                    token_count,
                });
            }
        }

        // Tokens are separated by at most a single space; contractions abut
        // their neighbor directly.
        let after = cursor + token.len();
        cursor = if text.get(after) == Some(&b' ') {
            after + 1
        } else {
            after
        };
    }

    // Either the match start never lined up with a token boundary, or the
    // token sequence ended before the match length was covered.
    None
}
