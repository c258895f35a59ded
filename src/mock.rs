//! Deterministic record factory for tests and demos
//!
//! Builds [`TranslationRecord`]s with fabricated alignments so the
//! substitution pipeline can be exercised without a real translation
//! provider or word aligner. Each mode simulates one alignment scenario:
//! monotone order, target-side reordering, alignment gaps, a caller-chosen
//! raw string, or no alignment at all.

use crate::record::TranslationRecord;

/// Alignment shapes the factory can fabricate
#[derive(Debug, Clone)]
pub enum MockAlignment {
    /// Token `i` aligns with token `i`
    Monotone,
    /// Token `i` aligns with token `n-1-i` (simulates word-order changes)
    Reversed,
    /// Monotone, except the listed source token indices stay unaligned
    Gapped(Vec<usize>),
    /// Raw alignment string used verbatim
    Custom(String),
    /// No alignment at all (blank raw string)
    None,
}

/// Build a space-tokenized record with a fabricated alignment
///
/// Pairs are generated over the shorter of the two token sequences, so the
/// fabricated alignment never points outside either side.
///
/// # Example
///
/// ```ignore
/// let record = mock_record("I have 20 apples", "j'ai vingt pommes", MockAlignment::Monotone);
/// assert_eq!(record.raw_alignment, "0-0 1-1 2-2");
/// ```
pub fn mock_record(
    source_text: &str,
    target_text: &str,
    alignment: MockAlignment,
) -> TranslationRecord {
    let source_count = count_tokens(source_text);
    let target_count = count_tokens(target_text);
    let paired = source_count.min(target_count);

    let raw = match alignment {
        MockAlignment::Monotone => (0..paired)
            .map(|i| format!("{i}-{i}"))
            .collect::<Vec<_>>()
            .join(" "),
        MockAlignment::Reversed => (0..paired)
            .map(|i| format!("{}-{}", i, paired - 1 - i))
            .collect::<Vec<_>>()
            .join(" "),
        MockAlignment::Gapped(gaps) => (0..paired)
            .filter(|i| !gaps.contains(i))
            .map(|i| format!("{i}-{i}"))
            .collect::<Vec<_>>()
            .join(" "),
        MockAlignment::Custom(raw) => raw,
        MockAlignment::None => String::new(),
    };

    TranslationRecord::new(source_text, target_text, &raw)
}

fn count_tokens(text: &str) -> usize {
    if text.is_empty() {
        0
    } else {
        text.split(' ').count()
    }
}
