//! Alignment-driven token substitution
//!
//! The common primitive shared by pattern protection and numeric
//! protection: given a resolved source-token span, copy the exact source
//! words over the target tokens aligned with them. Substitution rewrites
//! tokens in place and never changes the target token count, so token
//! order and sentence shape survive.
//!
//! Degraded conditions (a span running past the token sequence, an
//! alignment gap, a digit run with no exactly-matching token) are silent
//! no-ops: a partially fixed translation beats a failed one.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::alignment::{AlignmentMap, SourceTokenIndex};
use crate::record::TranslationRecord;
use crate::span::ResolvedSpan;

/// Maximal digit runs in the source sentence
static DIGIT_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\d+").expect("digit run regex"));

/// Copy source words over the aligned target tokens of a resolved span
///
/// For each source index in the span, ascending, every target token the
/// alignment maps it to is overwritten with the literal source token text.
/// Source indices with no aligned target are skipped; target indices
/// outside the target token sequence are ignored.
pub fn apply_span(record: &mut TranslationRecord, alignment: &AlignmentMap, span: ResolvedSpan) {
    for offset in 0..span.token_count {
        let source_index = SourceTokenIndex(span.start.0 + offset);

        let Some(source_word) = record.source_tokens.get(source_index.0).cloned() else {
            debug!("span runs past the source token sequence at {:?}", source_index);
            break;
        };

        let targets = alignment.targets_for(source_index);
        if targets.is_empty() {
            debug!(
                "no aligned target for source token {:?} ({:?}), skipping",
                source_index, source_word
            );
            continue;
        }

        for &target_index in targets {
            if let Some(slot) = record.target_tokens.get_mut(target_index.0) {
                *slot = source_word.clone();
            } else {
                debug!(
                    "alignment points outside the target sequence: {:?}",
                    target_index
                );
            }
        }
    }
}

/// Force every digit run of the source to appear verbatim in the target
///
/// Each maximal digit run in `source_text` is looked up as a whole token:
/// the FIRST source token exactly equal to the run (string equality, not
/// substring) is substituted through the alignment like any other span.
/// Runs with no exactly-matching token are skipped; digits embedded in a
/// larger token (e.g. `"20th"`) are intentionally left to the translator.
pub fn apply_numeric(record: &mut TranslationRecord, alignment: &AlignmentMap) {
    let digit_runs: Vec<String> = DIGIT_RUN_RE
        .find_iter(&record.source_text)
        .map(|m| m.as_str().to_string())
        .collect();

    for run in digit_runs {
        let Some(position) = record.source_tokens.iter().position(|token| *token == run) else {
            debug!("digit run {:?} has no exactly-matching source token, skipping", run);
            continue;
        };
        apply_span(
            record,
            alignment,
            ResolvedSpan::single(SourceTokenIndex(position)),
        );
    }
}
