//! Post-processing orchestrator
//!
//! Ties the pipeline together: pattern lookup, per-call effective set,
//! span resolution, alignment-driven substitution, numeric protection, and
//! the final join. One [`PostProcessor`] serves many records across many
//! languages; it holds the compiled pattern index behind an immutable
//! shared handle, so concurrent `process` calls only ever read shared
//! state while each call owns its record exclusively.

use std::sync::Arc;

use log::debug;

use crate::alignment::AlignmentMap;
use crate::error::{PostEditError, PostEditResult};
use crate::patterns::{PatternIndex, compile_matcher};
use crate::record::{ProcessedResult, TranslationRecord};
use crate::span::resolve_span;
use crate::substitute::{apply_numeric, apply_span};

/// Rewrites machine-translated sentences so protected spans survive verbatim
pub struct PostProcessor {
    patterns: Arc<PatternIndex>,
}

impl PostProcessor {
    /// Create a processor owning its pattern index
    pub fn new(patterns: PatternIndex) -> Self {
        Self {
            patterns: Arc::new(patterns),
        }
    }

    /// Create a processor sharing an existing pattern index
    ///
    /// Useful when several processors (or other components) read the same
    /// startup configuration.
    pub fn with_shared(patterns: Arc<PatternIndex>) -> Self {
        Self { patterns }
    }

    /// The shared pattern index this processor reads from
    pub fn pattern_index(&self) -> &PatternIndex {
        &self.patterns
    }

    /// Run the full post-processing pass over one record
    ///
    /// 1. Validates the record shape (non-empty text must come with
    ///    tokens).
    /// 2. Resolves the language's pattern set and unions in the record's
    ///    literal-protected phrases as a call-local set.
    /// 3. With no alignment, returns `target_text` untouched; an
    ///    alignment-free record cannot be rewritten safely.
    /// 4. Otherwise applies every matching pattern through the span
    ///    resolver and substitution engine, then unconditionally protects
    ///    digit runs.
    /// 5. Joins the rewritten target tokens with single spaces.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let processor = PostProcessor::new(index);
    /// let record = TranslationRecord::new("I have 20 apples", "j'ai vingt pommes", "0-0 1-0 2-1 3-2");
    /// let result = processor.process(record, "fr")?;
    /// assert_eq!(result.final_text, "j'ai 20 pommes");
    /// ```
    pub fn process(
        &self,
        mut record: TranslationRecord,
        language: &str,
    ) -> PostEditResult<ProcessedResult> {
        validate_record(&record)?;

        // Call-local union; the shared index is never written to.
        let effective = self
            .patterns
            .effective_patterns(language, &record.literal_protected_phrases)?;

        if record.raw_alignment.trim().is_empty() {
            debug!("record has no alignment, returning target text unchanged");
            let final_text = record.target_text.clone();
            return Ok(ProcessedResult { record, final_text });
        }

        let alignment = AlignmentMap::parse(&record.raw_alignment);

        for pattern in &effective {
            // Stored patterns compiled at build time; only call-scoped
            // literal phrases can fail here, and those are best-effort.
            let matcher = match compile_matcher(pattern) {
                Ok(matcher) => matcher,
                Err(e) => {
                    debug!("skipping non-compiling pattern {:?}: {}", pattern, e);
                    continue;
                }
            };

            let Some(caps) = matcher.captures(&record.source_text) else {
                continue;
            };
            let Some(group) = caps.get(1) else {
                continue;
            };

            let match_start = group.start();
            let match_len_no_spaces = group.as_str().bytes().filter(|&b| b != b' ').count();

            let Some(span) = resolve_span(
                &record.source_text,
                &record.source_tokens,
                match_start,
                match_len_no_spaces,
            ) else {
                debug!(
                    "match for {:?} does not start on a token boundary, skipping",
                    pattern
                );
                continue;
            };

            apply_span(&mut record, &alignment, span);
        }

        apply_numeric(&mut record, &alignment);

        let final_text = record.target_tokens.join(" ");
        Ok(ProcessedResult { record, final_text })
    }
}

/// Reject records whose token sequences cannot carry the substitution
///
/// Blank texts with no tokens are fine (the pass degrades to a no-op); a
/// non-empty text with an empty token vector means the upstream tokenizer
/// output is missing and nothing sensible can be computed.
fn validate_record(record: &TranslationRecord) -> PostEditResult<()> {
    if !record.source_text.is_empty() && record.source_tokens.is_empty() {
        return Err(PostEditError::InvalidRecord(
            "source_text is non-empty but source_tokens is empty".to_string(),
        ));
    }
    if !record.target_text.is_empty() && record.target_tokens.is_empty() {
        return Err(PostEditError::InvalidRecord(
            "target_text is non-empty but target_tokens is empty".to_string(),
        ));
    }
    Ok(())
}
