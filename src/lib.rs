//! # verbatim-mt
//!
//! Post-editing for machine-translated text: given a source sentence, its
//! translation, a word-level alignment between them, and a set of
//! "do-not-translate" rules, rewrite the translation so protected spans
//! (numbers, user-protected phrases, literally-tagged spans) appear
//! verbatim from the source instead of in their (possibly mistranslated or
//! reformatted) translated form.
//!
//! # Overview
//!
//! The pipeline is built from small pieces working together:
//!
//! 1. **PatternIndex** - compiles per-language no-translate regex templates
//!    into a normalized, capture-grouped form
//! 2. **AlignmentMap** - decodes the raw word alignment into a
//!    source-token → target-token lookup
//! 3. **Span resolution** - maps a character-offset pattern match onto the
//!    contiguous source tokens it covers
//! 4. **Substitution** - copies the exact source words over the aligned
//!    target tokens, for pattern spans and digit runs alike
//! 5. **PostProcessor** - orchestrates a full pass and joins the rewritten
//!    target tokens into the final text
//!
//! # Example
//!
//! ```ignore
//! use std::collections::HashMap;
//! use verbatim_mt::{PatternIndex, PostProcessor, TranslationRecord};
//!
//! let mut config = HashMap::new();
//! config.insert("fr".to_string(), vec!["mon nom est (.+)".to_string()]);
//!
//! let processor = PostProcessor::new(PatternIndex::build(&config)?);
//! let record = TranslationRecord::new(
//!     "I have 20 apples",
//!     "j'ai vingt pommes",
//!     "0-0 1-0 2-1 3-2",
//! );
//!
//! let result = processor.process(record, "fr")?;
//! assert_eq!(result.final_text, "j'ai 20 pommes");
//! ```
//!
//! The engine is purely computational: no I/O, no async, no retries.
//! Configuration problems and unusable records are errors; everything that
//! degrades mid-pipeline (alignment gaps, boundary-crossing matches,
//! unmatched digit runs, absent alignments) quietly leaves the translated
//! text as-is.

pub mod alignment;
pub mod error;
pub mod literal;
pub mod mock;
pub mod patterns;
pub mod processor;
pub mod record;
pub mod span;
pub mod substitute;

#[cfg(test)]
mod integration_tests;

pub use alignment::{AlignmentMap, SourceTokenIndex, TargetTokenIndex};
pub use error::{PostEditError, PostEditResult};
pub use literal::extract_literal_phrases;
pub use mock::{MockAlignment, mock_record};
pub use patterns::PatternIndex;
pub use processor::PostProcessor;
pub use record::{ProcessedResult, TranslationRecord};
pub use span::{ResolvedSpan, resolve_span};
pub use substitute::{apply_numeric, apply_span};
