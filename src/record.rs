//! Translation record data model
//!
//! A [`TranslationRecord`] carries one source sentence, its machine
//! translation, both token sequences, the raw word alignment, and any
//! literal-protected phrases extracted upstream. Records are built once per
//! translation, consumed (and mutated) by a single post-processing call,
//! and not reused.
//!
//! Invariant: joining `source_tokens` with single spaces reproduces
//! `source_text` *except* where the tokenizer split adjacent tokens without
//! a separator (contractions); the span resolver handles that case by
//! inspecting the raw text rather than assuming a space after every token.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One sentence pair flowing through the post-processing pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRecord {
    /// Original source sentence
    pub source_text: String,
    /// Machine-translated sentence
    pub target_text: String,
    /// Source sentence tokens, as produced by the upstream tokenizer
    #[serde(default)]
    pub source_tokens: Vec<String>,
    /// Target sentence tokens; rewritten in place by substitution
    #[serde(default)]
    pub target_tokens: Vec<String>,
    /// Raw word alignment (`"0-0 1-2 ..."`); blank when the provider
    /// returned none
    #[serde(default)]
    pub raw_alignment: String,
    /// Ad-hoc no-translate regex fragments extracted upstream from
    /// `<literal>…</literal>` markers in the source
    #[serde(default)]
    pub literal_protected_phrases: BTreeSet<String>,
}

impl TranslationRecord {
    /// Build a record by splitting both texts on single spaces
    ///
    /// Convenience constructor for callers without an upstream tokenizer.
    /// The plain split keeps the join invariant exactly; use
    /// [`TranslationRecord::with_tokens`] when a real tokenizer produced
    /// the token sequences.
    pub fn new(source_text: &str, target_text: &str, raw_alignment: &str) -> Self {
        Self {
            source_tokens: split_tokens(source_text),
            target_tokens: split_tokens(target_text),
            source_text: source_text.to_string(),
            target_text: target_text.to_string(),
            raw_alignment: raw_alignment.to_string(),
            literal_protected_phrases: BTreeSet::new(),
        }
    }

    /// Build a record from upstream-tokenized sentences
    pub fn with_tokens(
        source_text: &str,
        target_text: &str,
        source_tokens: Vec<String>,
        target_tokens: Vec<String>,
        raw_alignment: &str,
    ) -> Self {
        Self {
            source_text: source_text.to_string(),
            target_text: target_text.to_string(),
            source_tokens,
            target_tokens,
            raw_alignment: raw_alignment.to_string(),
            literal_protected_phrases: BTreeSet::new(),
        }
    }

    /// Attach literal-protected phrases to this record
    pub fn with_literal_phrases(mut self, phrases: impl IntoIterator<Item = String>) -> Self {
        self.literal_protected_phrases.extend(phrases);
        self
    }

    /// Fill empty token vectors from their texts
    ///
    /// Records deserialized from JSON may arrive without token sequences;
    /// this derives them with the same plain space split as
    /// [`TranslationRecord::new`]. Token vectors that are already populated
    /// are left alone.
    pub fn ensure_tokens(&mut self) {
        if self.source_tokens.is_empty() && !self.source_text.is_empty() {
            self.source_tokens = split_tokens(&self.source_text);
        }
        if self.target_tokens.is_empty() && !self.target_text.is_empty() {
            self.target_tokens = split_tokens(&self.target_text);
        }
    }
}

/// The outcome of a post-processing pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedResult {
    /// The record, with target tokens rewritten in place
    pub record: TranslationRecord,
    /// Final target text: rewritten tokens joined with single spaces (or
    /// the untouched `target_text` when no alignment was available)
    pub final_text: String,
}

fn split_tokens(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(' ').map(str::to_string).collect()
}
