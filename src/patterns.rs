//! No-translate pattern configuration
//!
//! A no-translate pattern is a regex template whose capturing group marks a
//! source-language span that must survive translation unchanged. Patterns
//! are supplied once at startup as a language → raw-pattern-list mapping;
//! this module normalizes them (trim, ensure one capturing group), verifies
//! they compile, and stores them per base language.
//!
//! The stored index is immutable after construction. A record can carry
//! additional ad-hoc literal-protected phrases; the union of those with the
//! stored set is always computed as a fresh per-call value and never written
//! back, so concurrent `process` calls share the index read-only.

use std::collections::{BTreeSet, HashMap};

use icu_locale::Locale;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{PostEditError, PostEditResult};

/// Probe for a parenthesized group inside a raw pattern
static GROUP_PROBE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(.+\)").expect("group probe regex"));

/// Compiled per-language no-translate pattern sets
///
/// Pattern strings are stored in normalized form. Per language they form a
/// set: duplicates collapse, and iteration order carries no meaning;
/// matching must not depend on the order patterns are applied in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternIndex {
    by_language: HashMap<String, BTreeSet<String>>,
}

impl PatternIndex {
    /// Build the index from the startup configuration
    ///
    /// Fails with [`PostEditError::EmptyPatternConfig`] when the mapping is
    /// empty and with [`PostEditError::InvalidPattern`] when a pattern does
    /// not compile. Configuration problems are fatal at startup, not
    /// worked around at call time.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut config = HashMap::new();
    /// config.insert("fr".to_string(), vec!["mon nom est (.+)".to_string()]);
    /// let index = PatternIndex::build(&config)?;
    /// ```
    pub fn build(config: &HashMap<String, Vec<String>>) -> PostEditResult<Self> {
        if config.is_empty() {
            return Err(PostEditError::EmptyPatternConfig);
        }

        let mut by_language: HashMap<String, BTreeSet<String>> = HashMap::new();
        for (language, raw_patterns) in config {
            let entry = by_language.entry(normalize_language(language)).or_default();
            for raw in raw_patterns {
                let normalized = normalize_pattern(raw);
                if let Err(e) = Regex::new(&normalized) {
                    return Err(PostEditError::InvalidPattern {
                        language: language.clone(),
                        pattern: raw.trim().to_string(),
                        reason: e.to_string(),
                    });
                }
                entry.insert(normalized);
            }
        }

        Ok(Self { by_language })
    }

    /// Stored pattern set for a language
    ///
    /// The language identifier is normalized the same way as at build time,
    /// so `"fr-FR"` finds patterns stored under `"fr"`. Fails with
    /// [`PostEditError::UnsupportedLanguage`] when the language has no
    /// configured patterns.
    pub fn patterns_for(&self, language: &str) -> PostEditResult<&BTreeSet<String>> {
        self.by_language
            .get(&normalize_language(language))
            .ok_or_else(|| PostEditError::UnsupportedLanguage(language.to_string()))
    }

    /// Effective pattern set for one call: stored patterns ∪ literal phrases
    ///
    /// Always returns a fresh set scoped to the caller; the shared index is
    /// never mutated. Literal phrases go through the same normalization as
    /// configured patterns.
    pub fn effective_patterns(
        &self,
        language: &str,
        literal_phrases: &BTreeSet<String>,
    ) -> PostEditResult<BTreeSet<String>> {
        let mut effective = self.patterns_for(language)?.clone();
        for phrase in literal_phrases {
            effective.insert(normalize_pattern(phrase));
        }
        Ok(effective)
    }

    /// Languages with configured patterns, in normalized form
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.by_language.keys().map(String::as_str)
    }
}

/// Compile a normalized pattern with the matching semantics the processor
/// uses: case-insensitive, dot matches newline.
pub(crate) fn compile_matcher(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("(?is){pattern}"))
}

/// Trim a raw pattern and make sure it carries one capturing group
///
/// A pattern without any parenthesized group protects its entire match, so
/// the whole expression is wrapped in a single capturing group.
fn normalize_pattern(raw: &str) -> String {
    let trimmed = raw.trim();
    if GROUP_PROBE_RE.is_match(trimmed) {
        trimmed.to_string()
    } else {
        format!("({})", trimmed)
    }
}

/// Reduce a language identifier to its base language subtag
///
/// `"fr-FR"`, `"FR"` and `"fr"` all key the same pattern set. Identifiers
/// that do not parse as a locale fall back to their trimmed lowercase form
/// so opaque caller-defined codes still work as plain keys.
fn normalize_language(language: &str) -> String {
    let trimmed = language.trim();
    match trimmed.parse::<Locale>() {
        Ok(locale) => locale.id.language.to_string(),
        Err(_) => trimmed.to_lowercase(),
    }
}
