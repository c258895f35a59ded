//! Source-to-target token alignment lookup
//!
//! Translation providers emit a word alignment alongside the translated
//! sentence, encoded as whitespace-separated `src-tgt` token index pairs
//! (e.g. `"0-0 1-2 2-1"`). This module decodes that encoding into an
//! immutable lookup from a source-token index to the target-token indices
//! aligned with it.
//!
//! Token indices live in two distinct spaces (position in the source token
//! sequence versus position in the target token sequence) and the newtypes
//! below keep them from being mixed up. Raw `usize` values should only enter
//! or leave these spaces through [`AlignmentMap`] and the span resolver.

use std::collections::HashMap;

use log::debug;

/// Index of a token in the source sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceTokenIndex(pub usize);

/// Index of a token in the target (translated) sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetTokenIndex(pub usize);

/// Immutable lookup from a source-token index to its aligned target tokens
///
/// One source token may align with several target tokens (and vice versa);
/// targets are stored in ascending order. The map is built once per record
/// and never modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignmentMap {
    targets_by_source: HashMap<SourceTokenIndex, Vec<TargetTokenIndex>>,
}

impl AlignmentMap {
    /// Decode a raw alignment string into a lookup table
    ///
    /// The encoding is whitespace-separated `src-tgt` pairs of token indices.
    /// Malformed fragments are skipped rather than reported: an alignment is
    /// advisory input and a partially decoded map still allows best-effort
    /// substitution. A blank string yields an empty map.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let map = AlignmentMap::parse("0-0 1-2 2-1");
    /// assert_eq!(map.targets_for(SourceTokenIndex(1)), &[TargetTokenIndex(2)]);
    /// ```
    pub fn parse(raw: &str) -> Self {
        let mut targets_by_source: HashMap<SourceTokenIndex, Vec<TargetTokenIndex>> =
            HashMap::new();

        for pair in raw.split_whitespace() {
            let parsed = pair
                .split_once('-')
                .and_then(|(src, tgt)| Some((src.parse::<usize>().ok()?, tgt.parse::<usize>().ok()?)));

            match parsed {
                Some((src, tgt)) => {
                    targets_by_source
                        .entry(SourceTokenIndex(src))
                        .or_default()
                        .push(TargetTokenIndex(tgt));
                }
                None => {
                    debug!("skipping malformed alignment pair {:?}", pair);
                }
            }
        }

        for targets in targets_by_source.values_mut() {
            targets.sort();
            targets.dedup();
        }

        Self { targets_by_source }
    }

    /// Target-token indices aligned with the given source token
    ///
    /// Returns an empty slice for an unaligned source index (an alignment
    /// gap); callers treat that as "nothing to substitute".
    pub fn targets_for(&self, source: SourceTokenIndex) -> &[TargetTokenIndex] {
        self.targets_by_source
            .get(&source)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of source tokens that have at least one aligned target
    pub fn len(&self) -> usize {
        self.targets_by_source.len()
    }

    /// Whether the map holds no alignment pairs at all
    pub fn is_empty(&self) -> bool {
        self.targets_by_source.is_empty()
    }
}
