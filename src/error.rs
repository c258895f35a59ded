//! Error types for the post-editing pipeline
//!
//! Only configuration problems and structurally unusable records surface as
//! errors. Every degraded condition inside the substitution pipeline itself
//! (a match that crosses a token boundary, an alignment gap, a digit run with
//! no matching token, a blank alignment) is a silent no-op: the engine prefers
//! returning the unmodified translation over blocking the pipeline.

use thiserror::Error;

/// Errors surfaced by pattern configuration and record processing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostEditError {
    /// The language → patterns mapping supplied at startup was empty
    #[error("no-translate pattern configuration is empty")]
    EmptyPatternConfig,

    /// A configured pattern does not compile as a regular expression
    #[error("invalid no-translate pattern {pattern:?} for language {language:?}: {reason}")]
    InvalidPattern {
        /// Language the pattern was configured under
        language: String,
        /// The raw pattern as supplied (trimmed)
        pattern: String,
        /// Compiler message explaining the rejection
        reason: String,
    },

    /// No patterns are configured for the requested language
    #[error("no no-translate patterns configured for language {0:?}")]
    UnsupportedLanguage(String),

    /// A record is structurally unusable, e.g. text present but tokens missing
    #[error("invalid translation record: {0}")]
    InvalidRecord(String),
}

/// Result type for post-editing operations
pub type PostEditResult<T> = Result<T, PostEditError>;
