//! errors.rs - Custom error types for the xregex-core library.
//!
//! Translation itself never fails. Every variant here describes either a
//! failure to build the matcher from the compact pattern, or a problem with
//! the surrounding pattern-file plumbing.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `xregex-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum XRegexError {
    /// The regex engine rejected the compact pattern.
    #[error("Failed to build matcher from /{source_text}/: {source}")]
    MatcherConstruction {
        source_text: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid flags: unsupported flag '{0}'")]
    UnsupportedFlag(char),

    #[error("Invalid flags: flag '{0}' given more than once")]
    DuplicateFlag(char),

    #[error("Pattern '{0}': length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("Pattern '{0}' not found")]
    PatternNotFound(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}

impl XRegexError {
    /// Returns `true` for errors raised while constructing a matcher
    /// (bad compact pattern or bad flags).
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            XRegexError::MatcherConstruction { .. }
                | XRegexError::UnsupportedFlag(_)
                | XRegexError::DuplicateFlag(_)
        )
    }
}
