//! matcher.rs - The compiled matcher handed back to callers.
//!
//! `CompiledMatcher` wraps a `regex::Regex` built from a compact pattern and
//! keeps the compact source and flags alongside it, so callers can inspect
//! exactly what the engine was given.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;

use log::debug;
use regex::{CaptureMatches, Captures, Match, Matches, Regex, RegexBuilder};

use crate::errors::XRegexError;
use crate::flags::MatcherFlags;

/// Size limit for a compiled matcher, same as for the engine's other
/// compiled rules.
pub const COMPILED_SIZE_LIMIT: usize = 10 * (1 << 20);

/// A matcher built from a compact pattern and a flags string.
#[derive(Debug, Clone)]
pub struct CompiledMatcher {
    source: String,
    flags: String,
    parsed_flags: MatcherFlags,
    regex: Regex,
}

impl CompiledMatcher {
    /// Builds a matcher from an already-compact pattern.
    ///
    /// Errors from the engine are returned as `MatcherConstruction` with the
    /// engine's error as the source. Nothing is pre-validated.
    pub fn new(source: impl Into<String>, flags: &str) -> Result<Self, XRegexError> {
        let source = source.into();
        let parsed_flags = MatcherFlags::parse(flags)?;

        let mut builder = RegexBuilder::new(&source);
        parsed_flags.configure(&mut builder).size_limit(COMPILED_SIZE_LIMIT);

        let regex = builder.build().map_err(|e| XRegexError::MatcherConstruction {
            source_text: source.clone(),
            source: e,
        })?;

        debug!("Built matcher /{}/{} with {} capture groups.", source, flags, regex.captures_len());

        Ok(Self {
            source,
            flags: flags.to_string(),
            parsed_flags,
            regex,
        })
    }

    /// The compact pattern text given to the engine.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The flags string exactly as supplied.
    pub fn flags(&self) -> &str {
        &self.flags
    }

    pub fn parsed_flags(&self) -> MatcherFlags {
        self.parsed_flags
    }

    pub fn is_global(&self) -> bool {
        self.parsed_flags.global
    }

    /// The underlying engine object, for anything not wrapped here.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }

    pub fn find<'h>(&self, haystack: &'h str) -> Option<Match<'h>> {
        self.regex.find(haystack)
    }

    pub fn find_iter<'r, 'h>(&'r self, haystack: &'h str) -> Matches<'r, 'h> {
        self.regex.find_iter(haystack)
    }

    pub fn captures<'h>(&self, haystack: &'h str) -> Option<Captures<'h>> {
        self.regex.captures(haystack)
    }

    pub fn captures_iter<'r, 'h>(&'r self, haystack: &'h str) -> CaptureMatches<'r, 'h> {
        self.regex.captures_iter(haystack)
    }

    /// Names of the named capture groups, in group order.
    pub fn capture_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.regex.capture_names().flatten()
    }

    /// Every match when the matcher is global, otherwise at most the first.
    pub fn matches<'h>(&self, haystack: &'h str) -> Vec<Captures<'h>> {
        let limit = if self.is_global() { usize::MAX } else { 1 };
        self.regex.captures_iter(haystack).take(limit).collect()
    }
}

/// Renders as `/source/flags`.
impl fmt::Display for CompiledMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_source_and_flags() {
        let matcher = CompiledMatcher::new(r"(?<word>\w+)", "mg").unwrap();
        assert_eq!(matcher.source(), r"(?<word>\w+)");
        assert_eq!(matcher.flags(), "mg");
        assert!(matcher.is_global());
        assert_eq!(matcher.to_string(), r"/(?<word>\w+)/mg");
        assert_eq!(matcher.capture_names().collect::<Vec<_>>(), vec!["word"]);
    }

    #[test]
    fn test_wrapped_engine_calls() {
        let matcher = CompiledMatcher::new(r"(?<n>\d+)", "i").unwrap();
        assert_eq!(matcher.find("ab 12 34").map(|m| m.range()), Some(3..5));
        assert_eq!(matcher.captures_iter("1 2 3").count(), 3);
        assert_eq!(matcher.regex().as_str(), matcher.source());
        assert!(matcher.parsed_flags().ignore_case);
        assert!(matcher.captures("none").is_none());
    }

    #[test]
    fn test_matches_respects_global_flag() {
        let global = CompiledMatcher::new(r"\d", "g").unwrap();
        let single = CompiledMatcher::new(r"\d", "").unwrap();
        assert_eq!(global.matches("a1b2c3").len(), 3);
        assert_eq!(single.matches("a1b2c3").len(), 1);
        assert!(single.matches("abc").is_empty());
        assert_eq!(single.find_iter("a1b2c3").count(), 3);
    }

    #[test]
    fn test_invalid_pattern_is_construction_error() {
        let err = CompiledMatcher::new("(unclosed", "").unwrap_err();
        match &err {
            XRegexError::MatcherConstruction { source_text, .. } => assert_eq!(source_text, "(unclosed"),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(err.is_construction_error());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_invalid_flags_fail_before_compilation() {
        let err = CompiledMatcher::new("(unclosed", "q").unwrap_err();
        assert!(matches!(err, XRegexError::UnsupportedFlag('q')));
    }

    #[test]
    fn test_flags_reach_the_engine() {
        let matcher = CompiledMatcher::new("^b.c$", "ims").unwrap();
        assert!(matcher.is_match("a\nB\nC"));
        assert!(!CompiledMatcher::new("^b.c$", "").unwrap().is_match("a\nB\nC"));
    }
}
