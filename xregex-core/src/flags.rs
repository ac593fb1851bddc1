//! flags.rs - Parses matcher flag strings for the regex engine adapter.
//!
//! The translator treats the flags string as opaque and hands it on
//! untouched. This module is the adapter side: it maps single-letter flags
//! onto `regex::RegexBuilder` options and rejects anything the engine has no
//! counterpart for.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;
use std::str::FromStr;

use regex::RegexBuilder;

use crate::errors::XRegexError;

/// Parsed matcher flags.
///
/// | letter | meaning |
/// |---|---|
/// | `g` | global: `matches` returns every match instead of the first |
/// | `i` | case-insensitive |
/// | `m` | `^` and `$` match at line boundaries |
/// | `s` | `.` matches `\n` |
/// | `u` | Unicode mode (the engine is always Unicode-aware; accepted for portability) |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MatcherFlags {
    pub global: bool,
    pub ignore_case: bool,
    pub multi_line: bool,
    pub dot_all: bool,
    pub unicode: bool,
}

impl MatcherFlags {
    /// Parses a flags string. Order does not matter; repeats and unknown
    /// letters are errors.
    pub fn parse(flags: &str) -> Result<Self, XRegexError> {
        let mut parsed = MatcherFlags::default();
        for c in flags.chars() {
            let slot = match c {
                'g' => &mut parsed.global,
                'i' => &mut parsed.ignore_case,
                'm' => &mut parsed.multi_line,
                's' => &mut parsed.dot_all,
                'u' => &mut parsed.unicode,
                other => return Err(XRegexError::UnsupportedFlag(other)),
            };
            if *slot {
                return Err(XRegexError::DuplicateFlag(c));
            }
            *slot = true;
        }
        Ok(parsed)
    }

    /// Applies the engine-level options to a builder. `g` has no engine
    /// counterpart and is handled by `CompiledMatcher`.
    pub fn configure<'b>(&self, builder: &'b mut RegexBuilder) -> &'b mut RegexBuilder {
        builder
            .case_insensitive(self.ignore_case)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_all)
            .unicode(true)
    }
}

impl FromStr for MatcherFlags {
    type Err = XRegexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MatcherFlags::parse(s)
    }
}

/// Renders the flags in canonical `gimsu` order.
impl fmt::Display for MatcherFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters = [
            (self.global, 'g'),
            (self.ignore_case, 'i'),
            (self.multi_line, 'm'),
            (self.dot_all, 's'),
            (self.unicode, 'u'),
        ];
        for (set, letter) in letters {
            if set {
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}
