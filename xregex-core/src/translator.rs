//! translator.rs - Turns extended patterns into compact patterns and matchers.
//!
//! An extended pattern may carry `#` comments that run to end of line and any
//! amount of whitespace between tokens. A compact pattern is what a
//! conventional engine accepts. The translation is one linear pass driven by
//! `xregex_scan::RegionScanner`:
//!
//! * `[...]` character classes are copied verbatim, including any `#` or
//!   whitespace inside them;
//! * unescaped `#` comments and unescaped whitespace runs are dropped;
//! * everything else, escapes included, is copied verbatim.
//!
//! Translation is total. Only building the matcher can fail, and that error
//! comes from the engine untouched.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use serde::Serialize;
use xregex_scan::{RegionKind, RegionScanner};

use crate::errors::XRegexError;
use crate::matcher::CompiledMatcher;

/// Translates an extended pattern into its compact form.
pub fn translate_pattern(pattern: &str) -> String {
    xregex_scan::compact(pattern)
}

/// Translates `pattern` and builds a matcher from the result with `flags`.
///
/// The flags string is passed on without inspection.
///
/// # Examples
///
/// ```
/// use xregex_core::translate;
///
/// let matcher = translate(r"
///     (?<key> \w+ )     # left-hand side
///     \ = \             # literal ' = '
///     (?<value> .* )
/// ", "")?;
///
/// assert_eq!(matcher.source(), r"(?<key>\w+)\ =\ (?<value>.*)");
/// let caps = matcher.captures("answer = 42").unwrap();
/// assert_eq!(&caps["value"], "42");
/// # Ok::<(), xregex_core::XRegexError>(())
/// ```
pub fn translate(pattern: &str, flags: &str) -> Result<CompiledMatcher, XRegexError> {
    let compact = translate_pattern(pattern);
    debug!(
        "Translated extended pattern ({} bytes) to compact pattern ({} bytes).",
        pattern.len(),
        compact.len()
    );
    CompiledMatcher::new(compact, flags)
}

/// Per-kind region statistics for one translation, used for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TranslationReport {
    /// The compact pattern.
    pub compact: String,
    pub character_classes: usize,
    pub comments: usize,
    pub whitespace_runs: usize,
    pub pass_through: usize,
    /// Bytes dropped from the input.
    pub removed_bytes: usize,
    /// Set when the last region is a `[` class with no closing `]`; such a
    /// class runs to end of input and swallows everything after it.
    pub unterminated_class: bool,
}

/// Translates `pattern` and reports what the scan found.
pub fn explain(pattern: &str) -> TranslationReport {
    let mut report = TranslationReport {
        compact: String::with_capacity(pattern.len()),
        ..TranslationReport::default()
    };

    for region in RegionScanner::new(pattern) {
        match region.kind {
            RegionKind::CharacterClass => {
                report.character_classes += 1;
                report.unterminated_class = !is_closed_class(region.text);
            }
            RegionKind::Comment => report.comments += 1,
            RegionKind::Whitespace => report.whitespace_runs += 1,
            RegionKind::PassThrough => report.pass_through += 1,
        }
        if region.kind.is_stripped() {
            report.removed_bytes += region.len();
        } else {
            report.compact.push_str(region.text);
            if region.kind != RegionKind::CharacterClass {
                report.unterminated_class = false;
            }
        }
    }

    report
}

/// A class region is closed when it ends in an unescaped `]` after the opener.
pub(crate) fn is_closed_class(text: &str) -> bool {
    text.len() >= 2 && text.ends_with(']') && !xregex_scan::is_escaped(text, text.len() - 1)
}
