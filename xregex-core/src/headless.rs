// xregex-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot, non-interactive use.
//!
//! `extract_captures` translates a pattern, runs it over a haystack and
//! returns plain, serialisable records, which is what the CLI prints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::XRegexError;
use crate::matcher::CompiledMatcher;
use crate::translator::translate;

/// One match with its named groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CaptureRecord {
    /// Byte offset of the match in the haystack.
    pub start: usize,
    pub end: usize,
    pub text: String,
    /// 1-based line of `start`.
    pub line_number: usize,
    /// Named groups that participated in the match.
    #[serde(default)]
    pub groups: BTreeMap<String, String>,
}

/// Runs an already compiled matcher and collects records. Honours the
/// matcher's global flag.
pub fn collect_captures(matcher: &CompiledMatcher, haystack: &str) -> Vec<CaptureRecord> {
    let names: Vec<&str> = matcher.capture_names().collect();
    let mut line_number = 1;
    let mut scanned = 0;

    matcher
        .matches(haystack)
        .into_iter()
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            line_number += haystack[scanned..whole.start()].matches('\n').count();
            scanned = whole.start();

            let groups = names
                .iter()
                .filter_map(|&name| caps.name(name).map(|m| (name.to_string(), m.as_str().to_string())))
                .collect();

            Some(CaptureRecord {
                start: whole.start(),
                end: whole.end(),
                text: whole.as_str().to_string(),
                line_number,
                groups,
            })
        })
        .collect()
}

/// Translates `pattern`, compiles it with `flags`, and extracts every match
/// (or only the first one without `g`).
pub fn extract_captures(pattern: &str, flags: &str, haystack: &str) -> Result<Vec<CaptureRecord>, XRegexError> {
    let matcher = translate(pattern, flags)?;
    Ok(collect_captures(&matcher, haystack))
}
