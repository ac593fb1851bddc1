//! Configuration management for `xregex-core`.
//!
//! A pattern file is a YAML document listing named extended patterns together
//! with the flags they should be compiled with. This module loads and
//! validates such files, finds them on disk, and compiles every entry in one
//! go.
//!
//! ```yaml
//! patterns:
//!   - name: ini_line
//!     description: One line of an INI file
//!     flags: gm
//!     pattern: |
//!       ^ \s* (?<name> \w+ ) \s* = .*   # key = value
//! ```
//!
//! License: MIT OR Apache-2.0

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use xregex_scan::{RegionKind, RegionScanner};

use crate::errors::XRegexError;
use crate::matcher::CompiledMatcher;
use crate::translator::{is_closed_class, translate};

/// Maximum allowed length, in bytes, of an extended pattern in a pattern file.
pub const MAX_PATTERN_LENGTH: usize = 64 * 1024;

/// File name searched for by `load_default_config`.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "xregex.yaml";

/// A single named extended pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PatternEntry {
    /// Unique identifier for the pattern (e.g., "ini_line").
    pub name: String,
    /// Human-readable description of what the pattern targets.
    pub description: Option<String>,
    /// The extended pattern text.
    pub pattern: String,
    /// Flags handed to the matcher, e.g. "gm".
    pub flags: String,
    /// Metadata tags for categorization.
    pub tags: Option<Vec<String>>,
}

/// Top-level structure of a pattern file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PatternConfig {
    #[serde(default)]
    pub patterns: Vec<PatternEntry>,
}

impl PatternConfig {
    /// Loads and validates a pattern file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading patterns from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read pattern file {}", path.display()))?;
        let config = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to load pattern file {}", path.display()))?;
        info!("Loaded {} patterns from file {}.", config.patterns.len(), path.display());
        Ok(config)
    }

    /// Parses and validates a pattern file held in memory.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: PatternConfig = serde_yml::from_str(text).context("Failed to parse pattern YAML")?;
        validate_patterns(&config.patterns)?;
        Ok(config)
    }

    /// Looks up a pattern by name.
    pub fn find(&self, name: &str) -> Result<&PatternEntry, XRegexError> {
        self.patterns
            .iter()
            .find(|entry| entry.name == name)
            .ok_or_else(|| XRegexError::PatternNotFound(name.to_string()))
    }
}

/// Locations searched for `xregex.yaml`, in priority order.
pub fn config_candidate_paths() -> Vec<PathBuf> {
    let base_dirs = vec![
        Some(PathBuf::from(".")),
        dirs::config_dir().map(|p| p.join("xregex")),
        dirs::home_dir().map(|p| p.join(".xregex")),
    ];

    base_dirs
        .into_iter()
        .flatten()
        .map(|dir| dir.join(DEFAULT_CONFIG_FILE_NAME))
        .collect()
}

/// Loads the first pattern file found in `config_candidate_paths`.
pub fn load_default_config() -> Result<PatternConfig> {
    let path = config_candidate_paths()
        .into_iter()
        .find(|p| p.is_file())
        .with_context(|| {
            format!(
                "No {} found in the working directory or user config locations.",
                DEFAULT_CONFIG_FILE_NAME
            )
        })?;
    debug!("Using pattern file found at {}", path.display());
    PatternConfig::load_from_file(path)
}

/// Checks entry integrity. Unterminated character classes are legal (the
/// class simply runs to end of pattern) but almost never intended, so they
/// are warned about.
fn validate_patterns(entries: &[PatternEntry]) -> Result<()> {
    let mut names = HashSet::new();
    let mut errors = Vec::new();

    for entry in entries {
        if entry.name.is_empty() {
            errors.push("A pattern has an empty `name` field.".to_string());
        } else if !names.insert(entry.name.as_str()) {
            errors.push(format!("Duplicate pattern name found: '{}'.", entry.name));
        }

        if entry.pattern.trim().is_empty() {
            errors.push(format!("Pattern '{}' has an empty `pattern` field.", entry.name));
            continue;
        }

        if entry.pattern.len() > MAX_PATTERN_LENGTH {
            errors.push(
                XRegexError::PatternLengthExceeded(entry.name.clone(), entry.pattern.len(), MAX_PATTERN_LENGTH)
                    .to_string(),
            );
            continue;
        }

        let unterminated = RegionScanner::new(&entry.pattern)
            .last()
            .filter(|region| region.kind == RegionKind::CharacterClass)
            .is_some_and(|region| !is_closed_class(region.text));
        if unterminated {
            warn!(
                "Pattern '{}' has an unterminated character class; it extends to the end of the pattern.",
                entry.name
            );
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(anyhow!("Pattern validation failed:\n{}", errors.join("\n")))
    }
}

/// One successfully compiled entry of a pattern file.
#[derive(Debug)]
pub struct CompiledPattern {
    pub name: String,
    pub description: Option<String>,
    pub matcher: CompiledMatcher,
}

/// Every entry of a pattern file, compiled.
#[derive(Debug, Default)]
pub struct CompiledPatterns {
    pub patterns: Vec<CompiledPattern>,
}

impl CompiledPatterns {
    pub fn get(&self, name: &str) -> Option<&CompiledPattern> {
        self.patterns.iter().find(|p| p.name == name)
    }
}

/// Compiles every entry. All failures are collected and reported together.
pub fn compile_patterns(config: &PatternConfig) -> Result<CompiledPatterns, XRegexError> {
    debug!("Starting compilation of {} patterns.", config.patterns.len());

    let mut compiled = Vec::with_capacity(config.patterns.len());
    let mut failures = Vec::new();

    for entry in &config.patterns {
        match translate(&entry.pattern, &entry.flags) {
            Ok(matcher) => {
                debug!("Pattern '{}' compiled successfully.", entry.name);
                compiled.push(CompiledPattern {
                    name: entry.name.clone(),
                    description: entry.description.clone(),
                    matcher,
                });
            }
            Err(e) => failures.push(format!("Pattern '{}': {}", entry.name, e)),
        }
    }

    if !failures.is_empty() {
        return Err(XRegexError::Fatal(format!(
            "Failed to compile {} pattern(s):\n{}",
            failures.len(),
            failures.join("\n")
        )));
    }

    debug!("Finished compiling patterns. Total compiled: {}.", compiled.len());
    Ok(CompiledPatterns { patterns: compiled })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, pattern: &str) -> PatternEntry {
        PatternEntry {
            name: name.to_string(),
            pattern: pattern.to_string(),
            ..PatternEntry::default()
        }
    }

    #[test]
    fn test_validate_rejects_empty_and_duplicate_names() {
        let err = validate_patterns(&[entry("", "a"), entry("x", "a"), entry("x", "b")]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("empty `name`"));
        assert!(message.contains("Duplicate pattern name found: 'x'"));
    }

    #[test]
    fn test_validate_rejects_blank_pattern() {
        let err = validate_patterns(&[entry("blank", "  \n ")]).unwrap_err();
        assert!(err.to_string().contains("Pattern 'blank' has an empty `pattern` field."));
    }

    #[test]
    fn test_validate_rejects_oversized_pattern() {
        let huge = "a".repeat(MAX_PATTERN_LENGTH + 1);
        let err = validate_patterns(&[entry("huge", &huge)]).unwrap_err();
        assert!(err.to_string().contains("exceeds maximum allowed"));
    }

    #[test]
    fn test_validate_accepts_unterminated_class() {
        assert!(validate_patterns(&[entry("open", "[abc # oops")]).is_ok());
    }

    #[test]
    fn test_find_reports_missing_name() {
        let config = PatternConfig { patterns: vec![entry("a", "a")] };
        assert_eq!(config.find("a").unwrap().pattern, "a");
        assert!(matches!(config.find("b"), Err(XRegexError::PatternNotFound(ref n)) if n == "b"));
    }

    #[test]
    fn test_candidate_paths_start_with_working_directory() {
        let paths = config_candidate_paths();
        assert_eq!(paths[0], PathBuf::from(".").join(DEFAULT_CONFIG_FILE_NAME));
        assert!(paths.iter().all(|p| p.ends_with(DEFAULT_CONFIG_FILE_NAME)));
    }
}
