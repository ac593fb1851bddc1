// xregex/src/commands/check.rs
//! `check`: compile every entry of a pattern file and report the failures.

use anyhow::Result;
use log::info;
use std::io::Write;

use xregex_core::{translate, PatternConfig};

use crate::cli::CheckCommand;

/// Outcome of checking one pattern file.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub passed: usize,
    pub failed: Vec<(String, String)>,
}

impl CheckSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Compiles each entry individually so every failure is reported, not just the first.
pub fn check_config(config: &PatternConfig) -> CheckSummary {
    let mut summary = CheckSummary::default();
    for entry in &config.patterns {
        match translate(&entry.pattern, &entry.flags) {
            Ok(matcher) => {
                info!("Pattern '{}' compiled as {}", entry.name, matcher);
                summary.passed += 1;
            }
            Err(e) => summary.failed.push((entry.name.clone(), e.to_string())),
        }
    }
    summary
}

/// Loads the pattern file, checks it and writes one line per pattern.
pub fn run_check<W: Write>(cmd: &CheckCommand, out: &mut W) -> Result<CheckSummary> {
    let config = match &cmd.config {
        Some(path) => PatternConfig::load_from_file(path)?,
        None => xregex_core::load_default_config()?,
    };

    let summary = check_config(&config);
    for entry in &config.patterns {
        match summary.failed.iter().find(|(name, _)| name == &entry.name) {
            Some((_, reason)) => writeln!(out, "FAIL {}: {}", entry.name, reason)?,
            None => writeln!(out, "ok   {}", entry.name)?,
        }
    }
    writeln!(out, "{} passed, {} failed", summary.passed, summary.failed.len())?;
    Ok(summary)
}
