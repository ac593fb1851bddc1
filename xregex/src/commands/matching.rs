// xregex/src/commands/matching.rs
//! `match`: run an extended pattern over text and print what it finds.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;

use xregex_core::{collect_captures, translate, CaptureRecord, PatternConfig};

use crate::cli::MatchCommand;
use crate::commands::read_text;

/// Flags used for inline and file patterns when `--flags` is not given.
pub const DEFAULT_FLAGS: &str = "g";

/// The pattern and flags a `match` invocation resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPattern {
    pub pattern: String,
    pub flags: String,
}

/// Picks the pattern source. `--flags` overrides an entry's own flags.
pub fn resolve_pattern(cmd: &MatchCommand) -> Result<ResolvedPattern> {
    let (pattern, entry_flags) = if let Some(pattern) = &cmd.pattern {
        (pattern.clone(), None)
    } else if let Some(path) = &cmd.pattern_file {
        (read_text(Some(path))?, None)
    } else if let Some(name) = &cmd.name {
        let config = match &cmd.config {
            Some(path) => PatternConfig::load_from_file(path)?,
            None => xregex_core::load_default_config()?,
        };
        let entry = config.find(name)?;
        debug!("Using pattern '{}' from pattern file.", entry.name);
        (entry.pattern.clone(), Some(entry.flags.clone()))
    } else {
        anyhow::bail!("One of --pattern, --pattern-file or --name is required.");
    };

    let flags = cmd
        .flags
        .clone()
        .or(entry_flags)
        .unwrap_or_else(|| DEFAULT_FLAGS.to_string());

    Ok(ResolvedPattern { pattern, flags })
}

/// Writes matches as text (or JSON with `--json`) and returns how many there were.
pub fn run_match<W: Write>(cmd: &MatchCommand, out: &mut W) -> Result<usize> {
    let resolved = resolve_pattern(cmd)?;
    let matcher = translate(&resolved.pattern, &resolved.flags)
        .context("Failed to build matcher from the extended pattern")?;
    info!("Running {}", matcher);

    let haystack = read_text(cmd.input_file.as_deref())?;
    let records = collect_captures(&matcher, &haystack);
    debug!("Found {} matches in {} bytes of input.", records.len(), haystack.len());

    if cmd.json {
        serde_json::to_writer_pretty(&mut *out, &records).context("Failed to serialize matches")?;
        writeln!(out)?;
    } else {
        write_records(&records, out)?;
    }

    Ok(records.len())
}

fn write_records<W: Write>(records: &[CaptureRecord], out: &mut W) -> Result<()> {
    for record in records {
        writeln!(out, "{}:{}-{}: {}", record.line_number, record.start, record.end, record.text)?;
        for (name, value) in &record.groups {
            writeln!(out, "    {} = {}", name, value)?;
        }
    }
    Ok(())
}
