// xregex/src/commands/translate.rs
//! `translate` and `explain`: show what an extended pattern becomes.

use anyhow::Result;
use log::{debug, info};
use std::io::Write;

use xregex_core::{explain, translate_pattern, RegionKind};

use crate::cli::PatternInput;
use crate::commands::read_text;
use crate::ui::output_format::warn_msg;
use crate::ui::region_table::{build_region_table, kind_label};

/// Resolves the extended pattern from `--pattern`, `--input-file` or stdin.
pub fn load_pattern(input: &PatternInput) -> Result<String> {
    match &input.pattern {
        Some(pattern) => Ok(pattern.clone()),
        None => read_text(input.input_file.as_deref()),
    }
}

/// Writes the compact pattern followed by a newline.
pub fn run_translate<W: Write>(pattern: &str, out: &mut W) -> Result<()> {
    let compact = translate_pattern(pattern);
    debug!("Translated {} bytes into {} bytes.", pattern.len(), compact.len());
    writeln!(out, "{}", compact)?;
    Ok(())
}

/// Writes the region table, a one-line summary and the compact pattern.
pub fn run_explain<W: Write>(pattern: &str, out: &mut W) -> Result<()> {
    info!("Explaining extended pattern ({} bytes).", pattern.len());
    let report = explain(pattern);

    writeln!(out, "{}", build_region_table(pattern))?;
    writeln!(
        out,
        "{}, {}, {}, {}; {} bytes removed",
        kind_label(RegionKind::CharacterClass, report.character_classes),
        kind_label(RegionKind::Comment, report.comments),
        kind_label(RegionKind::Whitespace, report.whitespace_runs),
        kind_label(RegionKind::PassThrough, report.pass_through),
        report.removed_bytes,
    )?;
    writeln!(out, "compact: {}", report.compact)?;

    if report.unterminated_class {
        warn_msg("The last character class has no closing ']'; it runs to the end of the pattern.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_translate_writes_compact_line() {
        let mut out = Vec::new();
        run_translate("a b # c\n[ d ]", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "ab[ d ]\n");
    }

    #[test]
    fn test_run_explain_summarises() {
        let mut out = Vec::new();
        run_explain("a # note\n b", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("0 character classes, 1 comment, 2 whitespace runs, 2 pass-through spans; 9 bytes removed"));
        assert!(text.ends_with("compact: ab\n"));
    }

    #[test]
    fn test_inline_pattern_wins() {
        let input = PatternInput { pattern: Some("x y".to_string()), input_file: None };
        assert_eq!(load_pattern(&input).unwrap(), "x y");
    }
}
