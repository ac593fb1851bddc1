// xregex/src/ui/region_table.rs
//! Renders the region breakdown of an extended pattern as a table.

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, ContentArrangement, Table};
use xregex_core::{RegionKind, RegionScanner};

/// Longest region text shown before truncation.
const MAX_CELL_CHARS: usize = 40;

fn display_text(text: &str) -> String {
    let escaped = format!("{:?}", text);
    if escaped.chars().count() <= MAX_CELL_CHARS {
        escaped
    } else {
        let head: String = escaped.chars().take(MAX_CELL_CHARS - 3).collect();
        format!("{}...", head)
    }
}

/// One row per region: index, kind, byte span, text, and whether it is kept.
pub fn build_region_table(pattern: &str) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Kind", "Span", "Text", "Kept"]);

    for (index, region) in RegionScanner::new(pattern).enumerate() {
        let kept = if region.kind.is_stripped() { "no" } else { "yes" };
        table.add_row(vec![
            Cell::new(index),
            Cell::new(region.kind),
            Cell::new(format!("{}..{}", region.start, region.end)),
            Cell::new(display_text(region.text)),
            Cell::new(kept),
        ]);
    }

    table
}

/// Human label for the summary line.
pub fn kind_label(kind: RegionKind, count: usize) -> String {
    let noun = match kind {
        RegionKind::CharacterClass => "character class",
        RegionKind::Comment => "comment",
        RegionKind::Whitespace => "whitespace run",
        RegionKind::PassThrough => "pass-through span",
    };
    if count == 1 {
        format!("1 {}", noun)
    } else if kind == RegionKind::CharacterClass {
        format!("{} character classes", count)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_one_row_per_region() {
        let table = build_region_table("a # c\n[ ]");
        assert_eq!(table.row_iter().count(), 5);
        let rendered = table.to_string();
        assert!(rendered.contains("comment"));
        assert!(rendered.contains("character-class"));
    }

    #[test]
    fn test_long_text_is_truncated() {
        let long = "x".repeat(100);
        let shown = display_text(&long);
        assert_eq!(shown.chars().count(), MAX_CELL_CHARS);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(kind_label(RegionKind::Comment, 1), "1 comment");
        assert_eq!(kind_label(RegionKind::Comment, 2), "2 comments");
        assert_eq!(kind_label(RegionKind::CharacterClass, 3), "3 character classes");
        assert_eq!(kind_label(RegionKind::Whitespace, 0), "0 whitespace runs");
    }
}
