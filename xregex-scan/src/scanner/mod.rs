// xregex-scan/src/scanner/mod.rs
use alloc::string::String;

use crate::charset::{is_line_terminator, is_pattern_whitespace};
use crate::region::{Region, RegionKind};

/// Splits an extended pattern into regions in a single left-to-right pass.
///
/// Each call to `next` starts on a region boundary, and escape pairs are
/// always consumed whole, so the character under the cursor is never escaped.
/// That gives backslash-run parity without looking behind.
pub struct RegionScanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> RegionScanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }
}

impl<'a> Iterator for RegionScanner<'a> {
    type Item = Region<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.input[self.pos..];
        let first = rest.chars().next()?;

        let (kind, len) = match first {
            '[' => (RegionKind::CharacterClass, character_class_len(rest)),
            '#' => (RegionKind::Comment, comment_len(rest)),
            c if is_pattern_whitespace(c) => (RegionKind::Whitespace, whitespace_len(rest)),
            _ => (RegionKind::PassThrough, pass_through_len(rest)),
        };

        let start = self.pos;
        self.pos += len;
        Some(Region {
            kind,
            start,
            end: self.pos,
            text: &self.input[start..self.pos],
        })
    }
}

/// `rest` starts with an unescaped `[`. Runs to the nearest unescaped `]`,
/// or to end of input when there is none.
fn character_class_len(rest: &str) -> usize {
    let mut chars = rest.char_indices().skip(1);
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            ']' => return i + c.len_utf8(),
            _ => {}
        }
    }
    rest.len()
}

/// `rest` starts with an unescaped `#`. The terminator itself is not included.
fn comment_len(rest: &str) -> usize {
    rest.char_indices()
        .find(|&(_, c)| is_line_terminator(c))
        .map_or(rest.len(), |(i, _)| i)
}

fn whitespace_len(rest: &str) -> usize {
    rest.char_indices()
        .find(|&(_, c)| !is_pattern_whitespace(c))
        .map_or(rest.len(), |(i, _)| i)
}

/// Stops before the next unescaped `[`, `#` or whitespace character.
fn pass_through_len(rest: &str) -> usize {
    let mut chars = rest.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '[' | '#' => return i,
            c if is_pattern_whitespace(c) => return i,
            _ => {}
        }
    }
    rest.len()
}

/// Translates an extended pattern into its compact form.
///
/// Total over any input: comment and whitespace regions are dropped, every
/// other region is copied unchanged.
pub fn compact(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    for region in RegionScanner::new(pattern) {
        out.push_str(region.output());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn kinds(pattern: &str) -> Vec<(RegionKind, &str)> {
        RegionScanner::new(pattern).map(|r| (r.kind, r.text)).collect()
    }

    #[test]
    fn test_plain_pattern_is_one_pass_through_region() {
        assert_eq!(kinds(r"^a+(b|c)?\d{2,3}$"), [(RegionKind::PassThrough, r"^a+(b|c)?\d{2,3}$")]);
        assert_eq!(compact(r"^a+(b|c)?\d{2,3}$"), r"^a+(b|c)?\d{2,3}$");
    }

    #[test]
    fn test_empty_input_yields_no_regions() {
        assert!(kinds("").is_empty());
        assert_eq!(compact(""), "");
    }

    #[test]
    fn test_comment_stops_before_line_terminator() {
        assert_eq!(
            kinds("a#comment\nb"),
            [
                (RegionKind::PassThrough, "a"),
                (RegionKind::Comment, "#comment"),
                (RegionKind::Whitespace, "\n"),
                (RegionKind::PassThrough, "b"),
            ]
        );
        assert_eq!(compact("a#comment\nb"), "ab");
        assert_eq!(compact("a#x\r\nb#y\u{2028}c"), "abc");
    }

    #[test]
    fn test_whitespace_outside_classes_is_removed() {
        assert_eq!(compact(" a b "), "ab");
        assert_eq!(compact("a \t\n\n  b"), "ab");
        assert_eq!(compact("a\u{00a0}\u{feff}b"), "ab");
    }

    #[test]
    fn test_character_class_is_preserved() {
        assert_eq!(kinds("[a b#c]"), [(RegionKind::CharacterClass, "[a b#c]")]);
        assert_eq!(compact("x [ #] y"), "x[ #]y");
    }

    #[test]
    fn test_escaped_bracket_inside_class_does_not_close_it() {
        assert_eq!(
            kinds(r"[^\] ]+"),
            [(RegionKind::CharacterClass, r"[^\] ]"), (RegionKind::PassThrough, "+")]
        );
    }

    #[test]
    fn test_escaped_markers_pass_through() {
        assert_eq!(compact(r"a\ b"), r"a\ b");
        assert_eq!(compact(r"a\#b"), r"a\#b");
        assert_eq!(compact(r"\[ a ]"), r"\[a]");
        assert_eq!(compact("a\\\nb"), "a\\\nb");
    }

    #[test]
    fn test_even_backslash_run_does_not_escape() {
        assert_eq!(compact(r"a\\#tail"), r"a\\");
        assert_eq!(compact(r"a\\ b"), r"a\\b");
        assert_eq!(compact(r"\\[ x ]"), r"\\[ x ]");
        assert_eq!(compact(r"a\\\#b"), r"a\\\#b");
    }

    #[test]
    fn test_unterminated_class_swallows_rest() {
        assert_eq!(
            kinds("a [b # not a comment\n  c"),
            [
                (RegionKind::PassThrough, "a"),
                (RegionKind::Whitespace, " "),
                (RegionKind::CharacterClass, "[b # not a comment\n  c"),
            ]
        );
    }

    #[test]
    fn test_empty_brackets_form_a_class() {
        assert_eq!(
            kinds("[]a]"),
            [(RegionKind::CharacterClass, "[]"), (RegionKind::PassThrough, "a]")]
        );
    }

    #[test]
    fn test_trailing_backslash_is_kept() {
        assert_eq!(kinds("a\\"), [(RegionKind::PassThrough, "a\\")]);
    }

    #[test]
    fn test_regions_reconstruct_input() {
        let pattern = "  ^(?<a> x # one\n [ #]\\ \\# )\t# two\n[unterminated ";
        let mut rebuilt = String::new();
        let mut expected_start = 0;
        for region in RegionScanner::new(pattern) {
            assert_eq!(region.start, expected_start);
            assert!(!region.is_empty());
            rebuilt.push_str(region.text);
            expected_start = region.end;
        }
        assert_eq!(rebuilt, pattern);
    }

    #[test]
    fn test_multibyte_characters() {
        assert_eq!(compact("é # ünïcödé\n [ß ü] ✓"), "é[ß ü]✓");
        assert_eq!(compact("\\\u{3000}x"), "\\\u{3000}x");
    }
}
