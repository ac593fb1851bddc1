// xregex-scan/src/charset/mod.rs

/// Byte-order mark. Counted as whitespace by ECMAScript-style `\s`, but not by
/// Unicode `White_Space`.
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Returns `true` for characters that form a strippable whitespace run.
///
/// This is the `\s` set of ECMAScript-style dialects: Unicode `White_Space`
/// plus the byte-order mark.
pub fn is_pattern_whitespace(c: char) -> bool {
    c.is_whitespace() || c == BYTE_ORDER_MARK
}

/// Returns `true` for characters that terminate a comment.
pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Checks whether the character starting at `byte_index` is escaped.
///
/// A character is escaped when the run of backslashes immediately before it
/// has odd length. `\\#` leaves the `#` unescaped; `\\\#` escapes it.
pub fn is_escaped(text: &str, byte_index: usize) -> bool {
    let end = byte_index.min(text.len());
    let run = text.as_bytes()[..end]
        .iter()
        .rev()
        .take_while(|&&b| b == b'\\')
        .count();
    run % 2 == 1
}
