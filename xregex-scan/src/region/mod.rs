// xregex-scan/src/region/mod.rs
use core::fmt;

/// Classification of one span of an extended pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    /// `[...]`, brackets included. Copied verbatim.
    CharacterClass,
    /// Unescaped `#` up to the next line terminator. Removed.
    Comment,
    /// Run of unescaped whitespace. Removed.
    Whitespace,
    /// Everything else, escapes included. Copied verbatim.
    PassThrough,
}

impl RegionKind {
    /// Returns `true` if regions of this kind are dropped from the compact pattern.
    pub fn is_stripped(self) -> bool {
        matches!(self, RegionKind::Comment | RegionKind::Whitespace)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RegionKind::CharacterClass => "character-class",
            RegionKind::Comment => "comment",
            RegionKind::Whitespace => "whitespace",
            RegionKind::PassThrough => "pass-through",
        }
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A maximal classified span of the input. Offsets are byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region<'a> {
    pub kind: RegionKind,
    pub start: usize,
    pub end: usize,
    pub text: &'a str,
}

impl<'a> Region<'a> {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The text this region contributes to the compact pattern.
    pub fn output(&self) -> &'a str {
        if self.kind.is_stripped() {
            ""
        } else {
            self.text
        }
    }
}
