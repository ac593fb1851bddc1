// xregex-scan/src/lib.rs
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod charset;
pub mod region;
pub mod scanner;

pub use charset::{is_escaped, is_line_terminator, is_pattern_whitespace};
pub use region::{Region, RegionKind};
pub use scanner::{compact, RegionScanner};
