// xregex-core/src/lib.rs
//! # xregex Core Library
//!
//! `xregex-core` translates *extended* regular expressions, which may contain
//! `#` comments and free whitespace for readability, into the compact form a
//! conventional engine expects, and builds a matcher from the result.
//!
//! ## Modules
//!
//! * `translator`: the extended-to-compact translation and `translate`, which also builds the matcher.
//! * `flags`: parses flag strings (`gimsu`) for the engine adapter.
//! * `matcher`: `CompiledMatcher`, a `regex::Regex` plus the compact source and flags it came from.
//! * `cache`: a process-wide cache of compiled matchers.
//! * `config`: YAML pattern files of named extended patterns.
//! * `headless`: one-shot helpers returning serialisable match records.
//! * `errors`: the library error type.
//!
//! ## Usage Example
//!
//! ```rust
//! use xregex_core::{translate, translate_pattern};
//!
//! let extended = r"
//!     ^ \[ (?<section> [^\] ]+ ) \]    # [section]
//! ";
//! assert_eq!(translate_pattern(extended), r"^\[(?<section>[^\] ]+)\]");
//!
//! let matcher = translate(extended, "m").unwrap();
//! assert_eq!(&matcher.captures("[core]").unwrap()["section"], "core");
//! ```
//!
//! ## Error Handling
//!
//! Translation is total. Building the matcher can fail, either because the
//! compact text is not a valid pattern or because the flags are not accepted;
//! both surface as [`XRegexError`] with the engine's error as the source.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod cache;
pub mod config;
pub mod errors;
pub mod flags;
pub mod headless;
pub mod matcher;
pub mod translator;

/// Re-exports the translation entry points.
pub use translator::{explain, translate, translate_pattern, TranslationReport};

/// Re-exports the matcher and its flags.
pub use flags::MatcherFlags;
pub use matcher::CompiledMatcher;

/// Re-exports the custom error type for clear error reporting.
pub use errors::XRegexError;

pub use cache::{clear_cache, get_or_translate};

/// Re-exports pattern-file types and functions.
pub use config::{
    compile_patterns,
    config_candidate_paths,
    load_default_config,
    CompiledPattern,
    CompiledPatterns,
    PatternConfig,
    PatternEntry,
    MAX_PATTERN_LENGTH,
};

pub use headless::{collect_captures, extract_captures, CaptureRecord};

/// Region types from the scanner, for callers that want the raw classification.
pub use xregex_scan::{Region, RegionKind, RegionScanner};
