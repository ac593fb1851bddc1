//! This file defines the command-line interface (CLI) for the xregex
//! application, including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{ArgGroup, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "xregex",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Write regular expressions with comments and whitespace",
    long_about = "xregex translates extended regular expressions, which may contain `#` comments and free whitespace, into compact patterns for a standard regex engine. Whitespace and `#` inside [character classes] are kept; escape them with a backslash to keep them elsewhere.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable all logging output.
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `xregex` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prints the compact form of an extended pattern.
    #[command(about = "Print the compact form of an extended pattern.")]
    Translate(PatternInput),

    /// Shows how an extended pattern is split into regions.
    #[command(about = "Show how an extended pattern is split into kept and stripped regions.")]
    Explain(PatternInput),

    /// Runs a pattern over input text and prints each match.
    #[command(name = "match", about = "Run a pattern over input text and print every match with its named groups.")]
    Match(MatchCommand),

    /// Compiles every pattern of a pattern file.
    #[command(about = "Compile every pattern in a pattern file and report failures.")]
    Check(CheckCommand),
}

/// Where an extended pattern is read from. Falls back to stdin.
#[derive(Args, Debug, Clone)]
pub struct PatternInput {
    /// The extended pattern, inline.
    #[arg(long, short = 'p', value_name = "PATTERN", conflicts_with = "input_file", help = "The extended pattern, given inline.")]
    pub pattern: Option<String>,

    /// Read the extended pattern from a file (reads from stdin if neither is given).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read the extended pattern from a file instead of stdin.")]
    pub input_file: Option<PathBuf>,
}

/// Arguments for the `match` command. Exactly one pattern source is required.
#[derive(Args, Debug, Clone)]
#[command(group(ArgGroup::new("source").required(true).args(["pattern", "pattern_file", "name"])))]
pub struct MatchCommand {
    /// The extended pattern, inline.
    #[arg(long, short = 'p', value_name = "PATTERN", help = "The extended pattern, given inline.")]
    pub pattern: Option<String>,

    /// Read the extended pattern from a file.
    #[arg(long = "pattern-file", value_name = "FILE", help = "Read the extended pattern from a file.")]
    pub pattern_file: Option<PathBuf>,

    /// Use a named pattern from a pattern file.
    #[arg(long, short = 'n', value_name = "NAME", help = "Use a named pattern from a pattern file.")]
    pub name: Option<String>,

    /// Pattern file to look `--name` up in.
    #[arg(long = "config", value_name = "FILE", requires = "name", help = "Pattern file (YAML) to look the name up in. Defaults to xregex.yaml in the usual locations.")]
    pub config: Option<PathBuf>,

    /// Matcher flags. Defaults to the entry's flags with `--name`, otherwise `g`.
    #[arg(long, short = 'f', value_name = "FLAGS", help = "Matcher flags (g, i, m, s, u).")]
    pub flags: Option<String>,

    /// Input text to search (reads from stdin if not provided).
    #[arg(long = "input-file", short = 'i', value_name = "FILE", help = "Read the text to search from a file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Print matches as JSON.
    #[arg(long, help = "Print matches as a JSON array.")]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Args, Debug, Clone)]
pub struct CheckCommand {
    /// Path to a pattern file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a pattern file (YAML). Defaults to xregex.yaml in the usual locations.")]
    pub config: Option<PathBuf>,
}
