//! Implementations of the xregex subcommands.

pub mod check;
pub mod matching;
pub mod translate;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Reads a whole file, or stdin when no path is given.
pub fn read_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}
