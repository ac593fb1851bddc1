//! Terminal output helpers for the xregex CLI.

pub mod output_format;
pub mod region_table;
