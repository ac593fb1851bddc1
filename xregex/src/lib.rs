// xregex/src/lib.rs
//! # xregex CLI Application
//!
//! Command-line front end for `xregex-core`: translate extended patterns,
//! explain how they were split, run them over input, and check pattern files.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

