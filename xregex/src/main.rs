// xregex/src/main.rs
//! xregex entry point.
//!
//! Exit codes: 0 on success, 1 when `match` finds nothing or `check` finds a
//! broken pattern, 2 on any error.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use log::debug;

use xregex::cli::{Cli, Commands};
use xregex::commands::{check, matching, translate};
use xregex::logger;
use xregex::ui::output_format::{error_msg, info_msg};

fn run(cli: Cli) -> Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let code = match cli.command {
        Commands::Translate(input) => {
            let pattern = translate::load_pattern(&input)?;
            translate::run_translate(&pattern, &mut out)?;
            ExitCode::SUCCESS
        }
        Commands::Explain(input) => {
            let pattern = translate::load_pattern(&input)?;
            translate::run_explain(&pattern, &mut out)?;
            ExitCode::SUCCESS
        }
        Commands::Match(cmd) => {
            let found = matching::run_match(&cmd, &mut out)?;
            if found == 0 {
                if !cli.quiet {
                    info_msg("No matches.");
                }
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Commands::Check(cmd) => {
            let summary = check::run_check(&cmd, &mut out)?;
            if summary.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
    };

    out.flush()?;
    Ok(code)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug));
    debug!("Parsed command line: {:?}", cli.command);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error_msg(format!("{:#}", e));
            ExitCode::from(2)
        }
    }
}
