// xregex/src/logger.rs
//! Logger setup for the xregex binary and its tests.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Installs `env_logger`.
///
/// With `Some(level)` the level applies to every module and `RUST_LOG` is
/// ignored. With `None`, `RUST_LOG` decides and defaults to `warn`. Calling it
/// again after a logger is installed is a no-op.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = match level {
        Some(level) => {
            let mut builder = Builder::new();
            builder.filter_level(level);
            builder
        }
        None => Builder::from_env(Env::default().default_filter_or("warn")),
    };

    builder.format_timestamp(None).target(env_logger::Target::Stderr);

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized (requested level: {:?}).", level);
    }
}

/// Maps the global CLI switches onto a level. `--quiet` wins over `--debug`.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
