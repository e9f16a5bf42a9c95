//! Logger setup. Runs once, before anything else logs.

use log::LevelFilter;

/// Map the number of `-v` flags to a level.
pub fn level(verbose: u64) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// `RUST_LOG` still wins over the command line.
pub fn init(verbose: u64) {
    env_logger::Builder::new()
        .filter_level(level(verbose))
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
