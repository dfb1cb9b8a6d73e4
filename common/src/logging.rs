//! Logger setup for the demo binaries

use log::LevelFilter;

/// Map a `-v` count to a level filter. `quiet` wins over any verbosity;
/// a set `RUST_LOG` overrides both once [`init`] applies it.
pub fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Off;
    }
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialise `env_logger` once per process.
///
/// `RUST_LOG`, when set, is applied on top of the level chosen from the flags.
/// Calling this twice is harmless; the second call is ignored.
pub fn init(verbosity: u8, quiet: bool) {
    let level = level_for(verbosity, quiet);

    let result = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .try_init();

    if result.is_ok() {
        log::debug!("logging initialised at {level}");
    }
}
