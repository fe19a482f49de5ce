use log::LevelFilter;

/// Level picked from `-v`/`-q` counts.
pub fn level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Warn;
    }
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the process logger. Diagnostics go to stdout; `RUST_LOG`, when
/// set, overrides the level from the flags.
pub fn init(verbose: u8, quiet: bool) {
    let default_filter = level(verbose, quiet).to_string().to_lowercase();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stdout)
        .format_timestamp(None)
        .init();
}
