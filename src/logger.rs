//! Logger configuration.
//! Verbose mode surfaces the per-file debug trace of the engine (copies,
//! substitutions, renames, patches); the default level only shows warnings
//! and the occasional informational message.

pub fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new().filter_level(level).init();
}
