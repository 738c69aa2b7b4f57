//! Logger setup for workergen.

/// Initializes the global logger.
///
/// Informational lines (created directories and files) are always shown;
/// `verbose` adds the debug output such as the full source listing.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .init();
}
