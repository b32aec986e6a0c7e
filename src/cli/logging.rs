use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Pick the log level: each `-v` raises it one step above warn, otherwise
/// the configured level applies.
pub fn resolve_level(verbose: u8, configured: LevelFilter) -> LevelFilter {
    match verbose {
        0 => configured,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize logging to stderr with the given level.
pub fn init_logging(level: LevelFilter) {
    // Only fails if a logger is already installed
    let _ = SimpleLogger::new()
        .with_level(level)
        .without_timestamps()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_level() {
        assert_eq!(resolve_level(0, LevelFilter::Error), LevelFilter::Error);
        assert_eq!(resolve_level(1, LevelFilter::Error), LevelFilter::Info);
        assert_eq!(resolve_level(2, LevelFilter::Warn), LevelFilter::Debug);
        assert_eq!(resolve_level(5, LevelFilter::Warn), LevelFilter::Trace);
    }
}
