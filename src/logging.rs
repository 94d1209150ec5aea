#![cfg(feature = "std")]

use log::{LevelFilter, Log, Metadata, Record};
use std::env;
use std::io::Write;

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "BROADSIDE_LOG";

/// Writes to stderr so the JSON printed by `bench` and `sim` stays clean.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // strategies tag their messages; keep the module path for the rest
        let target = record.target().trim_start_matches("broadside::");
        let _ = writeln!(
            std::io::stderr().lock(),
            "{:<5} [{}] {}",
            record.level(),
            target,
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a level such as `debug`, falling back to `info`.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the logger at `level`. Later calls only adjust the level.
pub fn init_logging_at(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

/// Install the logger with the level from `BROADSIDE_LOG`, `info` if unset or invalid.
pub fn init_logging() {
    init_logging_at(level_from(env::var(LOG_ENV).ok().as_deref()));
}
