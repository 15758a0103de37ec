use log::{LevelFilter, Log, Metadata, Record};
use std::env;

/// Logger writing to stderr so log lines stay apart from the boards on stdout.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let target = record.target().trim_start_matches("seabattle::");
            eprintln!("{:<5} {}: {}", record.level(), target, record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Initialize logging with a level taken from the `SEABATTLE_LOG` environment
/// variable (`off`, `error`, `warn`, `info`, `debug`, `trace`). Defaults to `warn`.
/// Calling it twice keeps the first setup.
pub fn init_logging() {
    let level = env::var("SEABATTLE_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
