use std::sync::OnceLock;

use log::{Level, LevelFilter, Log, Metadata, Record};

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// `log` backend that writes `[level] message` lines to stderr.
pub struct Logger {
    level: LevelFilter,
}

impl Logger {
    /// Installs the logger. `debug` lowers the threshold from `Warn` to
    /// `Debug`. Later calls keep the first configuration.
    pub fn init(debug: bool) {
        let level = if debug { LevelFilter::Debug } else { LevelFilter::Warn };
        let logger = LOGGER.get_or_init(|| Logger { level });

        if log::set_logger(logger).is_ok() {
            log::set_max_level(logger.level);
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = match record.level() {
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Trace => "trace",
        };
        eprintln!("[{level}] {}", record.args());
    }

    fn flush(&self) {}
}
