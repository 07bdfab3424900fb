use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// `log` backend that writes to the browser console.
///
/// The last segment of the record target is used as the component name, so a
/// record from `ledger_frontend::services::api` prints as `[DEBUG api] ...`.
pub struct Logger;

static LOGGER: Logger = Logger;

impl Logger {
    pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_logger(&LOGGER)?;
        log::set_max_level(level);
        Ok(())
    }

    fn format(level: Level, target: &str, message: &str) -> String {
        format!("[{} {}] {}", level, component(target), message)
    }
}

fn component(target: &str) -> &str {
    target.rsplit("::").next().unwrap_or(target)
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = Self::format(record.level(), record.target(), &record.args().to_string());
        match record.level() {
            Level::Error => gloo::console::error!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Info => gloo::console::info!(line),
            Level::Debug | Level::Trace => gloo::console::debug!(line),
        }
    }

    fn flush(&self) {}
}
