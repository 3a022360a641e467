//! Console Logger
//!
//! `log` backend for the browser. Records go to `console.error`/`warn`/
//! `info`/`debug` on wasm32 and to stderr on native targets (tests).

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Logger writing every enabled record to the console
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

/// Install a `ConsoleLogger` as the global logger
///
/// Fails if another logger was installed first.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}

/// Parse a level name from configuration ("error", "warn", "info", ...)
///
/// Unknown names fall back to `Info`.
pub fn parse_level(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Render a record as a single console line
pub fn format_record(level: Level, target: &str, message: &str) -> String {
    format!("{:<5} {}: {}", level, target, message)
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record.level(), record.target(), &record.args().to_string());
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::info_1(&value),
        Level::Debug | Level::Trace => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("error"), LevelFilter::Error);
        assert_eq!(parse_level(" DEBUG "), LevelFilter::Debug);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("loud"), LevelFilter::Info);
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = ConsoleLogger::new(LevelFilter::Warn);
        let error = Metadata::builder().level(Level::Error).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(logger.enabled(&error));
        assert!(!logger.enabled(&debug));
    }

    #[test]
    fn test_format_record() {
        let line = format_record(Level::Error, "bookstore_ui::search", "Fetch error: HTTP 500");
        assert_eq!(line, "ERROR bookstore_ui::search: Fetch error: HTTP 500");
        let line = format_record(Level::Info, "app", "ready");
        assert_eq!(line, "INFO  app: ready");
    }
}
