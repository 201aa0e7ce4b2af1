//! Engine facade — global logger management
//!
//! The only process-wide state the engine keeps is the logger: every other
//! subsystem (window, device, input, camera) is an owned value threaded
//! through the [`Application`](crate::application::Application) explicitly.

use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;

/// Global logger (initialized with DefaultLogger on first use)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Engine facade
///
/// Owns the global logger slot used by the `engine_*!` macros and exposes
/// the engine version string.
///
/// # Example
///
/// ```
/// use nebula_3d_engine::nebula3d::Engine;
/// use nebula_3d_engine::nebula3d::log::LogSeverity;
///
/// Engine::log(LogSeverity::Info, "nebula3d::Demo", "hello".to_string());
/// ```
pub struct Engine;

impl Engine {
    /// Engine version string (from the crate manifest)
    pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");

    fn logger() -> &'static RwLock<Box<dyn Logger>> {
        LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
    }

    /// Install a custom logger
    ///
    /// Replaces the default logger with a custom implementation
    /// (file logger, capture logger for tests, etc.).
    ///
    /// # Example
    ///
    /// ```
    /// use nebula_3d_engine::nebula3d::Engine;
    /// use nebula_3d_engine::nebula3d::log::{LogEntry, Logger};
    ///
    /// struct NullLogger;
    /// impl Logger for NullLogger {
    ///     fn log(&self, _entry: &LogEntry) {}
    /// }
    ///
    /// Engine::set_logger(NullLogger);
    /// Engine::reset_logger();
    /// ```
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = Self::logger().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset the logger to the default console logger
    pub fn reset_logger() {
        if let Ok(mut lock) = Self::logger().write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Log a message without source-location details
    ///
    /// Used by the `engine_trace!`/`engine_debug!`/`engine_info!`/
    /// `engine_warn!` macros.
    ///
    /// # Arguments
    ///
    /// * `severity` - Log severity level
    /// * `source` - Source module (e.g., "nebula3d::Application")
    /// * `message` - Log message
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if let Ok(lock) = Self::logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Log a message with file:line information
    ///
    /// Used by the `engine_error!` and `engine_critical!` macros.
    ///
    /// # Arguments
    ///
    /// * `severity` - Log severity level (typically Error or Critical)
    /// * `source` - Source module
    /// * `message` - Log message
    /// * `file` - Source file path
    /// * `line` - Source line number
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if let Ok(lock) = Self::logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
