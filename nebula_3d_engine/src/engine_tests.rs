//! Unit tests for the Engine facade
//!
//! IMPORTANT: the logger is a global slot shared across all tests.
//! Every test here is marked with #[serial] to avoid capture interleaving.

use crate::log::{LogEntry, LogSeverity, Logger};
use crate::nebula3d::Engine;
use serial_test::serial;
use std::sync::{Arc, Mutex};

// ============================================================================
// TEST HELPERS
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<String>>>,
}

impl TestLogger {
    fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        let mut entries = self.entries.lock().unwrap();
        entries.push(format!("{:?}: {}", entry.severity, entry.message));
    }
}

// ============================================================================
// LOGGING API TESTS
// ============================================================================

#[test]
#[serial]
fn test_default_logger_logs_without_panic() {
    Engine::reset_logger();

    Engine::log(LogSeverity::Info, "test", "Info message".to_string());
    Engine::log(LogSeverity::Warn, "test", "Warning message".to_string());
    Engine::log(LogSeverity::Error, "test", "Error message".to_string());
}

#[test]
#[serial]
fn test_set_custom_logger() {
    let test_logger = TestLogger::new();
    let entries_ref = test_logger.entries.clone();
    Engine::set_logger(test_logger);

    Engine::log(LogSeverity::Info, "test", "Message 1".to_string());
    Engine::log(LogSeverity::Warn, "test", "Message 2".to_string());

    let entries = entries_ref.lock().unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries[0].contains("Info"));
    assert!(entries[0].contains("Message 1"));
    assert!(entries[1].contains("Warn"));
    assert!(entries[1].contains("Message 2"));
    drop(entries);

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_reset_logger_to_default() {
    let test_logger = TestLogger::new();
    let entries_ref = test_logger.entries.clone();
    Engine::set_logger(test_logger);

    Engine::reset_logger();

    Engine::log(LogSeverity::Info, "test", "After reset".to_string());

    // Custom logger must NOT receive messages once the default is restored
    let entries = entries_ref.lock().unwrap();
    assert_eq!(entries.len(), 0);
}

#[test]
#[serial]
fn test_log_detailed_with_file_line() {
    let test_logger = TestLogger::new();
    let entries_ref = test_logger.entries.clone();
    Engine::set_logger(test_logger);

    Engine::log_detailed(
        LogSeverity::Error,
        "nebula3d::test",
        "Detailed error".to_string(),
        "test.rs",
        42,
    );

    let entries = entries_ref.lock().unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].contains("Error"));
    assert!(entries[0].contains("Detailed error"));
    drop(entries);

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_all_severities_reach_logger() {
    let test_logger = TestLogger::new();
    let entries_ref = test_logger.entries.clone();
    Engine::set_logger(test_logger);

    Engine::log(LogSeverity::Trace, "test", "Trace".to_string());
    Engine::log(LogSeverity::Debug, "test", "Debug".to_string());
    Engine::log(LogSeverity::Info, "test", "Info".to_string());
    Engine::log(LogSeverity::Warn, "test", "Warn".to_string());
    Engine::log(LogSeverity::Error, "test", "Error".to_string());
    Engine::log(LogSeverity::Critical, "test", "Critical".to_string());

    let entries = entries_ref.lock().unwrap();
    assert_eq!(entries.len(), 6);
    drop(entries);

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_logging_macros_route_through_engine() {
    let test_logger = TestLogger::new();
    let entries_ref = test_logger.entries.clone();
    Engine::set_logger(test_logger);

    crate::engine_info!("nebula3d::test", "frame {}", 7);
    crate::engine_error!("nebula3d::test", "lost {} buffers", 2);

    let entries = entries_ref.lock().unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries[0].contains("frame 7"));
    assert!(entries[1].contains("lost 2 buffers"));
    drop(entries);

    Engine::reset_logger();
}

// ============================================================================
// VERSION
// ============================================================================

#[test]
fn test_version_is_nonempty() {
    assert!(!Engine::VERSION.is_empty());
}
