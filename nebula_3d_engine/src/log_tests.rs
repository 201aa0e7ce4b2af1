//! Unit tests for logging types

use super::*;

// ============================================================================
// Severity ordering
// ============================================================================

#[test]
fn test_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
    assert!(LogSeverity::Error < LogSeverity::Critical);
}

#[test]
fn test_severity_equality() {
    assert_eq!(LogSeverity::Info, LogSeverity::Info);
    assert_ne!(LogSeverity::Info, LogSeverity::Warn);
}

// ============================================================================
// LogEntry
// ============================================================================

#[test]
fn test_log_entry_clone_preserves_fields() {
    let entry = LogEntry {
        severity: LogSeverity::Error,
        timestamp: std::time::SystemTime::now(),
        source: "nebula3d::test".to_string(),
        message: "boom".to_string(),
        file: Some("camera.rs"),
        line: Some(12),
    };

    let cloned = entry.clone();
    assert_eq!(cloned.severity, LogSeverity::Error);
    assert_eq!(cloned.source, "nebula3d::test");
    assert_eq!(cloned.message, "boom");
    assert_eq!(cloned.file, Some("camera.rs"));
    assert_eq!(cloned.line, Some(12));
}

// ============================================================================
// DefaultLogger
// ============================================================================

#[test]
fn test_default_logger_handles_plain_entry() {
    let entry = LogEntry {
        severity: LogSeverity::Info,
        timestamp: std::time::SystemTime::now(),
        source: "nebula3d::test".to_string(),
        message: "plain".to_string(),
        file: None,
        line: None,
    };

    // Must not panic for any severity, with or without file:line
    DefaultLogger.log(&entry);
}

#[test]
fn test_default_logger_handles_detailed_entry() {
    let entry = LogEntry {
        severity: LogSeverity::Critical,
        timestamp: std::time::SystemTime::now(),
        source: "nebula3d::Window".to_string(),
        message: "cannot create window".to_string(),
        file: Some("window.rs"),
        line: Some(40),
    };

    DefaultLogger.log(&entry);
}
