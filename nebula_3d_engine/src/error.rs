//! Error types for the Nebula3D engine
//!
//! This module defines the error types used throughout the engine,
//! covering window creation, shader compilation, and resource management.

use std::fmt;

/// Result type for Nebula3D engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Nebula3D engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Window or event loop could not be created
    WindowCreationFailed(String),

    /// Shader source failed to compile or link
    ShaderCompilationFailed(String),

    /// Invalid resource (buffer, vertex array, texture, etc.)
    InvalidResource(String),

    /// Initialization failed (engine, device, subsystems)
    InitializationFailed(String),

    /// Backend-specific error
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WindowCreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
            Error::ShaderCompilationFailed(msg) => write!(f, "Shader compilation failed: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Build an [`InvalidResource`](crate::nebula3d::Error::InvalidResource) error
/// and log it through the engine logger with file:line information.
///
/// # Example
///
/// ```
/// use nebula_3d_engine::engine_err;
///
/// let error = engine_err!("nebula3d::Demo", "mesh '{}' not found", "cube");
/// assert!(error.to_string().contains("cube"));
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::nebula3d::Engine::log_detailed(
            $crate::nebula3d::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!(),
        );
        $crate::nebula3d::Error::InvalidResource(message)
    }};
}

/// Log an error through the engine logger and return it from the enclosing
/// function. Shorthand for `return Err(engine_err!(...))`.
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
