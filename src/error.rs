//! Unified error types for quantumleap
//!
//! The launcher itself cannot fail after argument parsing; everything
//! here describes failures surfaced by the application's run. Uses
//! thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Failure reported by the application run
    #[error("{0}")]
    Runtime(String),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Wrap an arbitrary message as a runtime failure
    pub fn runtime(message: impl Into<String>) -> Self {
        AppError::Runtime(message.into())
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
