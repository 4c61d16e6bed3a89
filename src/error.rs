//! Error types for stepseq operations.
//!
//! This module defines [`StepseqError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration problems surface as `Err` before any step runs
//! - Step failures (bad working directory, failing command) are folded into
//!   the sequence result and never abort the process with an `Err`
//! - Use `anyhow::Error` (via `StepseqError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for stepseq operations.
#[derive(Debug, Error)]
pub enum StepseqError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A step's working directory does not exist or is not a directory.
    #[error("Invalid working directory: '{}'", path.display())]
    InvalidWorkingDirectory { path: PathBuf },

    /// Shell command could not be spawned or exited non-zero.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// A step in the sequence failed.
    #[error("Step {index} '{name}' failed: {message}")]
    StepFailed {
        index: usize,
        name: String,
        message: String,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for stepseq operations.
pub type Result<T> = std::result::Result<T, StepseqError>;
