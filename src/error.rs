//! Error types for toolvers operations.
//!
//! This module defines [`ToolversError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `ToolversError` for domain errors callers may want to match on
//! - Use `anyhow::Error` (via `ToolversError::Other`) for glue code such as
//!   site assembly, where only the message matters
//! - Nothing is retried: a failed command or fetch aborts the run

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for toolvers operations.
#[derive(Debug, Error)]
pub enum ToolversError {
    /// The running or requested operating system has no query handler.
    #[error("Unknown operating system: {name}")]
    UnknownOs { name: String },

    /// A shell command could not be spawned or exited non-zero.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Package manager output did not have the expected shape.
    #[error("Failed to parse {format} output: {message}")]
    Parse { format: String, message: String },

    /// An upstream page no longer contains the markup we scrape.
    #[error("No supported versions found for {package} at {url}; the page layout probably changed")]
    UpstreamStructure { package: String, url: String },

    /// An HTTP request failed or returned a non-success status.
    #[error("HTTP request for {url} failed: {message}")]
    Http { url: String, message: String },

    /// Failed to load or parse a configuration file.
    #[error("Invalid configuration in {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON report (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for toolvers operations.
pub type Result<T> = std::result::Result<T, ToolversError>;
