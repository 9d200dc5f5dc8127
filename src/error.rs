//! Error types for setupcheck operations.
//!
//! This module defines [`SetupError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `SetupError` for failures that stop a check before it starts
//!   (missing or malformed specification documents)
//! - Validation findings are data ([`EnvError`](crate::env::EnvError),
//!   [`PathError`](crate::paths::PathError)) and are never returned as `Err`
//!   from a validation pass
//! - Use `anyhow::Error` (via `SetupError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for setupcheck operations.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Specification document not found at the given location.
    #[error("Specification not found: {path}")]
    SpecNotFound { path: PathBuf },

    /// Specification document is not valid YAML or does not deserialize.
    #[error("Failed to parse specification at {path}: {message}")]
    SpecParseError { path: PathBuf, message: String },

    /// Specification document does not match the embedded schema.
    #[error("Invalid specification at {path}:\n{}", .violations.join("\n"))]
    SchemaViolation {
        path: PathBuf,
        violations: Vec<String>,
    },

    /// The embedded schema failed to compile.
    #[error("Embedded schema is invalid: {message}")]
    SchemaBuildError { message: String },

    /// Environment variable type name is not recognised.
    #[error("Unknown environment variable type: '{name}'")]
    UnknownEnvType { name: String },

    /// A completed validation pass found errors.
    #[error("Setup validation failed with {env_errors} environment error(s) and {path_errors} path error(s)")]
    ValidationFailed {
        env_errors: usize,
        path_errors: usize,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for setupcheck operations.
pub type Result<T> = std::result::Result<T, SetupError>;
