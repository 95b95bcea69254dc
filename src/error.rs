//! Error types for sdk-bootstrap operations.
//!
//! This module defines [`BootstrapError`], the primary error type used
//! throughout the tool, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A missing or mismatched SDK is not an error; it is reported through
//!   [`crate::sdk::SdkStatus`] and handled by prompting the user
//! - Network, filesystem, and archive failures use `BootstrapError` and
//!   propagate to `main`, which prints them and exits non-zero
//! - Use `anyhow::Error` (via `BootstrapError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for sdk-bootstrap operations.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Configuration file not found at an explicitly given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A configuration file parsed but holds unusable values.
    #[error("Invalid configuration at {path}: {message}")]
    ConfigValidationError { path: PathBuf, message: String },

    /// A download failed (DNS, timeout, non-success HTTP status).
    #[error("Failed to download {url}: {message}")]
    Download { url: String, message: String },

    /// A downloaded archive could not be read or extracted.
    #[error("Failed to extract archive from {url}: {message}")]
    Archive { url: String, message: String },

    /// A downloaded artifact did not match its configured digest.
    #[error("Checksum mismatch for {url}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        url: String,
        expected: String,
        actual: String,
    },

    /// An operation needs an SDK root but none was located.
    #[error("No {sdk} root located (set {env_var} or pass --sdk-root)")]
    SdkNotLocated { sdk: String, env_var: String },

    /// A non-interactive prompt override held something other than yes/no.
    #[error("Cannot answer prompt '{key}' in non-interactive mode (override is not yes or no)")]
    PromptUnavailable { key: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for sdk-bootstrap operations.
pub type Result<T> = std::result::Result<T, BootstrapError>;
