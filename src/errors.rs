//! Cluster Metadata Synchronization Error Hierarchy
//!
//! Defines error types for the coordination-store access layer and the
//! startup/configuration path, categorized by operational concern.

use std::time::Duration;

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Coordination store access failures (watch, persist, delete)
    #[error(transparent)]
    Coordination(#[from] CoordinationError),

    /// Configuration loading failures
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    /// Configuration validation failures
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Unrecoverable failures requiring process termination
    #[error("Fatal error: {0}")]
    Fatal(String),
}

/// Failures raised by a coordination repository implementation.
///
/// The dispatch and lifecycle layers introduce no error type of their own;
/// a handler surfaces whatever the repository call returned.
#[derive(Debug, thiserror::Error)]
pub enum CoordinationError {
    /// Store endpoint unavailable (connection loss, session expiry)
    #[error("Coordination store unavailable: {0}")]
    Unavailable(String),

    /// Store operation timeout
    #[error("Operation on {path} timed out after {duration:?}")]
    Timeout { path: String, duration: Duration },

    /// Watch delivery target is gone
    #[error("Watch listener closed for path {path}")]
    ListenerClosed { path: String },

    /// Malformed hierarchical key
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}
