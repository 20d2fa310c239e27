//! Version store port
//!
//! Reads and writes the marker file recording the installed configuration
//! version.

use thiserror::Error;
use wanxiang_domain::VersionIdentifier;

/// The marker file could not be used
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocalStateError {
    #[error("Version marker {0} does not exist")]
    Missing(String),

    #[error("Version marker {0} is empty")]
    Empty(String),

    #[error("Failed to read version marker {path}: {message}")]
    Unreadable { path: String, message: String },

    #[error("Failed to write version marker {path}: {message}")]
    WriteFailed { path: String, message: String },
}

/// Persisted record of the installed configuration version.
pub trait VersionStorePort: Send + Sync {
    /// Current installed version, trimmed.
    fn read(&self) -> Result<VersionIdentifier, LocalStateError>;

    /// Atomically replace the recorded version.
    fn write(&self, version: &VersionIdentifier) -> Result<(), LocalStateError>;
}
