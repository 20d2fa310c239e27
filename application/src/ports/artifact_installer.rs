//! Artifact installer port
//!
//! Download, extraction and merge-copy primitives. The use case only
//! sequences these; adapters decide whether they shell out to external tools
//! or do the work natively.

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Errors raised by installer primitives
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstallerError {
    /// The external tool is not installed.
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// The tool ran but reported failure, or could not be started.
    #[error("{tool} failed: {message}")]
    ToolInvocation { tool: String, message: String },

    /// A local filesystem operation failed.
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },
}

impl InstallerError {
    pub fn io(path: &Path, err: impl std::fmt::Display) -> Self {
        InstallerError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

/// Capability interface for moving an artifact from the feed into place.
#[async_trait]
pub trait ArtifactInstallerPort: Send + Sync {
    /// Download `url` to `dest`, creating the parent directory if needed.
    async fn fetch(&self, url: &str, dest: &Path) -> Result<(), InstallerError>;

    /// Expand `archive` into `dest_dir`. Leftovers from an earlier run in
    /// `dest_dir` are removed first.
    async fn extract(&self, archive: &Path, dest_dir: &Path) -> Result<(), InstallerError>;

    /// Recursively copy the contents of `src_dir` into `dest_dir`,
    /// overwriting files with the same relative path. Returns the number of
    /// files copied.
    async fn merge_copy(&self, src_dir: &Path, dest_dir: &Path) -> Result<usize, InstallerError>;
}
