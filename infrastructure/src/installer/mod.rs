//! Artifact installer adapters.
//!
//! [`ExternalToolInstaller`] implements
//! [`ArtifactInstallerPort`](wanxiang_application::ArtifactInstallerPort):
//! downloads with `wget` (or a built-in HTTP client), extracts with `7z`, and
//! merges the extracted tree into place natively.

mod download;
mod external;
mod merge;

pub use external::{DownloadMethod, ExternalToolInstaller};
pub use merge::merge_dir;
