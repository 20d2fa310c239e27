//! Infrastructure layer for wanxiang-update
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod feed;
pub mod installer;
pub mod store;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigLoader, FileConfig, Severity};
pub use feed::GitHubReleaseFeed;
pub use installer::{DownloadMethod, ExternalToolInstaller};
pub use store::FileVersionStore;
