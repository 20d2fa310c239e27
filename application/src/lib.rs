//! Application layer for wanxiang-update
//!
//! This crate contains the update use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ArtifactLayout, BehaviorConfig, ConfigError, UpdaterConfig};
pub use ports::{
    artifact_installer::{ArtifactInstallerPort, InstallerError},
    release_feed::{FeedError, ReleaseFeedPort},
    update_progress::{NoUpdateProgress, UpdateProgressNotifier},
    version_store::{LocalStateError, VersionStorePort},
};
pub use use_cases::run_update::{
    RunUpdateError, RunUpdateInput, RunUpdateOutput, RunUpdateUseCase, TrackError, TrackReport,
};
