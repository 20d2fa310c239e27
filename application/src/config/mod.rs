//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`UpdaterConfig`] - paths, filenames and asset names for both tracks
//! - [`BehaviorConfig`] - adapter runtime behavior (timeouts)

pub mod behavior;
pub mod updater_config;

pub use behavior::BehaviorConfig;
pub use updater_config::{ArtifactLayout, ConfigError, UpdaterConfig};
