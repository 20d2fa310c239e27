//! Domain layer for wanxiang-update
//!
//! This crate contains the version ordering, release selection rules and
//! update-track entities. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Tracks
//!
//! Two artifact bundles are published on the same release feed and are
//! updated independently:
//!
//! - **Configuration**: installed only when the feed holds a strictly newer
//!   version than the local marker file records
//! - **Dictionary**: always refreshed from the rolling `dict-nightly` tag

pub mod core;
pub mod release;
pub mod update;
pub mod version;

// Re-export commonly used types
pub use core::error::DomainError;
pub use release::{
    entities::{AssetDescriptor, ReleaseRecord},
    selector::{NIGHTLY_TAG, ReleaseSelector},
};
pub use update::{
    artifact::ArtifactKind,
    decision::UpdateDecision,
    track::{TrackOutcome, TrackState},
};
pub use version::{VersionIdentifier, compare_versions};
