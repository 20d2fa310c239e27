//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod artifact_installer;
pub mod release_feed;
pub mod update_progress;
pub mod version_store;
