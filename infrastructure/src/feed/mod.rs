//! Release feed adapters.
//!
//! Provides the infrastructure implementation of
//! [`ReleaseFeedPort`](wanxiang_application::ReleaseFeedPort) backed by the
//! GitHub releases REST API.

mod github;

pub use github::{DEFAULT_API_BASE, DEFAULT_REPOSITORY, GitHubReleaseFeed};
