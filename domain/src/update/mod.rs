//! Update tracks and decisions.
//!
//! - [`artifact::ArtifactKind`] - the two independently versioned bundles
//! - [`decision::UpdateDecision`] - whether a configuration release is newer
//! - [`track::TrackState`] / [`track::TrackOutcome`] - per-track progress and result

pub mod artifact;
pub mod decision;
pub mod track;
