//! Update progress port
//!
//! Defines the interface for reporting track progress during an update run.

use crate::use_cases::run_update::TrackError;
use wanxiang_domain::{ArtifactKind, TrackOutcome, TrackState};

/// Callback for progress updates during an update run
///
/// Implementations live in the presentation layer. All methods default to
/// no-ops so implementors only override what they display.
pub trait UpdateProgressNotifier: Send + Sync {
    /// Called before the feed is queried, with the number of enabled tracks
    fn on_run_start(&self, _tracks: usize) {}

    /// Called when a track moves to a new state
    fn on_state_change(&self, _kind: ArtifactKind, _state: TrackState) {}

    /// Called when a track finishes without error
    fn on_track_complete(&self, _kind: ArtifactKind, _outcome: &TrackOutcome) {}

    /// Called when a track fails
    fn on_track_failed(&self, _kind: ArtifactKind, _error: &TrackError) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoUpdateProgress;

impl UpdateProgressNotifier for NoUpdateProgress {}
