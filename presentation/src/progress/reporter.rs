//! Progress reporting for update runs

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use wanxiang_application::{TrackError, UpdateProgressNotifier};
use wanxiang_domain::{ArtifactKind, TrackOutcome, TrackState};

/// Reports progress with one spinner per track
pub struct ProgressReporter {
    multi: MultiProgress,
    bars: Mutex<HashMap<ArtifactKind, ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            bars: Mutex::new(HashMap::new()),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap()
    }

    fn bar(&self, kind: ArtifactKind) -> ProgressBar {
        let mut bars = self.bars.lock().unwrap();
        bars.entry(kind)
            .or_insert_with(|| {
                let pb = self.multi.add(ProgressBar::new_spinner());
                pb.set_style(Self::spinner_style());
                pb.set_prefix(format!("{:<14}", kind.as_str()));
                pb.enable_steady_tick(Duration::from_millis(100));
                pb
            })
            .clone()
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateProgressNotifier for ProgressReporter {
    fn on_state_change(&self, kind: ArtifactKind, state: TrackState) {
        let bar = self.bar(kind);
        if state.is_terminal() {
            bar.set_message(state.to_string());
        } else {
            bar.set_message(format!("{}...", state));
        }
    }

    fn on_track_complete(&self, kind: ArtifactKind, outcome: &TrackOutcome) {
        let message = match outcome {
            TrackOutcome::Installed { tag } => format!("{} {}", "installed".green(), tag),
            TrackOutcome::UpToDate { local, .. } => format!("{} ({})", "up to date".blue(), local),
            TrackOutcome::Planned { tag } => format!("{} {}", "would install".yellow(), tag),
            TrackOutcome::NoRelease => "no release".dimmed().to_string(),
            TrackOutcome::Skipped => "skipped".dimmed().to_string(),
        };
        self.bar(kind).finish_with_message(message);
    }

    fn on_track_failed(&self, kind: ArtifactKind, error: &TrackError) {
        self.bar(kind)
            .abandon_with_message(format!("{} {}", "failed:".red(), error));
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl UpdateProgressNotifier for SimpleProgress {
    fn on_state_change(&self, kind: ArtifactKind, state: TrackState) {
        if matches!(state, TrackState::Idle) {
            return;
        }
        eprintln!("{} {} {}", "->".cyan(), kind.as_str().bold(), state);
    }

    fn on_track_complete(&self, kind: ArtifactKind, outcome: &TrackOutcome) {
        let detail = match outcome {
            TrackOutcome::Installed { tag } | TrackOutcome::Planned { tag } => tag.clone(),
            TrackOutcome::UpToDate { local, .. } => local.clone(),
            TrackOutcome::NoRelease | TrackOutcome::Skipped => String::new(),
        };
        eprintln!("  {} {} {}", "v".green(), kind.as_str(), detail);
    }

    fn on_track_failed(&self, kind: ArtifactKind, error: &TrackError) {
        eprintln!("  {} {} ({})", "x".red(), kind.as_str(), error);
    }
}
