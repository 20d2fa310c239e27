//! Console output formatter for update runs

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use serde_json::{Value, json};
use wanxiang_application::{RunUpdateOutput, TrackReport};
use wanxiang_domain::TrackOutcome;

/// Formats update results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete run summary
    pub fn format(output: &RunUpdateOutput) -> String {
        let mut text = String::new();

        text.push_str(&Self::header(if output.dry_run {
            "Update Check (dry run)"
        } else {
            "Update Summary"
        }));
        text.push('\n');

        if let Some(local) = &output.local_version {
            text.push_str(&format!("{} {}\n\n", "Installed:".cyan().bold(), local));
        }

        for report in output.reports() {
            text.push_str(&Self::track_line(report));
            text.push('\n');
        }

        text
    }

    /// Format as a JSON document
    pub fn format_json(output: &RunUpdateOutput) -> String {
        let value = json!({
            "success": output.is_success(),
            "dry_run": output.dry_run,
            "local_version": output.local_version.as_ref().map(|v| v.to_string()),
            "tracks": output.reports().iter().map(|r| Self::track_json(r)).collect::<Vec<_>>(),
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    fn track_json(report: &TrackReport) -> Value {
        match &report.result {
            Ok(outcome) => json!({
                "kind": report.kind,
                "outcome": outcome,
            }),
            Err(e) => json!({
                "kind": report.kind,
                "error": {
                    "category": e.category(),
                    "message": e.to_string(),
                },
            }),
        }
    }

    fn track_line(report: &TrackReport) -> String {
        let name = format!("{:<14}", report.kind.as_str()).bold();
        match &report.result {
            Ok(TrackOutcome::Installed { tag }) => {
                format!("  {} {} installed {}", "v".green(), name, tag.green())
            }
            Ok(TrackOutcome::UpToDate { local, remote }) => format!(
                "  {} {} up to date ({} installed, feed has {})",
                "=".blue(),
                name,
                local,
                remote
            ),
            Ok(TrackOutcome::Planned { tag }) => {
                format!("  {} {} would install {}", "~".yellow(), name, tag.yellow())
            }
            Ok(TrackOutcome::NoRelease) => {
                format!("  {} {} no release on the feed", "-".dimmed(), name)
            }
            Ok(TrackOutcome::Skipped) => format!("  {} {} skipped", "-".dimmed(), name),
            Err(e) => format!("  {} {} failed: {}", "x".red(), name, e.to_string().red()),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(50);
        format!("{}\n {}\n{}\n", line.cyan(), title.cyan().bold(), line.cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, output: &RunUpdateOutput) -> String {
        ConsoleFormatter::format(output)
    }

    fn format_json(&self, output: &RunUpdateOutput) -> String {
        ConsoleFormatter::format_json(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wanxiang_application::{FeedError, TrackError};
    use wanxiang_domain::{ArtifactKind, VersionIdentifier};

    fn sample() -> RunUpdateOutput {
        RunUpdateOutput {
            local_version: Some(VersionIdentifier::new("v1.0.0")),
            configuration: TrackReport::new(
                ArtifactKind::Configuration,
                Ok(TrackOutcome::Installed {
                    tag: "v1.1.0".to_string(),
                }),
            ),
            dictionary: TrackReport::new(
                ArtifactKind::Dictionary,
                Err(TrackError::Feed(FeedError::Network("HTTP 503".to_string()))),
            ),
            dry_run: false,
        }
    }

    #[test]
    fn test_format_mentions_each_track() {
        let text = ConsoleFormatter::format(&sample());
        assert!(text.contains("v1.0.0"));
        assert!(text.contains("installed"));
        assert!(text.contains("v1.1.0"));
        assert!(text.contains("Network error: HTTP 503"));
    }

    #[test]
    fn test_format_json() {
        let value: Value = serde_json::from_str(&ConsoleFormatter::format_json(&sample())).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["local_version"], "v1.0.0");
        assert_eq!(value["tracks"][0]["kind"], "configuration");
        assert_eq!(value["tracks"][0]["outcome"]["status"], "installed");
        assert_eq!(value["tracks"][1]["error"]["category"], "network");
    }
}
