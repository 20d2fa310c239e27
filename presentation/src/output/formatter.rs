//! Output formatter trait

use wanxiang_application::RunUpdateOutput;

/// Trait for formatting update run results
pub trait OutputFormatter {
    /// Human-readable summary
    fn format(&self, output: &RunUpdateOutput) -> String;

    /// Format as JSON
    fn format_json(&self, output: &RunUpdateOutput) -> String;
}
