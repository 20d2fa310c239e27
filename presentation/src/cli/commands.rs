//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the run summary
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for wanxiang-update
#[derive(Parser, Debug)]
#[command(name = "wanxiang-update")]
#[command(author, version, about = "Keep a Rime wanxiang working tree in sync with its release feed")]
#[command(long_about = r#"
wanxiang-update checks the release feed for newer configuration and
dictionary bundles and installs them into the current working tree.

Two independent tracks run on every invocation:
1. Configuration: installed only when the feed has a version newer than
   the one recorded in version.txt, which is then updated
2. Dictionary: the dict-nightly snapshot is always downloaded and merged
   into ./dicts

Configuration files are loaded from (in priority order):
1. WANXIANG_<SECTION>__<KEY> environment variables
2. --config <path>          Explicit config file
3. ./wanxiang-update.toml   Project-level config
4. ~/.config/wanxiang-update/config.toml   Global config

Example:
  wanxiang-update
  wanxiang-update --dry-run
  wanxiang-update --skip-dict -o json
"#)]
pub struct Cli {
    /// Report what would be installed without downloading anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Do not run the configuration track
    #[arg(long)]
    pub skip_config: bool,

    /// Do not run the dictionary track
    #[arg(long)]
    pub skip_dict: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["wanxiang-update"]);
        assert!(!cli.dry_run);
        assert!(!cli.skip_config);
        assert!(!cli.skip_dict);
        assert!(matches!(cli.output, OutputFormat::Text));
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "wanxiang-update",
            "-n",
            "--skip-dict",
            "-o",
            "json",
            "-vv",
            "--config",
            "custom.toml",
        ]);
        assert!(cli.dry_run);
        assert!(cli.skip_dict);
        assert!(matches!(cli.output, OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }
}
